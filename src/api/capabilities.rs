//! Capability interfaces composed by `BarChartData`.
//!
//! Each trait covers one concern a rendering layer or touch handler needs, so
//! hosts can depend on the narrow surface they actually use.

use serde::{Deserialize, Serialize};

use crate::core::{BarOrientation, DataPoint, DrawArea, Point};
use crate::error::ChartResult;
use crate::extensions::ExtraLine;
use crate::interaction::MarkerSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartName {
    Bar,
    HorizontalBar,
}

pub trait ChartKind {
    fn chart_name(&self) -> ChartName;
    fn orientation(&self) -> BarOrientation;
}

/// Value statistics derived from the data set and baseline/topline policies.
pub trait DataHelper {
    fn min_value(&self) -> f64;
    fn max_value(&self) -> f64;
    fn range(&self) -> f64;
    /// Mean of the data set, `0` when empty.
    fn average(&self) -> f64;
}

pub trait ViewData {
    /// Labels along the bar slots, one per data point unless overridden.
    fn category_axis_labels(&self) -> Vec<String>;
    /// Labels along bar length.
    fn value_axis_labels(&self) -> Vec<String>;
    fn value_axis_ticks(&self) -> Vec<f64>;
}

pub trait Touchable {
    /// Resolves `touch`, forwards marker placements to `markers`, retains the
    /// touched points and notifies subscribers.
    fn process_touch_interaction(
        &mut self,
        markers: &mut dyn MarkerSink,
        touch: Point,
        area: DrawArea,
    );

    /// Clears retained touch points.
    fn touch_did_finish(&mut self);

    fn touch_point_data(&self) -> &[DataPoint];
}

pub trait ExtraLineSupport {
    fn extra_line(&self) -> Option<&ExtraLine>;
    fn set_extra_line(&mut self, extra_line: Option<ExtraLine>) -> ChartResult<()>;
}
