use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{
    Animation, BarOrientation, BarStyle, Baseline, DataPoint, DataSet, DrawArea, Point, Topline,
    ValueBounds,
};
use crate::error::ChartResult;
use crate::extensions::{ExtraLine, ExtraLineProbe};
use crate::interaction::{BarMarkerData, BarMarkerType, MarkerSink, TouchPhase};

use super::axis_labels::{format_axis_value, value_axis_ticks};
use super::capabilities::{
    ChartKind, ChartName, DataHelper, ExtraLineSupport, Touchable, ViewData,
};
use super::subscribers::SubscriberRegistry;
use super::touch_resolver::{TouchHits, resolve_touch};
use super::validation::{
    validate_animation, validate_axis_labels, validate_bar_style, validate_data_set,
    validate_marker_type,
};
use super::{AxisLabelConfig, BarChartConfig, ChartContext, ChartEvent, ChartSubscriber, SubscriptionId};

/// Data and styling for one bar chart.
///
/// Every mutation notifies subscribers synchronously, in subscription order,
/// after the new state is in place.
#[derive(Debug)]
pub struct BarChartData {
    data_set: DataSet,
    config: BarChartConfig,
    extra_line: Option<ExtraLine>,
    touch_point_data: Vec<DataPoint>,
    subscribers: SubscriberRegistry,
}

impl BarChartData {
    pub fn new(data_set: DataSet, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        validate_data_set(&data_set)?;
        debug!(
            points_len = data_set.len(),
            orientation = ?config.orientation,
            "create bar chart data"
        );
        Ok(Self {
            data_set,
            config,
            extra_line: None,
            touch_point_data: Vec::new(),
            subscribers: SubscriberRegistry::default(),
        })
    }

    /// Standard (vertical) bar chart with default styling.
    pub fn standard(data_set: DataSet) -> ChartResult<Self> {
        Self::new(data_set, BarChartConfig::new(BarOrientation::Standard))
    }

    /// Horizontal bar chart with default styling.
    pub fn horizontal(data_set: DataSet) -> ChartResult<Self> {
        Self::new(data_set, BarChartConfig::horizontal())
    }

    #[must_use]
    pub fn config(&self) -> &BarChartConfig {
        &self.config
    }

    #[must_use]
    pub fn data_set(&self) -> &DataSet {
        &self.data_set
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        self.data_set.points()
    }

    /// Replaces the data set wholesale.
    pub fn set_data_set(&mut self, data_set: DataSet) -> ChartResult<()> {
        validate_data_set(&data_set)?;
        debug!(
            previous_len = self.data_set.len(),
            points_len = data_set.len(),
            "set data set"
        );
        self.data_set = data_set;
        self.notify(ChartEvent::DataSetReplaced {
            points_len: self.data_set.len(),
        });
        Ok(())
    }

    #[must_use]
    pub fn bar_style(&self) -> &BarStyle {
        &self.config.bar_style
    }

    pub fn set_bar_style(&mut self, style: BarStyle) -> ChartResult<()> {
        validate_bar_style(&style)?;
        debug!(bar_width = style.bar_width, "set bar style");
        self.config.bar_style = style;
        self.notify(ChartEvent::BarStyleChanged);
        Ok(())
    }

    #[must_use]
    pub fn should_animate(&self) -> bool {
        self.config.should_animate
    }

    pub fn set_should_animate(&mut self, should_animate: bool) {
        self.config.should_animate = should_animate;
        self.notify(ChartEvent::AnimationChanged { should_animate });
    }

    #[must_use]
    pub fn animation(&self) -> Animation {
        self.config.animation
    }

    pub fn set_animation(&mut self, animation: Animation) -> ChartResult<()> {
        validate_animation(animation)?;
        self.config.animation = animation;
        self.notify(ChartEvent::AnimationChanged {
            should_animate: self.config.should_animate,
        });
        Ok(())
    }

    #[must_use]
    pub fn no_data_text(&self) -> &str {
        &self.config.no_data_text
    }

    pub fn set_no_data_text(&mut self, text: impl Into<String>) {
        self.config.no_data_text = text.into();
        self.notify(ChartEvent::NoDataTextChanged);
    }

    #[must_use]
    pub fn baseline(&self) -> Baseline {
        self.config.baseline
    }

    pub fn set_baseline(&mut self, baseline: Baseline) -> ChartResult<()> {
        self.update_value_policy(baseline, self.config.topline)
    }

    #[must_use]
    pub fn topline(&self) -> Topline {
        self.config.topline
    }

    pub fn set_topline(&mut self, topline: Topline) -> ChartResult<()> {
        self.update_value_policy(self.config.baseline, topline)
    }

    fn update_value_policy(&mut self, baseline: Baseline, topline: Topline) -> ChartResult<()> {
        let candidate = self
            .config
            .clone()
            .with_baseline(baseline)
            .with_topline(topline);
        candidate.validate()?;
        self.config = candidate;
        let bounds = self.value_bounds();
        debug!(min = bounds.min, max = bounds.max, "set value policy");
        self.notify(ChartEvent::ValuePolicyChanged {
            min: bounds.min,
            max: bounds.max,
        });
        Ok(())
    }

    #[must_use]
    pub fn value_bounds(&self) -> ValueBounds {
        ValueBounds::resolve(&self.data_set, self.config.baseline, self.config.topline)
    }

    /// `false` when the chart must show its no-data text instead of bars.
    #[must_use]
    pub fn has_data(&self) -> bool {
        !self.data_set.is_empty() && self.value_bounds().scaling_max().is_some()
    }

    #[must_use]
    pub fn axis_labels(&self) -> &AxisLabelConfig {
        &self.config.axis_labels
    }

    pub fn set_axis_labels(&mut self, axis_labels: AxisLabelConfig) -> ChartResult<()> {
        validate_axis_labels(&axis_labels)?;
        self.config.axis_labels = axis_labels;
        self.notify(ChartEvent::AxisLabelsChanged);
        Ok(())
    }

    #[must_use]
    pub fn touch_marker_type(&self) -> BarMarkerType {
        self.config.touch_marker_type
    }

    pub fn set_touch_marker_type(&mut self, marker_type: BarMarkerType) -> ChartResult<()> {
        validate_marker_type(marker_type)?;
        self.config.touch_marker_type = marker_type;
        self.notify(ChartEvent::TouchMarkerTypeChanged);
        Ok(())
    }

    /// Resolves `touch` without retaining state or notifying anyone.
    #[must_use]
    pub fn resolve_touch(&self, touch: Point, area: DrawArea) -> TouchHits {
        let extra_line = self
            .extra_line
            .as_ref()
            .map(|line| line as &dyn ExtraLineProbe);
        resolve_touch(
            self.config.orientation,
            self.data_set.points(),
            self.value_bounds().max,
            touch,
            area,
            extra_line,
        )
    }

    #[must_use]
    pub fn touch_phase(&self) -> TouchPhase {
        if self.touch_point_data.is_empty() {
            TouchPhase::Idle
        } else {
            TouchPhase::Armed
        }
    }

    /// Registers a subscriber; it receives every later change notification.
    pub fn subscribe(&mut self, subscriber: impl ChartSubscriber + 'static) -> SubscriptionId {
        self.subscribers.insert(Box::new(subscriber))
    }

    /// Returns `true` when the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    #[must_use]
    pub fn context(&self) -> ChartContext {
        let bounds = self.value_bounds();
        ChartContext {
            orientation: self.config.orientation,
            points_len: self.data_set.len(),
            min_value: bounds.min,
            max_value: bounds.max,
            has_data: self.has_data(),
            should_animate: self.config.should_animate,
            touch_phase: self.touch_phase(),
        }
    }

    fn notify(&mut self, event: ChartEvent) {
        let context = self.context();
        self.subscribers.notify(&event, context);
    }
}

impl ChartKind for BarChartData {
    fn chart_name(&self) -> ChartName {
        match self.config.orientation {
            BarOrientation::Standard => ChartName::Bar,
            BarOrientation::Horizontal => ChartName::HorizontalBar,
        }
    }

    fn orientation(&self) -> BarOrientation {
        self.config.orientation
    }
}

impl DataHelper for BarChartData {
    fn min_value(&self) -> f64 {
        self.value_bounds().min
    }

    fn max_value(&self) -> f64 {
        self.value_bounds().max
    }

    fn range(&self) -> f64 {
        self.value_bounds().range()
    }

    fn average(&self) -> f64 {
        self.data_set.average().unwrap_or(0.0)
    }
}

impl ViewData for BarChartData {
    fn category_axis_labels(&self) -> Vec<String> {
        match &self.config.axis_labels.category_labels {
            Some(labels) => labels.clone(),
            None => self
                .data_set
                .points()
                .iter()
                .map(|point| point.description().to_owned())
                .collect(),
        }
    }

    fn value_axis_labels(&self) -> Vec<String> {
        if let Some(labels) = &self.config.axis_labels.value_labels {
            return labels.clone();
        }
        let decimals = self.config.axis_labels.value_label_decimals;
        self.value_axis_ticks()
            .into_iter()
            .map(|value| format_axis_value(value, decimals))
            .collect()
    }

    fn value_axis_ticks(&self) -> Vec<f64> {
        if self.data_set.is_empty() {
            return Vec::new();
        }
        value_axis_ticks(self.value_bounds(), self.config.axis_labels.value_label_count)
    }
}

impl Touchable for BarChartData {
    fn process_touch_interaction(
        &mut self,
        markers: &mut dyn MarkerSink,
        touch: Point,
        area: DrawArea,
    ) {
        let hits = self.resolve_touch(touch, area);
        let marker_type = self.config.touch_marker_type;
        let marker_data: SmallVec<[BarMarkerData; 2]> = hits
            .iter()
            .map(|hit| BarMarkerData {
                marker_type,
                location: hit.location,
            })
            .collect();
        markers.update(&marker_data);

        trace!(
            x = touch.x,
            y = touch.y,
            hits = hits.len(),
            "processed touch interaction"
        );
        self.touch_point_data = hits.iter().map(|hit| hit.data_point.clone()).collect();
        self.notify(ChartEvent::TouchResolved { hits });
    }

    fn touch_did_finish(&mut self) {
        self.touch_point_data.clear();
        self.notify(ChartEvent::TouchEnded);
    }

    fn touch_point_data(&self) -> &[DataPoint] {
        &self.touch_point_data
    }
}

impl ExtraLineSupport for BarChartData {
    fn extra_line(&self) -> Option<&ExtraLine> {
        self.extra_line.as_ref()
    }

    fn set_extra_line(&mut self, extra_line: Option<ExtraLine>) -> ChartResult<()> {
        if let Some(line) = &extra_line {
            line.validate()?;
        }
        self.extra_line = extra_line;
        self.notify(ChartEvent::ExtraLineChanged {
            present: self.extra_line.is_some(),
        });
        Ok(())
    }
}
