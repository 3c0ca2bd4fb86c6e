use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::core::style::Fill;
use crate::error::ChartResult;

/// Pixel size of the chart's draw area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawArea {
    pub width: f64,
    pub height: f64,
}

impl DrawArea {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A location in draw-area pixel space, origin at the top-leading corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Orientation of the category axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BarOrientation {
    /// Bars grow upward from the bottom edge; categories run left to right.
    #[default]
    Standard,
    /// Bars grow rightward from the leading edge; categories run top to bottom.
    Horizontal,
}

/// One plotted bar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    value: f64,
    description: String,
    #[serde(default)]
    legend_tag: Option<String>,
    #[serde(default)]
    date: Option<DateTime<Utc>>,
    #[serde(default)]
    fill: Option<Fill>,
}

impl DataPoint {
    #[must_use]
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
            legend_tag: None,
            date: None,
            fill: None,
        }
    }

    pub fn from_decimal(value: Decimal, description: impl Into<String>) -> ChartResult<Self> {
        Ok(Self::new(decimal_to_f64(value, "value")?, description))
    }

    #[must_use]
    pub fn with_legend_tag(mut self, legend_tag: impl Into<String>) -> Self {
        self.legend_tag = Some(legend_tag.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = Some(fill);
        self
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn legend_tag(&self) -> Option<&str> {
        self.legend_tag.as_deref()
    }

    #[must_use]
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    #[must_use]
    pub fn fill(&self) -> Option<&Fill> {
        self.fill.as_ref()
    }
}

/// Ordered bar values; the index of a point is its category slot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataSet {
    points: Vec<DataPoint>,
    #[serde(default)]
    legend_title: String,
}

impl DataSet {
    #[must_use]
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self {
            points,
            legend_title: String::new(),
        }
    }

    #[must_use]
    pub fn with_legend_title(mut self, legend_title: impl Into<String>) -> Self {
        self.legend_title = legend_title.into();
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn legend_title(&self) -> &str {
        &self.legend_title
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn min_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .min()
            .map(OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map(OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.points.is_empty() {
            return None;
        }
        let sum: f64 = self.points.iter().map(|point| point.value).sum();
        Some(sum / self.points.len() as f64)
    }
}
