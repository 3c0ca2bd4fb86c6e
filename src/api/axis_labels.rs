use serde::{Deserialize, Serialize};

use crate::core::ValueBounds;

/// Axis label configuration.
///
/// The category axis runs along the bars' slots (x for standard bars, y for
/// horizontal bars); the value axis runs along bar length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelConfig {
    /// Replaces data point descriptions on the category axis.
    #[serde(default)]
    pub category_labels: Option<Vec<String>>,
    /// Replaces generated labels on the value axis.
    #[serde(default)]
    pub value_labels: Option<Vec<String>>,
    #[serde(default = "default_value_label_count")]
    pub value_label_count: usize,
    #[serde(default)]
    pub value_label_decimals: u8,
}

impl Default for AxisLabelConfig {
    fn default() -> Self {
        Self {
            category_labels: None,
            value_labels: None,
            value_label_count: default_value_label_count(),
            value_label_decimals: 0,
        }
    }
}

impl AxisLabelConfig {
    #[must_use]
    pub fn with_category_labels(mut self, labels: Vec<String>) -> Self {
        self.category_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_value_labels(mut self, labels: Vec<String>) -> Self {
        self.value_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_value_label_count(mut self, count: usize) -> Self {
        self.value_label_count = count;
        self
    }

    #[must_use]
    pub fn with_value_label_decimals(mut self, decimals: u8) -> Self {
        self.value_label_decimals = decimals;
        self
    }
}

fn default_value_label_count() -> usize {
    5
}

/// Evenly spaced values from `bounds.min` to `bounds.max`, both inclusive.
#[must_use]
pub fn value_axis_ticks(bounds: ValueBounds, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![bounds.min],
        _ => {
            let step = bounds.range() / (count - 1) as f64;
            (0..count)
                .map(|index| bounds.min + step * index as f64)
                .collect()
        }
    }
}

#[must_use]
pub fn format_axis_value(value: f64, decimals: u8) -> String {
    format!("{value:.precision$}", precision = usize::from(decimals))
}
