use serde::{Deserialize, Serialize};

use crate::core::primitives::scaling_denominator;
use crate::core::types::DataSet;

/// Policy for the lower end of the value range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Baseline {
    /// Smallest value in the data set.
    #[default]
    MinimumValue,
    /// Smaller of the data set minimum and the given value.
    MinimumWithMaximum(f64),
    Zero,
}

/// Policy for the upper end of the value range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Topline {
    /// Largest value in the data set.
    #[default]
    MaximumValue,
    /// Larger of the data set maximum and the given value.
    Maximum(f64),
}

/// Value range derived from a data set and its baseline/topline policies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueBounds {
    pub min: f64,
    pub max: f64,
}

impl ValueBounds {
    /// Empty data sets resolve their data-derived ends to `0`.
    #[must_use]
    pub fn resolve(data_set: &DataSet, baseline: Baseline, topline: Topline) -> Self {
        let data_min = data_set.min_value().unwrap_or(0.0);
        let data_max = data_set.max_value().unwrap_or(0.0);

        let min = match baseline {
            Baseline::MinimumValue => data_min,
            Baseline::MinimumWithMaximum(value) => data_min.min(value),
            Baseline::Zero => 0.0,
        };
        let max = match topline {
            Topline::MaximumValue => data_max,
            Topline::Maximum(value) => data_max.max(value),
        };

        Self { min, max }
    }

    #[must_use]
    pub fn range(self) -> f64 {
        self.max - self.min
    }

    /// Bars scale by `value / max`; `None` when that would divide by zero.
    #[must_use]
    pub fn scaling_max(self) -> Option<f64> {
        scaling_denominator(self.max)
    }
}
