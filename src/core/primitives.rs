use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Returns `Some(value)` when `value` can be used as a scaling denominator.
#[must_use]
pub fn scaling_denominator(value: f64) -> Option<f64> {
    (value.is_finite() && value != 0.0).then_some(value)
}
