use crate::core::{Animation, BarStyle, DataSet};
use crate::error::{ChartError, ChartResult};
use crate::interaction::BarMarkerType;

use super::AxisLabelConfig;

pub(super) fn validate_bar_style(style: &BarStyle) -> ChartResult<()> {
    if !style.bar_width.is_finite() || style.bar_width <= 0.0 || style.bar_width > 1.0 {
        return Err(ChartError::InvalidConfig(
            "bar width must be finite and in (0, 1]".to_owned(),
        ));
    }
    for (name, radius) in [
        ("top", style.corner_radius.top),
        ("bottom", style.corner_radius.bottom),
    ] {
        if !radius.is_finite() || radius < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} corner radius must be finite and >= 0"
            )));
        }
    }
    style
        .fill
        .validate()
        .map_err(|err| ChartError::InvalidConfig(format!("bar fill: {err}")))
}

pub(super) fn validate_animation(animation: Animation) -> ChartResult<()> {
    if animation.duration_ms == 0 {
        return Err(ChartError::InvalidConfig(
            "animation duration must be > 0 ms".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_data_set(data_set: &DataSet) -> ChartResult<()> {
    if let Some(index) = data_set
        .points()
        .iter()
        .position(|point| !point.value().is_finite())
    {
        return Err(ChartError::InvalidData(format!(
            "data point {index} value must be finite"
        )));
    }
    for point in data_set.points() {
        if let Some(fill) = point.fill() {
            fill.validate()?;
        }
    }
    Ok(())
}

pub(super) fn validate_axis_labels(config: &AxisLabelConfig) -> ChartResult<()> {
    if config.value_label_count < 2 {
        return Err(ChartError::InvalidConfig(
            "value axis label count must be >= 2".to_owned(),
        ));
    }
    if config.value_label_decimals > 12 {
        return Err(ChartError::InvalidConfig(
            "value axis decimal precision must be <= 12".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_marker_type(marker_type: BarMarkerType) -> ChartResult<()> {
    let Some(style) = marker_type.line_style() else {
        return Ok(());
    };
    if !style.line_width.is_finite() || style.line_width <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "marker line width must be finite and > 0".to_owned(),
        ));
    }
    style
        .colour
        .validate()
        .map_err(|err| ChartError::InvalidConfig(format!("marker colour: {err}")))
}
