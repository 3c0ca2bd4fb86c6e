use serde::{Deserialize, Serialize};

use crate::core::primitives::scaling_denominator;
use crate::core::style::{BarStyle, ColourFrom, CornerRadius, Fill};
use crate::core::types::{BarOrientation, DataPoint, DrawArea};
use crate::error::{ChartError, ChartResult};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

/// Deterministic bar rectangle in draw-area pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: CornerRadius,
    pub fill: Fill,
}

/// Projects data points into bar rectangles.
///
/// Each point owns one category band (`extent / count`) along the category
/// axis. The bar covers `style.bar_width` of its band, centered, and its
/// length along the value axis is `value / max_value * extent * progress`.
/// `progress` is the animation grow factor in `[0, 1]`.
///
/// Degenerate input (no points or a zero `max_value`) projects to no bars.
pub fn project_bars(
    points: &[DataPoint],
    max_value: f64,
    area: DrawArea,
    style: &BarStyle,
    orientation: BarOrientation,
    progress: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if !area.is_valid() {
        return Err(ChartError::InvalidDrawArea {
            width: area.width,
            height: area.height,
        });
    }
    if !progress.is_finite() || !(0.0..=1.0).contains(&progress) {
        return Err(ChartError::InvalidData(
            "bar animation progress must be finite and in [0, 1]".to_owned(),
        ));
    }

    let Some(max_value) = scaling_denominator(max_value) else {
        return Ok(Vec::new());
    };
    if points.is_empty() {
        return Ok(Vec::new());
    }

    let project = |(index, point): (usize, &DataPoint)| {
        project_bar(
            index,
            point,
            points.len(),
            max_value,
            area,
            style,
            orientation,
            progress,
        )
    };

    #[cfg(feature = "parallel-projection")]
    let bars = points.par_iter().enumerate().map(project).collect();
    #[cfg(not(feature = "parallel-projection"))]
    let bars = points.iter().enumerate().map(project).collect();

    Ok(bars)
}

#[allow(clippy::too_many_arguments)]
fn project_bar(
    index: usize,
    point: &DataPoint,
    count: usize,
    max_value: f64,
    area: DrawArea,
    style: &BarStyle,
    orientation: BarOrientation,
    progress: f64,
) -> BarGeometry {
    let (band_extent, value_extent) = match orientation {
        BarOrientation::Standard => (area.width, area.height),
        BarOrientation::Horizontal => (area.height, area.width),
    };

    let band = band_extent / count as f64;
    let thickness = band * style.bar_width;
    let band_start = index as f64 * band + (band - thickness) * 0.5;
    let length = point.value() / max_value * value_extent * progress;

    let fill = resolve_fill(point, style);
    match orientation {
        BarOrientation::Standard => {
            // Negative values hang below the bottom edge.
            let (top, height) = if length >= 0.0 {
                (value_extent - length, length)
            } else {
                (value_extent, -length)
            };
            BarGeometry {
                index,
                x: band_start,
                y: top,
                width: thickness,
                height,
                corner_radius: style.corner_radius,
                fill,
            }
        }
        BarOrientation::Horizontal => {
            let (left, width) = if length >= 0.0 {
                (0.0, length)
            } else {
                (length, -length)
            };
            BarGeometry {
                index,
                x: left,
                y: band_start,
                width,
                height: thickness,
                corner_radius: style.corner_radius,
                fill,
            }
        }
    }
}

/// Selects the fill for one bar according to `style.colour_from`.
#[must_use]
pub fn resolve_fill(point: &DataPoint, style: &BarStyle) -> Fill {
    match style.colour_from {
        ColourFrom::BarStyle => style.fill.clone(),
        ColourFrom::DataPoints => point.fill().cloned().unwrap_or_else(|| style.fill.clone()),
    }
}
