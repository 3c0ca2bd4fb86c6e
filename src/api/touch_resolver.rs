//! Touch-to-data-point resolution for both bar orientations.
//!
//! Every data point owns one band of `extent / count` pixels along the
//! category axis. A touch resolves to the band under it; misses and
//! degenerate data resolve to no hits instead of failing.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::primitives::scaling_denominator;
use crate::core::{BarOrientation, DataPoint, DrawArea, Point};
use crate::extensions::ExtraLineProbe;
use crate::interaction::{MarkerKind, TouchedPoint};

/// Resolved hits for one touch: at most the bar hit plus an overlay hit.
pub type TouchHits = SmallVec<[TouchedPoint; 2]>;

/// Resolves a touch for the given orientation.
#[must_use]
pub fn resolve_touch(
    orientation: BarOrientation,
    points: &[DataPoint],
    max_value: f64,
    touch: Point,
    area: DrawArea,
    extra_line: Option<&dyn ExtraLineProbe>,
) -> TouchHits {
    match orientation {
        BarOrientation::Standard => {
            resolve_standard_touch(points, max_value, touch, area, extra_line)
        }
        BarOrientation::Horizontal => {
            resolve_horizontal_touch(points, max_value, touch, area, extra_line)
        }
    }
}

/// Horizontal bars: categories are stacked top to bottom, values grow rightward.
#[must_use]
pub fn resolve_horizontal_touch(
    points: &[DataPoint],
    max_value: f64,
    touch: Point,
    area: DrawArea,
    extra_line: Option<&dyn ExtraLineProbe>,
) -> TouchHits {
    let mut hits = TouchHits::new();
    let Some(max_value) = usable_max(points, max_value, area) else {
        return hits;
    };

    let y_section = area.height / points.len() as f64;
    let x_section = area.width / max_value;
    let Some(index) = band_index(touch.y, area.height, points.len()) else {
        trace!(y = touch.y, "horizontal touch outside bar bands");
        return hits;
    };

    let data_point = &points[index];
    let location = Point::new(
        data_point.value() * x_section,
        index as f64 * y_section + y_section * 0.5,
    );
    hits.push(TouchedPoint {
        data_point: data_point.clone(),
        location,
        kind: MarkerKind::Bar,
    });
    push_extra_line_hit(&mut hits, extra_line, touch, area);
    hits
}

/// Standard bars: categories run left to right, values grow upward.
#[must_use]
pub fn resolve_standard_touch(
    points: &[DataPoint],
    max_value: f64,
    touch: Point,
    area: DrawArea,
    extra_line: Option<&dyn ExtraLineProbe>,
) -> TouchHits {
    let mut hits = TouchHits::new();
    let Some(max_value) = usable_max(points, max_value, area) else {
        return hits;
    };

    let x_section = area.width / points.len() as f64;
    let y_section = area.height / max_value;
    let Some(index) = band_index(touch.x, area.width, points.len()) else {
        trace!(x = touch.x, "standard touch outside bar bands");
        return hits;
    };

    let data_point = &points[index];
    let location = Point::new(
        index as f64 * x_section + x_section * 0.5,
        area.height - data_point.value() * y_section,
    );
    hits.push(TouchedPoint {
        data_point: data_point.clone(),
        location,
        kind: MarkerKind::Bar,
    });
    push_extra_line_hit(&mut hits, extra_line, touch, area);
    hits
}

fn usable_max(points: &[DataPoint], max_value: f64, area: DrawArea) -> Option<f64> {
    if points.is_empty() || !area.is_valid() {
        return None;
    }
    scaling_denominator(max_value)
}

/// Band under `coordinate` when the axis of length `extent` is split into `count` bands.
fn band_index(coordinate: f64, extent: f64, count: usize) -> Option<usize> {
    if !coordinate.is_finite() || coordinate < 0.0 || coordinate >= extent {
        return None;
    }
    let section = extent / count as f64;
    // `coordinate < extent` can still round up to `count` in the division.
    let index = (coordinate / section).floor() as usize;
    Some(index.min(count - 1))
}

fn push_extra_line_hit(
    hits: &mut TouchHits,
    extra_line: Option<&dyn ExtraLineProbe>,
    touch: Point,
    area: DrawArea,
) {
    let Some(hit) = extra_line.and_then(|line| line.point_and_location(touch, area)) else {
        return;
    };
    hits.push(TouchedPoint {
        data_point: DataPoint::new(hit.value, hit.description).with_legend_tag(hit.legend_tag),
        location: hit.location,
        kind: MarkerKind::ExtraLine,
    });
}

#[cfg(test)]
mod tests {
    use super::band_index;

    #[test]
    fn band_index_rejects_edges_outside_extent() {
        assert_eq!(band_index(-0.001, 90.0, 3), None);
        assert_eq!(band_index(90.0, 90.0, 3), None);
        assert_eq!(band_index(f64::NAN, 90.0, 3), None);
    }

    #[test]
    fn band_index_maps_band_boundaries_to_lower_band_start() {
        assert_eq!(band_index(0.0, 90.0, 3), Some(0));
        assert_eq!(band_index(29.999, 90.0, 3), Some(0));
        assert_eq!(band_index(30.0, 90.0, 3), Some(1));
        assert_eq!(band_index(89.999, 90.0, 3), Some(2));
    }
}
