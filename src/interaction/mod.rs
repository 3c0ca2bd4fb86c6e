use serde::{Deserialize, Serialize};

use crate::core::{Color, DataPoint, Point};

/// Which series produced a touch hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerKind {
    Bar,
    ExtraLine,
}

/// Stroke used for marker guide lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLineStyle {
    pub colour: Color,
    pub line_width: f64,
    pub dashed: bool,
}

impl Default for MarkerLineStyle {
    fn default() -> Self {
        Self {
            colour: Color::BLACK,
            line_width: 1.0,
            dashed: true,
        }
    }
}

/// Shape of the callout drawn at a touched bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BarMarkerType {
    None,
    /// Line along the value axis through the touched point.
    Vertical(MarkerLineStyle),
    /// Crosshair spanning the whole draw area.
    Full(MarkerLineStyle),
    /// Lines from the touched point to the bottom and leading edges.
    BottomLeading(MarkerLineStyle),
    BottomTrailing(MarkerLineStyle),
    TopLeading(MarkerLineStyle),
    TopTrailing(MarkerLineStyle),
}

impl Default for BarMarkerType {
    fn default() -> Self {
        Self::Full(MarkerLineStyle::default())
    }
}

impl BarMarkerType {
    #[must_use]
    pub fn line_style(self) -> Option<MarkerLineStyle> {
        match self {
            Self::None => None,
            Self::Vertical(style)
            | Self::Full(style)
            | Self::BottomLeading(style)
            | Self::BottomTrailing(style)
            | Self::TopLeading(style)
            | Self::TopTrailing(style) => Some(style),
        }
    }
}

/// One resolved touch hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TouchedPoint {
    pub data_point: DataPoint,
    pub location: Point,
    pub kind: MarkerKind,
}

/// Marker placement handed to the marker display collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarMarkerData {
    pub marker_type: BarMarkerType,
    pub location: Point,
}

/// Receives marker placements after every touch resolution.
///
/// An empty slice means no marker should be shown.
pub trait MarkerSink {
    fn update(&mut self, markers: &[BarMarkerData]);
}

/// Retains the latest marker placements for a rendering pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOverlay {
    markers: Vec<BarMarkerData>,
}

impl MarkerOverlay {
    #[must_use]
    pub fn markers(&self) -> &[BarMarkerData] {
        &self.markers
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
    }
}

impl MarkerSink for MarkerOverlay {
    fn update(&mut self, markers: &[BarMarkerData]) {
        self.markers.clear();
        self.markers.extend_from_slice(markers);
    }
}

/// Touch lifecycle of a chart: `Armed` while a touch has resolved points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Idle,
    Armed,
}
