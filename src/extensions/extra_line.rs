use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::{Color, DrawArea, Point};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLinePoint {
    pub value: f64,
    pub description: String,
}

impl ExtraLinePoint {
    #[must_use]
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Self {
            value,
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineType {
    #[default]
    Line,
    Curved,
}

/// Horizontal placement of overlay points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineSpacing {
    /// One point per bar slot, centered in the slot.
    #[default]
    Bar,
    /// First and last points sit on the draw-area edges.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtraLineStyle {
    pub line_colour: Color,
    pub line_type: LineType,
    pub line_spacing: LineSpacing,
    pub line_width: f64,
}

impl Default for ExtraLineStyle {
    fn default() -> Self {
        Self {
            line_colour: Color::GRAY,
            line_type: LineType::Line,
            line_spacing: LineSpacing::Bar,
            line_width: 2.0,
        }
    }
}

/// Overlay hit reported for a touch location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLineHit {
    pub value: f64,
    pub description: String,
    pub legend_tag: String,
    pub location: Point,
}

/// Hit testing seam for single-series overlays drawn atop the bars.
pub trait ExtraLineProbe {
    fn point_and_location(&self, touch: Point, area: DrawArea) -> Option<ExtraLineHit>;
}

/// Auxiliary single-series line with its own value range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraLine {
    pub legend_title: String,
    pub legend_tag: String,
    pub points: Vec<ExtraLinePoint>,
    #[serde(default)]
    pub style: ExtraLineStyle,
}

impl ExtraLine {
    #[must_use]
    pub fn new(legend_title: impl Into<String>, points: Vec<ExtraLinePoint>) -> Self {
        let legend_title = legend_title.into();
        Self {
            legend_tag: legend_title.clone(),
            legend_title,
            points,
            style: ExtraLineStyle::default(),
        }
    }

    #[must_use]
    pub fn with_legend_tag(mut self, legend_tag: impl Into<String>) -> Self {
        self.legend_tag = legend_tag.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ExtraLineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.points.iter().any(|point| !point.value.is_finite()) {
            return Err(ChartError::InvalidData(
                "extra line values must be finite".to_owned(),
            ));
        }
        if !self.style.line_width.is_finite() || self.style.line_width <= 0.0 {
            return Err(ChartError::InvalidData(
                "extra line width must be finite and > 0".to_owned(),
            ));
        }
        self.style.line_colour.validate()
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .min()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.points
            .iter()
            .map(|point| OrderedFloat(point.value))
            .max()
            .map_or(0.0, OrderedFloat::into_inner)
    }

    #[must_use]
    pub fn range(&self) -> f64 {
        self.max_value() - self.min_value()
    }

    /// Projects every overlay point into draw-area pixels.
    #[must_use]
    pub fn project_points(&self, area: DrawArea) -> Vec<Point> {
        if !area.is_valid() {
            return Vec::new();
        }
        (0..self.points.len())
            .filter_map(|index| self.location_of(index, area))
            .collect()
    }

    fn spacing(&self) -> LineSpacing {
        // A single point has no span to distribute along the line.
        if self.points.len() < 2 {
            LineSpacing::Bar
        } else {
            self.style.line_spacing
        }
    }

    fn x_section(&self, area: DrawArea) -> f64 {
        match self.spacing() {
            LineSpacing::Bar => area.width / self.points.len() as f64,
            LineSpacing::Line => area.width / (self.points.len() - 1) as f64,
        }
    }

    fn location_of(&self, index: usize, area: DrawArea) -> Option<Point> {
        let point = self.points.get(index)?;
        let x_section = self.x_section(area);
        let x = match self.spacing() {
            LineSpacing::Bar => index as f64 * x_section + x_section * 0.5,
            LineSpacing::Line => index as f64 * x_section,
        };
        let range = self.range();
        let y = if range == 0.0 {
            area.height * 0.5
        } else {
            (1.0 - (point.value - self.min_value()) / range) * area.height
        };
        Some(Point::new(x, y))
    }

    fn index_at(&self, x: f64, area: DrawArea) -> Option<usize> {
        if self.points.is_empty() || !x.is_finite() {
            return None;
        }
        let x_section = self.x_section(area);
        let raw = match self.spacing() {
            LineSpacing::Bar => (x / x_section).floor(),
            LineSpacing::Line => ((x + x_section * 0.5) / x_section).floor(),
        };
        if raw < 0.0 || raw >= self.points.len() as f64 {
            return None;
        }
        Some(raw as usize)
    }
}

impl ExtraLineProbe for ExtraLine {
    fn point_and_location(&self, touch: Point, area: DrawArea) -> Option<ExtraLineHit> {
        if !area.is_valid() {
            return None;
        }
        let index = self.index_at(touch.x, area)?;
        let point = &self.points[index];
        let location = self.location_of(index, area)?;
        Some(ExtraLineHit {
            value: point.value,
            description: point.description.clone(),
            legend_tag: self.legend_tag.clone(),
            location,
        })
    }
}
