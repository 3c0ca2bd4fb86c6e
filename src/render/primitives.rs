use serde::{Deserialize, Serialize};

use crate::core::{Color, CornerRadius, Fill, Point};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeDash {
    #[default]
    Solid,
    Dashed,
}

/// Straight stroke between two points of the draw area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub line_width: f64,
    pub colour: Color,
    pub dash: StrokeDash,
}

impl LinePrimitive {
    #[must_use]
    pub const fn segment(from: Point, to: Point, line_width: f64, colour: Color) -> Self {
        Self {
            from,
            to,
            line_width,
            colour,
            dash: StrokeDash::Solid,
        }
    }

    #[must_use]
    pub const fn dashed(mut self, dashed: bool) -> Self {
        self.dash = if dashed {
            StrokeDash::Dashed
        } else {
            StrokeDash::Solid
        };
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !(self.from.is_finite() && self.to.is_finite()) {
            return Err(ChartError::InvalidData(
                "line end points must be finite".to_owned(),
            ));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(ChartError::InvalidData(format!(
                "line width must be finite and > 0, got {}",
                self.line_width
            )));
        }
        self.colour.validate()
    }
}

/// One rounded bar, already scaled into the draw area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: CornerRadius,
    pub fill: Fill,
}

impl BarPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "bar `{name}` must be finite"
                )));
            }
        }
        if self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "bar size must be >= 0".to_owned(),
            ));
        }
        self.fill.validate()
    }
}

/// Which part of the label sits on `TextPrimitive::anchor`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    Leading,
    #[default]
    Middle,
    Trailing,
}

/// Label such as the no-data placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub anchor: Point,
    pub alignment: TextAnchor,
    pub font_size: f64,
    pub colour: Color,
}

impl TextPrimitive {
    /// Label centred on `anchor`.
    #[must_use]
    pub fn centred(text: impl Into<String>, anchor: Point, font_size: f64, colour: Color) -> Self {
        Self {
            text: text.into(),
            anchor,
            alignment: TextAnchor::Middle,
            font_size,
            colour,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData("label text is empty".to_owned()));
        }
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(
                "label anchor must be finite".to_owned(),
            ));
        }
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(ChartError::InvalidData(format!(
                "label font size must be finite and > 0, got {}",
                self.font_size
            )));
        }
        self.colour.validate()
    }
}
