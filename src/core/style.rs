use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Self = Self::rgb(0.5, 0.5, 0.5);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Normalized anchor inside a bar's bounding box, `(0, 0)` is top-leading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitPoint {
    pub x: f64,
    pub y: f64,
}

impl UnitPoint {
    pub const TOP: Self = Self::new(0.5, 0.0);
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    pub const LEADING: Self = Self::new(0.0, 0.5);
    pub const TRAILING: Self = Self::new(1.0, 0.5);
    pub const CENTER: Self = Self::new(0.5, 0.5);

    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn validate(self, name: &str) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "gradient {name} point must be finite"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Color,
    /// Position along the gradient axis in `[0, 1]`.
    pub location: f64,
}

impl GradientStop {
    #[must_use]
    pub const fn new(color: Color, location: f64) -> Self {
        Self { color, location }
    }
}

/// Paint used to fill one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fill {
    Colour(Color),
    /// Evenly distributed colours between `start` and `end`.
    Gradient {
        colours: Vec<Color>,
        start: UnitPoint,
        end: UnitPoint,
    },
    /// Explicitly positioned stops between `start` and `end`.
    GradientStops {
        stops: Vec<GradientStop>,
        start: UnitPoint,
        end: UnitPoint,
    },
}

impl Default for Fill {
    fn default() -> Self {
        Self::Colour(Color::RED)
    }
}

impl Fill {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Colour(color) => color.validate(),
            Self::Gradient {
                colours,
                start,
                end,
            } => {
                if colours.len() < 2 {
                    return Err(ChartError::InvalidData(
                        "gradient fill requires at least two colours".to_owned(),
                    ));
                }
                start.validate("start")?;
                end.validate("end")?;
                colours.iter().try_for_each(|color| color.validate())
            }
            Self::GradientStops { stops, start, end } => {
                if stops.len() < 2 {
                    return Err(ChartError::InvalidData(
                        "gradient fill requires at least two stops".to_owned(),
                    ));
                }
                start.validate("start")?;
                end.validate("end")?;
                let mut previous = 0.0;
                for stop in stops {
                    if !stop.location.is_finite() || !(0.0..=1.0).contains(&stop.location) {
                        return Err(ChartError::InvalidData(
                            "gradient stop location must be finite and in [0, 1]".to_owned(),
                        ));
                    }
                    if stop.location < previous {
                        return Err(ChartError::InvalidData(
                            "gradient stops must be ordered by location".to_owned(),
                        ));
                    }
                    previous = stop.location;
                    stop.color.validate()?;
                }
                Ok(())
            }
        }
    }
}

/// Corner radii applied to the value end (`top`) and the base end (`bottom`) of a bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerRadius {
    pub top: f64,
    pub bottom: f64,
}

impl CornerRadius {
    #[must_use]
    pub const fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self::new(5.0, 0.0)
    }
}

/// Where bar fills are taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColourFrom {
    #[default]
    BarStyle,
    /// Each data point's own fill, falling back to the bar style fill.
    DataPoints,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// Fraction of the category band covered by the bar, in `(0, 1]`.
    pub bar_width: f64,
    pub corner_radius: CornerRadius,
    pub colour_from: ColourFrom,
    pub fill: Fill,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            bar_width: 0.7,
            corner_radius: CornerRadius::default(),
            colour_from: ColourFrom::BarStyle,
            fill: Fill::default(),
        }
    }
}

impl BarStyle {
    #[must_use]
    pub fn with_bar_width(mut self, bar_width: f64) -> Self {
        self.bar_width = bar_width;
        self
    }

    #[must_use]
    pub fn with_corner_radius(mut self, corner_radius: CornerRadius) -> Self {
        self.corner_radius = corner_radius;
        self
    }

    #[must_use]
    pub fn with_colour_from(mut self, colour_from: ColourFrom) -> Self {
        self.colour_from = colour_from;
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fill = fill;
        self
    }
}

/// Timing curve selector handed through to the host animation system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationCurve {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animation {
    pub curve: AnimationCurve,
    pub duration_ms: u64,
}

impl Default for Animation {
    fn default() -> Self {
        Self {
            curve: AnimationCurve::Linear,
            duration_ms: 1_000,
        }
    }
}
