pub mod bar_geometry;
pub mod primitives;
pub mod scale;
pub mod style;
pub mod types;

pub use bar_geometry::{BarGeometry, project_bars, resolve_fill};
pub use scale::{Baseline, Topline, ValueBounds};
pub use style::{
    Animation, AnimationCurve, BarStyle, Color, ColourFrom, CornerRadius, Fill, GradientStop,
    UnitPoint,
};
pub use types::{BarOrientation, DataPoint, DataSet, DrawArea, Point};
