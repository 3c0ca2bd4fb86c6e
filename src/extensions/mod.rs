//! Overlays layered on top of the bar series.

pub mod extra_line;

pub use extra_line::{
    ExtraLine, ExtraLineHit, ExtraLinePoint, ExtraLineProbe, ExtraLineStyle, LineSpacing, LineType,
};
