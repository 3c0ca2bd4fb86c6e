//! bar-charts-rs: headless bar-chart model.
//!
//! The crate maps bar data to pixel geometry, resolves touches to data points
//! and publishes state changes to subscribed rendering layers. Drawing is left
//! to any `render::Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BarChartConfig, BarChartData};
pub use error::{ChartError, ChartResult};
