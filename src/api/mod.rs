mod axis_labels;
mod capabilities;
mod chart_config;
mod chart_data;
mod chart_snapshot;
mod frame_builder;
mod legends;
mod subscribers;
pub mod touch_resolver;
mod validation;

pub use axis_labels::{AxisLabelConfig, format_axis_value, value_axis_ticks};
pub use capabilities::{ChartKind, ChartName, DataHelper, ExtraLineSupport, Touchable, ViewData};
pub use chart_config::BarChartConfig;
pub use chart_data::BarChartData;
pub use chart_snapshot::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use legends::{LegendEntry, LegendKind};
pub use subscribers::{ChartContext, ChartEvent, ChartSubscriber, SubscriptionId};
pub use touch_resolver::{
    TouchHits, resolve_horizontal_touch, resolve_standard_touch, resolve_touch,
};
