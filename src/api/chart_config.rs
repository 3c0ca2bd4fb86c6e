use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{Animation, BarOrientation, BarStyle, Baseline, Topline};
use crate::error::{ChartError, ChartResult};
use crate::interaction::BarMarkerType;

use super::AxisLabelConfig;
use super::validation::{
    validate_animation, validate_axis_labels, validate_bar_style, validate_marker_type,
};

/// Public chart bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    #[serde(default)]
    pub orientation: BarOrientation,
    #[serde(default)]
    pub bar_style: BarStyle,
    #[serde(default = "default_should_animate")]
    pub should_animate: bool,
    #[serde(default)]
    pub animation: Animation,
    #[serde(default = "default_no_data_text")]
    pub no_data_text: String,
    #[serde(default)]
    pub baseline: Baseline,
    #[serde(default)]
    pub topline: Topline,
    #[serde(default)]
    pub axis_labels: AxisLabelConfig,
    #[serde(default)]
    pub touch_marker_type: BarMarkerType,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self::new(BarOrientation::Standard)
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new(orientation: BarOrientation) -> Self {
        Self {
            orientation,
            bar_style: BarStyle::default(),
            should_animate: default_should_animate(),
            animation: Animation::default(),
            no_data_text: default_no_data_text(),
            baseline: Baseline::default(),
            topline: Topline::default(),
            axis_labels: AxisLabelConfig::default(),
            touch_marker_type: BarMarkerType::default(),
        }
    }

    #[must_use]
    pub fn horizontal() -> Self {
        Self::new(BarOrientation::Horizontal)
    }

    #[must_use]
    pub fn with_bar_style(mut self, bar_style: BarStyle) -> Self {
        self.bar_style = bar_style;
        self
    }

    #[must_use]
    pub fn with_should_animate(mut self, should_animate: bool) -> Self {
        self.should_animate = should_animate;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = animation;
        self
    }

    #[must_use]
    pub fn with_no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = text.into();
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_topline(mut self, topline: Topline) -> Self {
        self.topline = topline;
        self
    }

    #[must_use]
    pub fn with_axis_labels(mut self, axis_labels: AxisLabelConfig) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    #[must_use]
    pub fn with_touch_marker_type(mut self, marker_type: BarMarkerType) -> Self {
        self.touch_marker_type = marker_type;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_bar_style(&self.bar_style)?;
        validate_animation(self.animation)?;
        validate_axis_labels(&self.axis_labels)?;
        validate_marker_type(self.touch_marker_type)?;
        for (name, bound) in [
            ("baseline", baseline_value(self.baseline)),
            ("topline", topline_value(self.topline)),
        ] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} value must be finite"
                )));
            }
        }
        Ok(())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Parses and validates a config. Missing fields take their defaults.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            warn!(error = %e, "rejected malformed chart config json");
            ChartError::InvalidConfig(format!("failed to parse config json: {e}"))
        })?;
        if let Err(err) = config.validate() {
            warn!(error = %err, "rejected invalid chart config");
            return Err(err);
        }
        Ok(config)
    }
}

fn baseline_value(baseline: Baseline) -> Option<f64> {
    match baseline {
        Baseline::MinimumWithMaximum(value) => Some(value),
        Baseline::MinimumValue | Baseline::Zero => None,
    }
}

fn topline_value(topline: Topline) -> Option<f64> {
    match topline {
        Topline::Maximum(value) => Some(value),
        Topline::MaximumValue => None,
    }
}

fn default_should_animate() -> bool {
    true
}

fn default_no_data_text() -> String {
    "No Data".to_owned()
}
