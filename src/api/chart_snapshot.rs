use serde::{Deserialize, Serialize};

use crate::core::{DataSet, ValueBounds};
use crate::error::{ChartError, ChartResult};
use crate::extensions::ExtraLine;
use crate::interaction::TouchPhase;

use super::{BarChartConfig, BarChartData, ExtraLineSupport, LegendEntry, Touchable};

pub const CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable view of chart state for diagnostics and persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub config: BarChartConfig,
    pub data_set: DataSet,
    pub bounds: ValueBounds,
    pub has_data: bool,
    pub extra_line: Option<ExtraLine>,
    pub legends: Vec<LegendEntry>,
    pub touch_phase: TouchPhase,
    pub touch_points_len: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ChartSnapshot,
}

impl BarChartData {
    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            config: self.config().clone(),
            data_set: self.data_set().clone(),
            bounds: self.value_bounds(),
            has_data: self.has_data(),
            extra_line: self.extra_line().cloned(),
            legends: self.legends(),
            touch_phase: self.touch_phase(),
            touch_points_len: self.touch_point_data().len(),
        }
    }

    /// Rebuilds chart data (without subscribers or touch state) from a snapshot.
    pub fn from_snapshot(snapshot: ChartSnapshot) -> ChartResult<Self> {
        let mut chart = Self::new(snapshot.data_set, snapshot.config)?;
        chart.set_extra_line(snapshot.extra_line)?;
        Ok(chart)
    }
}

impl ChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartSnapshotJsonContractV1 {
            schema_version: CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts both a bare snapshot and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
