use serde::{Deserialize, Serialize};

use crate::core::{ColourFrom, Fill, resolve_fill};

use super::{BarChartData, ExtraLineSupport};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegendKind {
    Bar,
    ExtraLine,
}

/// One legend row; `tag` matches `DataPoint::legend_tag`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub legend: String,
    pub fill: Fill,
    pub tag: Option<String>,
    pub kind: LegendKind,
}

impl BarChartData {
    /// Derives legend rows from the current data set, style and extra line.
    ///
    /// Per-point fills produce one row per data point; otherwise a single row
    /// uses the data set legend title. Empty titles produce no bar row.
    #[must_use]
    pub fn legends(&self) -> Vec<LegendEntry> {
        let style = self.bar_style();
        let mut entries = match style.colour_from {
            ColourFrom::DataPoints => self
                .points()
                .iter()
                .map(|point| LegendEntry {
                    legend: point.description().to_owned(),
                    fill: resolve_fill(point, style),
                    tag: point.legend_tag().map(str::to_owned),
                    kind: LegendKind::Bar,
                })
                .collect(),
            ColourFrom::BarStyle => {
                let title = self.data_set().legend_title();
                if title.is_empty() {
                    Vec::new()
                } else {
                    vec![LegendEntry {
                        legend: title.to_owned(),
                        fill: style.fill.clone(),
                        tag: None,
                        kind: LegendKind::Bar,
                    }]
                }
            }
        };

        if let Some(line) = self.extra_line() {
            entries.push(LegendEntry {
                legend: line.legend_title.clone(),
                fill: Fill::Colour(line.style.line_colour),
                tag: Some(line.legend_tag.clone()),
                kind: LegendKind::ExtraLine,
            });
        }
        entries
    }
}
