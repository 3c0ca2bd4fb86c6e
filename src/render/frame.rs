use serde::{Deserialize, Serialize};

use crate::core::DrawArea;
use crate::error::{ChartError, ChartResult};
use crate::render::{BarPrimitive, LinePrimitive, TextPrimitive};

/// Everything one draw pass of a bar chart needs, in paint order:
/// bars first, then overlay and marker lines, then labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub area: DrawArea,
    pub bars: Vec<BarPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(area: DrawArea) -> Self {
        Self {
            area,
            bars: Vec::new(),
            lines: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.area.is_valid() {
            return Err(ChartError::InvalidDrawArea {
                width: self.area.width,
                height: self.area.height,
            });
        }
        self.bars.iter().try_for_each(BarPrimitive::validate)?;
        self.lines.iter().copied().try_for_each(LinePrimitive::validate)?;
        self.texts.iter().try_for_each(TextPrimitive::validate)
    }

    /// `true` when the frame shows only the no-data label.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.bars.is_empty() && self.lines.is_empty() && !self.texts.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.lines.is_empty() && self.texts.is_empty()
    }
}
