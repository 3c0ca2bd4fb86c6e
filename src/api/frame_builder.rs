use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::core::{Color, DrawArea, Point, project_bars};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{BarMarkerData, BarMarkerType};
use crate::render::{BarPrimitive, LinePrimitive, RenderFrame, Renderer, TextPrimitive};

use super::{BarChartData, ChartKind, ExtraLineSupport};

const NO_DATA_FONT_SIZE_PX: f64 = 14.0;

impl BarChartData {
    /// Builds the scene for one draw pass.
    ///
    /// `progress` is the host animation's grow factor and is ignored when
    /// animation is disabled. Degenerate data yields only the no-data text.
    pub fn build_frame(
        &self,
        area: DrawArea,
        progress: f64,
        markers: &[BarMarkerData],
    ) -> ChartResult<RenderFrame> {
        if !area.is_valid() {
            return Err(ChartError::InvalidDrawArea {
                width: area.width,
                height: area.height,
            });
        }

        let mut frame = RenderFrame::new(area);
        if !self.has_data() {
            debug!(points_len = self.points().len(), "render no-data placeholder");
            if !self.no_data_text().is_empty() {
                frame = frame.with_text(TextPrimitive::centred(
                    self.no_data_text(),
                    Point::new(area.width * 0.5, area.height * 0.5),
                    NO_DATA_FONT_SIZE_PX,
                    Color::BLACK,
                ));
            }
            return Ok(frame);
        }

        let progress = if self.should_animate() { progress } else { 1.0 };
        let bars = project_bars(
            self.points(),
            self.value_bounds().max,
            area,
            self.bar_style(),
            self.orientation(),
            progress,
        )?;
        frame.bars = bars
            .into_iter()
            .map(|bar| BarPrimitive {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                corner_radius: bar.corner_radius,
                fill: bar.fill,
            })
            .collect();

        if let Some(line) = self.extra_line() {
            let points = line.project_points(area);
            frame.lines.extend(points.windows(2).map(|pair| {
                LinePrimitive::segment(
                    pair[0],
                    pair[1],
                    line.style.line_width,
                    line.style.line_colour,
                )
            }));
        }

        for marker in markers {
            frame.lines.extend(marker_lines(*marker, area));
        }

        trace!(
            bars = frame.bars.len(),
            lines = frame.lines.len(),
            "built bar chart frame"
        );
        Ok(frame)
    }

    /// Builds a frame and hands it to `renderer`.
    pub fn render<R: Renderer>(
        &self,
        renderer: &mut R,
        area: DrawArea,
        progress: f64,
        markers: &[BarMarkerData],
    ) -> ChartResult<()> {
        let frame = self.build_frame(area, progress, markers)?;
        renderer.render(&frame)
    }
}

/// Guide lines for one marker callout.
fn marker_lines(marker: BarMarkerData, area: DrawArea) -> SmallVec<[LinePrimitive; 2]> {
    let mut lines = SmallVec::new();
    let Some(style) = marker.marker_type.line_style() else {
        return lines;
    };
    let (x, y) = (marker.location.x, marker.location.y);
    let segment = |x1, y1, x2, y2| {
        LinePrimitive::segment(Point::new(x1, y1), Point::new(x2, y2), style.line_width, style.colour)
            .dashed(style.dashed)
    };

    match marker.marker_type {
        BarMarkerType::None => {}
        BarMarkerType::Vertical(_) => lines.push(segment(x, 0.0, x, area.height)),
        BarMarkerType::Full(_) => {
            lines.push(segment(x, 0.0, x, area.height));
            lines.push(segment(0.0, y, area.width, y));
        }
        BarMarkerType::BottomLeading(_) => {
            lines.push(segment(x, y, x, area.height));
            lines.push(segment(0.0, y, x, y));
        }
        BarMarkerType::BottomTrailing(_) => {
            lines.push(segment(x, y, x, area.height));
            lines.push(segment(x, y, area.width, y));
        }
        BarMarkerType::TopLeading(_) => {
            lines.push(segment(x, 0.0, x, y));
            lines.push(segment(0.0, y, x, y));
        }
        BarMarkerType::TopTrailing(_) => {
            lines.push(segment(x, 0.0, x, y));
            lines.push(segment(x, y, area.width, y));
        }
    }
    lines
}
