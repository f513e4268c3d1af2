use crate::core::{LinearScale, Viewport};
use crate::error::{LikertError, LikertResult};
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartSurface, LegendEntry};

const MARGIN_LEFT_PX: f64 = 120.0;
const MARGIN_RIGHT_PX: f64 = 20.0;
const MARGIN_TOP_PX: f64 = 20.0;
const MARGIN_BOTTOM_PX: f64 = 56.0;
const LEGEND_WIDTH_PX: f64 = 150.0;
const LEGEND_SWATCH_PX: f64 = 12.0;
const LEGEND_ROW_PX: f64 = 20.0;
/// Share of a row band covered by its bar.
const BAR_HEIGHT_RATIO: f64 = 0.8;
const TICK_LENGTH_PX: f64 = 5.0;
const AXIS_FONT_PX: f64 = 12.0;
const LABEL_FONT_PX: f64 = 10.0;
const MIDDLE_LINE_ALPHA: f64 = 0.5;

/// `ChartSurface` that accumulates pixel-space primitives into a `RenderFrame`.
///
/// Row 0 is drawn at the bottom of the plot area.
#[derive(Debug)]
pub struct FrameBuilder {
    frame: RenderFrame,
    x_scale: LinearScale,
    row_count: usize,
    plot_left: f64,
    plot_right: f64,
    plot_top: f64,
    plot_bottom: f64,
    label_rotation: f64,
    x_label: String,
}

impl FrameBuilder {
    /// Sets up the plot area for `row_count` rows over the data range
    /// `x_limits`. Room for a legend is reserved when `with_legend` is set.
    pub fn new(
        viewport: Viewport,
        row_count: usize,
        x_limits: (f64, f64),
        with_legend: bool,
    ) -> LikertResult<Self> {
        let invalid_viewport = || LikertError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        };
        if !viewport.is_valid() {
            return Err(invalid_viewport());
        }

        let legend_width = if with_legend { LEGEND_WIDTH_PX } else { 0.0 };
        let plot_left = MARGIN_LEFT_PX;
        let plot_right = f64::from(viewport.width) - MARGIN_RIGHT_PX - legend_width;
        let plot_top = MARGIN_TOP_PX;
        let plot_bottom = f64::from(viewport.height) - MARGIN_BOTTOM_PX;
        if plot_right <= plot_left || plot_bottom <= plot_top {
            return Err(invalid_viewport());
        }

        let x_scale = LinearScale::new(x_limits.0, x_limits.1, plot_left, plot_right)?;
        Ok(Self {
            frame: RenderFrame::new(viewport),
            x_scale,
            row_count,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            label_rotation: 0.0,
            x_label: String::new(),
        })
    }

    #[must_use]
    pub fn with_label_rotation(mut self, rotation_deg: f64) -> Self {
        self.label_rotation = rotation_deg;
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, x_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self
    }

    /// Pixel x for a data-space coordinate.
    pub fn x_to_pixel(&self, x: f64) -> LikertResult<f64> {
        self.x_scale.domain_to_pixel(x)
    }

    /// Pixel y of a row's vertical center.
    pub fn row_center_y(&self, row: usize) -> LikertResult<f64> {
        if row >= self.row_count {
            return Err(LikertError::InvalidData(format!(
                "row {row} out of range for {} rows",
                self.row_count
            )));
        }
        Ok(self.plot_bottom - (row as f64 + 0.5) * self.row_band())
    }

    #[must_use]
    pub fn finish(self) -> RenderFrame {
        self.frame
    }

    fn row_band(&self) -> f64 {
        (self.plot_bottom - self.plot_top) / self.row_count.max(1) as f64
    }
}

impl ChartSurface for FrameBuilder {
    fn draw_segment(
        &mut self,
        row: usize,
        start: f64,
        width: f64,
        color: Color,
    ) -> LikertResult<()> {
        let center_y = self.row_center_y(row)?;
        let height = self.row_band() * BAR_HEIGHT_RATIO;
        let x = self.x_to_pixel(start)?;
        let width = self.x_scale.span_to_pixels(width)?;
        self.frame
            .rects
            .push(RectPrimitive::new(x, center_y - height * 0.5, width, height, color));
        Ok(())
    }

    fn draw_axis_line(&mut self, x: f64) -> LikertResult<()> {
        let x = self.x_to_pixel(x)?;
        self.frame.lines.push(
            LinePrimitive::new(
                x,
                self.plot_top,
                x,
                self.plot_bottom,
                1.0,
                Color::BLACK.with_alpha(MIDDLE_LINE_ALPHA),
            )
            .with_stroke_style(LineStrokeStyle::Dashed),
        );
        Ok(())
    }

    fn set_ticks(&mut self, positions: &[f64], labels: &[String]) -> LikertResult<()> {
        if positions.len() != labels.len() {
            return Err(LikertError::InvalidData(format!(
                "expected {} tick labels, got {}",
                positions.len(),
                labels.len()
            )));
        }

        self.frame.lines.push(LinePrimitive::new(
            self.plot_left,
            self.plot_bottom,
            self.plot_right,
            self.plot_bottom,
            1.0,
            Color::BLACK,
        ));

        for (position, label) in positions.iter().zip(labels) {
            // Ticks left of the visible range are kept in the layout but not drawn.
            if !self.x_scale.contains(*position) {
                continue;
            }
            let x = self.x_to_pixel(*position)?;
            self.frame.lines.push(LinePrimitive::new(
                x,
                self.plot_bottom,
                x,
                self.plot_bottom + TICK_LENGTH_PX,
                1.0,
                Color::BLACK,
            ));
            self.frame.texts.push(TextPrimitive::new(
                label.as_str(),
                x,
                self.plot_bottom + TICK_LENGTH_PX + AXIS_FONT_PX,
                AXIS_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }

        if !self.x_label.is_empty() {
            self.frame.texts.push(TextPrimitive::new(
                self.x_label.as_str(),
                (self.plot_left + self.plot_right) * 0.5,
                self.plot_bottom + TICK_LENGTH_PX + AXIS_FONT_PX * 2.8,
                AXIS_FONT_PX,
                Color::BLACK,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn draw_legend(&mut self, entries: &[LegendEntry]) -> LikertResult<()> {
        let left = self.plot_right + MARGIN_RIGHT_PX;
        for (index, entry) in entries.iter().enumerate() {
            let center_y = self.plot_top + (index as f64 + 0.5) * LEGEND_ROW_PX;
            self.frame.rects.push(
                RectPrimitive::new(
                    left,
                    center_y - LEGEND_SWATCH_PX * 0.5,
                    LEGEND_SWATCH_PX,
                    LEGEND_SWATCH_PX,
                    entry.color,
                )
                .with_border(1.0, Color::BLACK.with_alpha(0.3)),
            );
            if entry.label.is_empty() {
                continue;
            }
            self.frame.texts.push(TextPrimitive::new(
                entry.label.as_str(),
                left + LEGEND_SWATCH_PX + 6.0,
                center_y,
                AXIS_FONT_PX,
                Color::BLACK,
                TextHAlign::Left,
            ));
        }
        Ok(())
    }

    fn draw_label(&mut self, row: usize, x: f64, text: &str) -> LikertResult<()> {
        if text.is_empty() {
            return Ok(());
        }
        let y = self.row_center_y(row)?;
        let x = self.x_to_pixel(x)?;
        self.frame.texts.push(
            TextPrimitive::new(text, x, y, LABEL_FONT_PX, Color::BLACK, TextHAlign::Center)
                .with_rotation(self.label_rotation),
        );
        Ok(())
    }

    fn set_row_labels(&mut self, labels: &[String]) -> LikertResult<()> {
        for (row, label) in labels.iter().enumerate() {
            if label.is_empty() {
                continue;
            }
            let y = self.row_center_y(row)?;
            self.frame.texts.push(TextPrimitive::new(
                label.as_str(),
                self.plot_left - 8.0,
                y,
                AXIS_FONT_PX,
                Color::BLACK,
                TextHAlign::Right,
            ));
        }
        Ok(())
    }
}
