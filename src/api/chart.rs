use tracing::{debug, info};

use crate::core::{DivergingBarLayout, ResponseTable};
use crate::error::LikertResult;
use crate::render::{RenderFrame, Renderer};

use super::{ChartSurface, FrameBuilder, LegendEntry, LikertConfig};

/// Main facade: lays out a table with the configured options and hands the
/// resulting frame to a renderer.
pub struct LikertChart<R: Renderer> {
    renderer: R,
    config: LikertConfig,
}

impl<R: Renderer> LikertChart<R> {
    pub fn new(renderer: R, config: LikertConfig) -> LikertResult<Self> {
        config.validate()?;
        Ok(Self { renderer, config })
    }

    #[must_use]
    pub fn config(&self) -> &LikertConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: LikertConfig) -> LikertResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Computes segment geometry, centering and ticks without drawing.
    pub fn layout(&self, table: &ResponseTable) -> LikertResult<DivergingBarLayout> {
        let colors = self.config.colormap.colors_for(table.columns());
        DivergingBarLayout::compute(table, &colors, self.config.layout_options())
    }

    /// Replays a layout onto any drawing surface.
    pub fn draw<S: ChartSurface>(
        &self,
        layout: &DivergingBarLayout,
        surface: &mut S,
    ) -> LikertResult<()> {
        if self.config.middle_line {
            surface.draw_axis_line(layout.longest_middle())?;
        }

        for (row_index, row) in layout.rows.iter().enumerate() {
            for segment in &row.segments {
                surface.draw_segment(row_index, segment.start, segment.width, segment.color)?;
            }
        }

        for label in &layout.labels {
            surface.draw_label(label.row, label.x, &label.text)?;
        }

        if self.config.legend {
            let entries: Vec<LegendEntry> = layout
                .columns
                .iter()
                .zip(&layout.colors)
                .map(|(label, color)| LegendEntry {
                    label: label.clone(),
                    color: *color,
                })
                .collect();
            surface.draw_legend(&entries)?;
        }

        surface.set_ticks(&layout.ticks.positions, &layout.ticks.labels)?;
        let row_labels: Vec<String> = layout.rows.iter().map(|row| row.label.clone()).collect();
        surface.set_row_labels(&row_labels)
    }

    /// Lays out `table` and materializes the pixel-space frame.
    pub fn build_frame(&self, table: &ResponseTable) -> LikertResult<RenderFrame> {
        let layout = self.layout(table)?;
        self.build_frame_from_layout(&layout)
    }

    pub fn build_frame_from_layout(
        &self,
        layout: &DivergingBarLayout,
    ) -> LikertResult<RenderFrame> {
        let mut builder = FrameBuilder::new(
            self.config.viewport,
            layout.rows.len(),
            layout.ticks.x_limits(),
            self.config.legend,
        )?
        .with_label_rotation(self.config.rotation)
        .with_x_label(self.config.x_label.as_str());

        self.draw(layout, &mut builder)?;
        let frame = builder.finish();
        debug!(
            rects = frame.rects.len(),
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "built likert frame"
        );
        Ok(frame)
    }

    /// Lays out, draws and renders `table`. Structural errors surface before
    /// the renderer is called.
    pub fn render(&mut self, table: &ResponseTable) -> LikertResult<DivergingBarLayout> {
        let layout = self.layout(table)?;
        let frame = self.build_frame_from_layout(&layout)?;
        self.renderer.render(&frame)?;
        info!(
            rows = layout.rows.len(),
            columns = layout.columns.len(),
            longest_middle = layout.longest_middle(),
            "rendered likert chart"
        );
        Ok(layout)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
