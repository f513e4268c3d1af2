use crate::error::LikertResult;
use crate::render::Color;

/// One legend row: category label and its segment color.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

/// Drawing capability consumed by the chart pass.
///
/// Coordinates are in data units: `x` along the distance axis, `row` is the
/// item index (row 0 at the bottom). Implementations decide how that maps to
/// an output device.
pub trait ChartSurface {
    fn draw_segment(
        &mut self,
        row: usize,
        start: f64,
        width: f64,
        color: Color,
    ) -> LikertResult<()>;

    /// Dashed reference line across all rows at `x`.
    fn draw_axis_line(&mut self, x: f64) -> LikertResult<()>;

    fn set_ticks(&mut self, positions: &[f64], labels: &[String]) -> LikertResult<()>;

    fn draw_legend(&mut self, entries: &[LegendEntry]) -> LikertResult<()>;

    /// Text centered on `(x, row)`.
    fn draw_label(&mut self, row: usize, x: f64, text: &str) -> LikertResult<()>;

    fn set_row_labels(&mut self, labels: &[String]) -> LikertResult<()>;
}
