use serde::Serialize;

use crate::core::primitives::format_percentage;
use crate::core::{BarSegment, PercentageMode, ResponseTable, cell_percentages};

/// Percentage annotation anchored at a segment's centroid, in data units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentLabel {
    pub row: usize,
    pub column: usize,
    /// Horizontal midpoint of the segment.
    pub x: f64,
    pub percentage: f64,
    pub text: String,
}

/// Annotates every segment with its share under `mode`.
///
/// `table` is the table the segments were built from; percentages are taken
/// against it so a normalized table annotates its own values.
#[must_use]
pub fn annotate_segments(
    table: &ResponseTable,
    segments: &[Vec<BarSegment>],
    mode: PercentageMode,
) -> Vec<SegmentLabel> {
    let percentages = cell_percentages(table, mode);

    segments
        .iter()
        .enumerate()
        .flat_map(|(row, row_segments)| {
            let row_percentages = &percentages[row];
            row_segments.iter().map(move |segment| {
                let percentage = row_percentages[segment.column];
                SegmentLabel {
                    row,
                    column: segment.column,
                    x: segment.center(),
                    percentage,
                    text: format!("{}%", format_percentage(percentage)),
                }
            })
        })
        .collect()
}
