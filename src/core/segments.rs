use serde::Serialize;

use crate::core::ResponseTable;
use crate::error::{LikertError, LikertResult};
use crate::render::Color;

/// One stacked piece of a row's bar, in data units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BarSegment {
    pub column: usize,
    pub start: f64,
    pub width: f64,
    pub color: Color,
}

impl BarSegment {
    #[must_use]
    pub fn end(&self) -> f64 {
        self.start + self.width
    }

    #[must_use]
    pub fn center(&self) -> f64 {
        self.start + self.width * 0.5
    }
}

/// Stacks each row's values left to right, starting at that row's left gap.
///
/// `colors` holds one color per column, in column order.
pub fn build_segments(
    table: &ResponseTable,
    left_gaps: &[f64],
    colors: &[Color],
) -> LikertResult<Vec<Vec<BarSegment>>> {
    if colors.len() != table.column_count() {
        return Err(LikertError::InvalidData(format!(
            "expected {} segment colors, got {}",
            table.column_count(),
            colors.len()
        )));
    }
    if left_gaps.len() != table.row_count() {
        return Err(LikertError::InvalidData(format!(
            "expected {} left gaps, got {}",
            table.row_count(),
            left_gaps.len()
        )));
    }

    let rows = table
        .rows()
        .iter()
        .zip(left_gaps)
        .map(|(row, gap)| {
            let mut offset = *gap;
            row.iter()
                .zip(colors)
                .enumerate()
                .map(|(column, (value, color))| {
                    let segment = BarSegment {
                        column,
                        start: offset,
                        width: *value,
                        color: *color,
                    };
                    offset += value;
                    segment
                })
                .collect()
        })
        .collect();

    Ok(rows)
}
