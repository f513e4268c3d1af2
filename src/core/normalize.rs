use serde::{Deserialize, Serialize};

use crate::core::ResponseTable;
use crate::core::primitives::{ratio_or_zero, round_percentage};

/// Denominator used when expressing a cell as a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PercentageMode {
    /// Cell over its row total.
    #[default]
    PerRow,
    /// Cell over its column total.
    PerColumn,
    /// Cell over the sum of the whole table.
    Grand,
}

/// Converts every row to percentages of its own total.
///
/// Rows summing to exactly zero become all zeros.
#[must_use]
pub fn normalize_per_row(table: &ResponseTable) -> ResponseTable {
    table.map_rows(|row| {
        let total: f64 = row.iter().sum();
        row.iter()
            .map(|value| ratio_or_zero(*value, total) * 100.0)
            .collect()
    })
}

/// Percentage of each cell under `mode`, rounded to two decimals.
///
/// Indexed as `[row][column]`. Zero denominators yield 0.
#[must_use]
pub fn cell_percentages(table: &ResponseTable, mode: PercentageMode) -> Vec<Vec<f64>> {
    let row_totals = table.row_totals();
    let column_totals = table.column_totals();
    let grand_total = table.grand_total();

    table
        .rows()
        .iter()
        .enumerate()
        .map(|(row_index, row)| {
            row.iter()
                .enumerate()
                .map(|(column_index, value)| {
                    let denominator = match mode {
                        PercentageMode::PerRow => row_totals[row_index],
                        PercentageMode::PerColumn => column_totals[column_index],
                        PercentageMode::Grand => grand_total,
                    };
                    round_percentage(ratio_or_zero(*value, denominator) * 100.0)
                })
                .collect()
        })
        .collect()
}
