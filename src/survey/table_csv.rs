use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::core::ResponseTable;
use crate::error::{LikertError, LikertResult};

/// Reads a tabulated CSV: header `label,cat1,cat2,...`, then one row per item.
///
/// Blank cells count as 0. Anything else that does not parse as a number is
/// rejected with the row label and column name.
pub fn read_response_table<R: Read>(reader: R) -> LikertResult<ResponseTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let columns: Vec<String> = rdr.headers()?.iter().skip(1).map(str::to_owned).collect();
    if columns.is_empty() {
        return Err(LikertError::EmptyColumns);
    }

    let mut row_labels = Vec::new();
    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        // Header is line 1.
        let lineno = idx + 2;
        let label = record
            .get(0)
            .filter(|label| !label.is_empty())
            .map_or_else(|| format!("line {lineno}"), str::to_owned);

        let values = record
            .iter()
            .skip(1)
            .enumerate()
            .map(|(column, cell)| parse_cell(cell, &label, &columns, column))
            .collect::<LikertResult<Vec<f64>>>()?;
        debug!(lineno, label = %label, ?values, "read table row");

        row_labels.push(label);
        rows.push(values);
    }

    ResponseTable::new(columns, row_labels, rows)
}

pub fn read_response_table_from_path(path: impl AsRef<Path>) -> LikertResult<ResponseTable> {
    read_response_table(File::open(path)?)
}

fn parse_cell(cell: &str, row: &str, columns: &[String], column: usize) -> LikertResult<f64> {
    if cell.is_empty() {
        return Ok(0.0);
    }
    let column_name = || {
        columns
            .get(column)
            .cloned()
            .unwrap_or_else(|| format!("#{}", column + 1))
    };
    cell.parse::<f64>().map_err(|_| {
        LikertError::malformed(row, column_name(), format!("`{cell}` is not a number"))
    })
}
