use serde::Serialize;

use crate::error::{LikertError, LikertResult};

/// Largest accepted sum of all weights. A centered bar spans at most twice
/// the table total, so layout coordinates stay finite.
pub const MAX_TABLE_TOTAL: f64 = f64::MAX / 2.0;

/// Row-labeled, column-labeled table of non-negative response weights.
///
/// Columns are ordered along the response spectrum (disagree → agree). The
/// order is trusted as given; nothing here can detect a shuffled scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTable {
    columns: Vec<String>,
    row_labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl ResponseTable {
    /// Builds a validated table.
    ///
    /// Rejects an empty column set, rows whose length differs from the column
    /// count, any value that is negative or not finite, and weights whose
    /// sum exceeds [`MAX_TABLE_TOTAL`]. Errors name the offending row and
    /// column.
    pub fn new(
        columns: Vec<String>,
        row_labels: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> LikertResult<Self> {
        if columns.is_empty() {
            return Err(LikertError::EmptyColumns);
        }
        if row_labels.len() != rows.len() {
            return Err(LikertError::InvalidData(format!(
                "expected {} row labels, got {}",
                rows.len(),
                row_labels.len()
            )));
        }

        let mut table_total = 0.0;
        for (label, values) in row_labels.iter().zip(&rows) {
            if values.len() != columns.len() {
                let column = columns
                    .get(values.len())
                    .cloned()
                    .unwrap_or_else(|| format!("#{}", values.len()));
                return Err(LikertError::malformed(
                    label.as_str(),
                    column,
                    format!(
                        "row has {} values but table has {} columns",
                        values.len(),
                        columns.len()
                    ),
                ));
            }
            for (column, value) in columns.iter().zip(values) {
                if !value.is_finite() {
                    return Err(LikertError::malformed(
                        label.as_str(),
                        column.as_str(),
                        "value must be finite",
                    ));
                }
                if *value < 0.0 {
                    return Err(LikertError::malformed(
                        label.as_str(),
                        column.as_str(),
                        format!("value must be >= 0, got {value}"),
                    ));
                }
            }

            let row_total: f64 = values.iter().sum();
            table_total += row_total;
            if !row_total.is_finite() || table_total > MAX_TABLE_TOTAL {
                return Err(LikertError::malformed(
                    label.as_str(),
                    "total",
                    format!("weights sum past {MAX_TABLE_TOTAL:e}"),
                ));
            }
        }

        Ok(Self {
            columns,
            row_labels,
            rows,
        })
    }

    /// Convenience constructor from string slices and `(label, values)` pairs.
    pub fn from_rows<C, L>(columns: &[C], rows: Vec<(L, Vec<f64>)>) -> LikertResult<Self>
    where
        C: AsRef<str>,
        L: Into<String>,
    {
        let columns = columns.iter().map(|c| c.as_ref().to_owned()).collect();
        let (row_labels, rows) = rows
            .into_iter()
            .map(|(label, values)| (label.into(), values))
            .unzip();
        Self::new(columns, row_labels, rows)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn row_totals(&self) -> Vec<f64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    #[must_use]
    pub fn column_totals(&self) -> Vec<f64> {
        let mut totals = vec![0.0; self.columns.len()];
        for row in &self.rows {
            for (total, value) in totals.iter_mut().zip(row) {
                *total += value;
            }
        }
        totals
    }

    #[must_use]
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().flatten().sum()
    }

    /// Returns a copy with every row replaced by `f(row)`.
    ///
    /// Used by transforms that keep values non-negative and finite, so no
    /// re-validation happens.
    pub(crate) fn map_rows(&self, f: impl Fn(&[f64]) -> Vec<f64>) -> Self {
        Self {
            columns: self.columns.clone(),
            row_labels: self.row_labels.clone(),
            rows: self.rows.iter().map(|row| f(row.as_slice())).collect(),
        }
    }
}
