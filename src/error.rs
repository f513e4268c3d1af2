use thiserror::Error;

pub type LikertResult<T> = Result<T, LikertError>;

#[derive(Debug, Error)]
pub enum LikertError {
    #[error("response table must have at least one column")]
    EmptyColumns,

    #[error("malformed table at row `{row}`, column `{column}`: {reason}")]
    MalformedTable {
        row: String,
        column: String,
        reason: String,
    },

    #[error("column `{0}` not found in input header")]
    MissingColumn(String),

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl LikertError {
    pub(crate) fn malformed(
        row: impl Into<String>,
        column: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedTable {
            row: row.into(),
            column: column.into(),
            reason: reason.into(),
        }
    }
}
