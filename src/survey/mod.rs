//! Loading `ResponseTable`s from CSV files.
//!
//! Two shapes are supported: a table that is already tabulated (one row per
//! item, one numeric column per category) and raw survey exports where each
//! question is a column and each cell is one respondent's answer.

mod table_csv;
mod tally;

pub use table_csv::{read_response_table, read_response_table_from_path};
pub use tally::{TallyOptions, short_question_label, tally_responses, tally_responses_from_path};
