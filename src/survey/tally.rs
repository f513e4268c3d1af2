use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::core::ResponseTable;
use crate::error::{LikertError, LikertResult};

/// How raw answers are turned into category columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TallyOptions {
    /// Category order along the response spectrum. Answers outside this list
    /// are dropped. When absent, categories are every distinct answer, sorted.
    pub categories: Option<Vec<String>>,
    /// Answers never counted, e.g. `Prefer not to answer`.
    pub exclude: Vec<String>,
    /// Use the bracketed part of a question header as the row label.
    pub rename_questions: bool,
}

impl TallyOptions {
    #[must_use]
    pub fn with_categories<S: Into<String>>(
        mut self,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn excluding<S: Into<String>>(mut self, answers: impl IntoIterator<Item = S>) -> Self {
        self.exclude.extend(answers.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn with_renamed_questions(mut self, rename_questions: bool) -> Self {
        self.rename_questions = rename_questions;
        self
    }
}

/// Counts answers per question into a table with one row per question and
/// one column per answer category. Blank answers are skipped.
pub fn tally_responses<R: Read, S: AsRef<str>>(
    reader: R,
    questions: &[S],
    options: &TallyOptions,
) -> LikertResult<ResponseTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let indices = questions
        .iter()
        .map(|question| {
            let question = question.as_ref();
            headers
                .iter()
                .position(|header| header == question)
                .ok_or_else(|| LikertError::MissingColumn(question.to_owned()))
        })
        .collect::<LikertResult<Vec<usize>>>()?;

    let mut counts: Vec<IndexMap<String, f64>> = vec![IndexMap::new(); questions.len()];
    let mut seen: IndexSet<String> = IndexSet::new();
    let mut answered = 0usize;
    for record in rdr.records() {
        let record = record?;
        answered += 1;
        for (question, &index) in indices.iter().enumerate() {
            let Some(answer) = record.get(index).filter(|answer| !answer.is_empty()) else {
                continue;
            };
            if options.exclude.iter().any(|excluded| excluded == answer) {
                continue;
            }
            *counts[question].entry(answer.to_owned()).or_insert(0.0) += 1.0;
            seen.insert(answer.to_owned());
        }
    }

    let columns: Vec<String> = match &options.categories {
        Some(categories) => {
            for answer in seen.iter().filter(|answer| !categories.contains(*answer)) {
                warn!(answer = %answer, "answer outside the category list is dropped");
            }
            categories
                .iter()
                .filter(|category| !options.exclude.contains(category))
                .cloned()
                .collect()
        }
        None => {
            seen.sort();
            seen.into_iter().collect()
        }
    };
    debug!(respondents = answered, ?columns, "tallied survey responses");

    let row_labels = questions
        .iter()
        .map(|question| {
            let question = question.as_ref();
            if options.rename_questions {
                short_question_label(question).to_owned()
            } else {
                question.to_owned()
            }
        })
        .collect();
    let rows = counts
        .iter()
        .map(|question_counts| {
            columns
                .iter()
                .map(|column| question_counts.get(column).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();

    ResponseTable::new(columns, row_labels, rows)
}

pub fn tally_responses_from_path<S: AsRef<str>>(
    path: impl AsRef<Path>,
    questions: &[S],
    options: &TallyOptions,
) -> LikertResult<ResponseTable> {
    tally_responses(File::open(path)?, questions, options)
}

/// `"How often do you ... [Licensing]"` → `"Licensing"`; headers without a
/// bracketed part are returned unchanged.
#[must_use]
pub fn short_question_label(question: &str) -> &str {
    question
        .split_once('[')
        .and_then(|(_, rest)| rest.split_once(']'))
        .map_or(question, |(inner, _)| inner)
}

#[cfg(test)]
mod tests {
    use super::short_question_label;

    #[test]
    fn extracts_bracketed_label() {
        assert_eq!(short_question_label("Rate the tools [Git]"), "Git");
        assert_eq!(short_question_label("No brackets"), "No brackets");
        assert_eq!(short_question_label("Open [only"), "Open [only");
    }
}
