use serde::Serialize;
use smallvec::SmallVec;

use crate::error::{LikertError, LikertResult};

/// Column indices left of the visual center.
pub type FirstHalf = SmallVec<[usize; 8]>;

/// How an ordered column set splits around the chart center.
///
/// An odd column count has a true middle column; an even count only has a
/// first half.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MiddleSplit {
    pub middle: Option<usize>,
    pub first_half: FirstHalf,
}

impl MiddleSplit {
    /// Resolves the split for `column_count` ordered columns.
    pub fn resolve(column_count: usize) -> LikertResult<Self> {
        if column_count == 0 {
            return Err(LikertError::EmptyColumns);
        }

        let half = column_count / 2;
        if column_count % 2 != 0 {
            return Ok(Self {
                middle: Some(half),
                first_half: (0..half).collect(),
            });
        }

        Ok(Self {
            middle: None,
            first_half: (0..half).collect(),
        })
    }

    /// Resolves the split for a column label sequence.
    pub fn for_columns<S: AsRef<str>>(columns: &[S]) -> LikertResult<Self> {
        Self::resolve(columns.len())
    }

    #[must_use]
    pub fn has_true_middle(&self) -> bool {
        self.middle.is_some()
    }

    /// Labels of the first-half columns, in order.
    #[must_use]
    pub fn first_half_labels<'a, S: AsRef<str>>(&self, columns: &'a [S]) -> Vec<&'a str> {
        self.first_half
            .iter()
            .filter_map(|&index| columns.get(index).map(AsRef::as_ref))
            .collect()
    }

    #[must_use]
    pub fn middle_label<'a, S: AsRef<str>>(&self, columns: &'a [S]) -> Option<&'a str> {
        self.middle
            .and_then(|index| columns.get(index))
            .map(AsRef::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::MiddleSplit;

    #[test]
    fn single_column_is_its_own_middle() {
        let split = MiddleSplit::resolve(1).expect("split");
        assert_eq!(split.middle, Some(0));
        assert!(split.first_half.is_empty());
    }

    #[test]
    fn zero_columns_are_rejected() {
        assert!(MiddleSplit::resolve(0).is_err());
    }

    #[test]
    fn labels_follow_indices() {
        let columns = ["SD", "D", "N", "A", "SA"];
        let split = MiddleSplit::for_columns(&columns).expect("split");
        assert_eq!(split.first_half_labels(&columns), vec!["SD", "D"]);
        assert_eq!(split.middle_label(&columns), Some("N"));
    }
}
