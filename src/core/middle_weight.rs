use tracing::warn;

use crate::core::{MiddleSplit, ResponseTable};

/// Weight of one row that sits left of the chart center.
///
/// First-half values count fully, a true middle value counts half. A middle
/// index the row does not have degrades to the first-half sum.
#[must_use]
pub fn row_mid_weight(row: &[f64], split: &MiddleSplit) -> f64 {
    let first_half: f64 = split
        .first_half
        .iter()
        .filter_map(|&index| row.get(index))
        .sum();

    match split.middle {
        Some(middle) => match row.get(middle) {
            Some(value) => first_half + value * 0.5,
            None => {
                warn!(middle, len = row.len(), "middle column missing, using first half only");
                first_half
            }
        },
        None => first_half,
    }
}

/// Per-row middle weights, in row order.
#[must_use]
pub fn mid_weights(table: &ResponseTable, split: &MiddleSplit) -> Vec<f64> {
    table
        .rows()
        .iter()
        .map(|row| row_mid_weight(row, split))
        .collect()
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::row_mid_weight;
    use crate::core::MiddleSplit;

    #[test]
    fn missing_middle_falls_back_to_first_half() {
        let split = MiddleSplit {
            middle: Some(7),
            first_half: smallvec![0, 1],
        };
        assert_eq!(row_mid_weight(&[1.0, 2.0, 3.0], &split), 3.0);
    }

    #[test]
    fn empty_first_half_sums_to_zero() {
        let split = MiddleSplit::resolve(1).expect("split");
        assert_eq!(row_mid_weight(&[4.0], &split), 2.0);
    }
}
