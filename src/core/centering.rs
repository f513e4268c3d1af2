use ordered_float::OrderedFloat;
use serde::Serialize;

/// Shared center plus the invisible left padding for each row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenteringOffsets {
    /// x-coordinate every row's middle weight lands on.
    pub longest_middle: f64,
    pub mid_weights: Vec<f64>,
    pub left_gaps: Vec<f64>,
}

impl CenteringOffsets {
    /// Pads every row so that `left_gap + mid_weight == longest_middle`.
    ///
    /// An empty slice centers on 0.
    #[must_use]
    pub fn from_mid_weights(mid_weights: Vec<f64>) -> Self {
        let longest_middle = max_or_zero(&mid_weights);
        let left_gaps = mid_weights
            .iter()
            .map(|weight| (weight - longest_middle).abs())
            .collect();
        Self {
            longest_middle,
            mid_weights,
            left_gaps,
        }
    }

    /// Full chart width: the longest padded row.
    #[must_use]
    pub fn complete_longest(&self, row_totals: &[f64]) -> f64 {
        let padded: Vec<f64> = row_totals
            .iter()
            .zip(&self.left_gaps)
            .map(|(total, gap)| total + gap)
            .collect();
        max_or_zero(&padded)
    }
}

pub(crate) fn max_or_zero(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .map(OrderedFloat)
        .max()
        .map_or(0.0, |value| value.0)
}
