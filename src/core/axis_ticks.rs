use serde::Serialize;
use tracing::debug;

/// Percentage ticks used when rows are normalized.
pub const NORMALIZED_TICKS: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

/// Number of intervals the center distance is split into for raw counts.
const RAW_TICK_DIVISIONS: f64 = 5.0;

/// Upper bound on raw-mode ticks; the step widens past it for large counts.
pub const MAX_RAW_TICKS: usize = 50;

/// Extra room kept right of the longest bar.
pub const X_LIMIT_PADDING: f64 = 0.5;

/// x-axis ticks labeled by unsigned distance from the shared center.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTicks {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
    pub longest_middle: f64,
    pub complete_longest: f64,
}

impl AxisTicks {
    #[must_use]
    pub fn compute(longest_middle: f64, complete_longest: f64, normalized: bool) -> Self {
        let positions = if normalized {
            NORMALIZED_TICKS.to_vec()
        } else {
            raw_tick_positions(longest_middle, complete_longest)
        };
        let labels = positions
            .iter()
            .map(|x| center_distance_label(*x, longest_middle))
            .collect();

        debug!(
            longest_middle,
            complete_longest,
            ?positions,
            "computed axis ticks"
        );

        Self {
            positions,
            labels,
            longest_middle,
            complete_longest,
        }
    }

    /// Visible x-range `[0, complete_longest + 0.5]`.
    #[must_use]
    pub fn x_limits(&self) -> (f64, f64) {
        (0.0, self.complete_longest + X_LIMIT_PADDING)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Step is `floor(longest_middle / 5)`, or 1 when that is zero.
#[must_use]
pub fn raw_tick_step(longest_middle: f64) -> usize {
    let step = (longest_middle.trunc() / RAW_TICK_DIVISIONS).floor();
    if step.is_finite() && step >= 1.0 {
        step as usize
    } else {
        1
    }
}

fn raw_tick_positions(longest_middle: f64, complete_longest: f64) -> Vec<f64> {
    let end = if complete_longest.is_finite() && complete_longest > 0.0 {
        complete_longest.trunc() as usize
    } else {
        0
    };
    let step = raw_tick_step(longest_middle).max(end.div_ceil(MAX_RAW_TICKS));
    let shift = longest_middle.rem_euclid(RAW_TICK_DIVISIONS);

    (0..end)
        .step_by(step)
        .map(|tick| (tick as f64 - shift).floor())
        .collect()
}

fn center_distance_label(position: f64, longest_middle: f64) -> String {
    let distance = (position - longest_middle).abs().floor();
    format!("{}", distance as i64)
}
