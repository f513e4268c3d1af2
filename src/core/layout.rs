use serde::Serialize;
use tracing::debug;

use crate::core::{
    AxisTicks, BarSegment, CenteringOffsets, MiddleSplit, PercentageMode, ResponseTable,
    SegmentLabel, annotate_segments, build_segments, mid_weights, normalize_per_row,
};
use crate::error::{LikertError, LikertResult};
use crate::render::Color;

/// Numeric switches of the layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutOptions {
    pub normalise: bool,
    pub labels: bool,
    pub percentage_mode: PercentageMode,
}

/// Geometry of one item's bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowLayout {
    pub label: String,
    pub total: f64,
    pub mid_weight: f64,
    pub left_gap: f64,
    pub segments: Vec<BarSegment>,
}

/// Complete diverging stacked-bar geometry for one table.
///
/// All coordinates are in data units (counts, or percentages when
/// normalized); mapping to pixels happens in the api layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DivergingBarLayout {
    pub columns: Vec<String>,
    /// Segment color of each column.
    pub colors: Vec<Color>,
    pub split: MiddleSplit,
    pub normalized: bool,
    pub rows: Vec<RowLayout>,
    pub ticks: AxisTicks,
    pub labels: Vec<SegmentLabel>,
}

impl DivergingBarLayout {
    /// Runs the full pipeline: split, optional normalization, centering,
    /// stacking, ticks and optional labels.
    pub fn compute(
        table: &ResponseTable,
        colors: &[Color],
        options: LayoutOptions,
    ) -> LikertResult<Self> {
        let split = MiddleSplit::for_columns(table.columns())?;

        let normalized_table;
        let table = if options.normalise {
            normalized_table = normalize_per_row(table);
            &normalized_table
        } else {
            table
        };

        let centering = CenteringOffsets::from_mid_weights(mid_weights(table, &split));
        let row_totals = table.row_totals();
        let complete_longest = centering.complete_longest(&row_totals);
        debug!(
            longest_middle = centering.longest_middle,
            complete_longest,
            rows = table.row_count(),
            "centered likert rows"
        );

        let segments = build_segments(table, &centering.left_gaps, colors)?;
        let labels = if options.labels {
            annotate_segments(table, &segments, options.percentage_mode)
        } else {
            Vec::new()
        };
        let ticks = AxisTicks::compute(
            centering.longest_middle,
            complete_longest,
            options.normalise,
        );

        let rows = table
            .row_labels()
            .iter()
            .zip(segments)
            .enumerate()
            .map(|(index, (label, segments))| RowLayout {
                label: label.clone(),
                total: row_totals[index],
                mid_weight: centering.mid_weights[index],
                left_gap: centering.left_gaps[index],
                segments,
            })
            .collect();

        Ok(Self {
            columns: table.columns().to_vec(),
            colors: colors.to_vec(),
            split,
            normalized: options.normalise,
            rows,
            ticks,
            labels,
        })
    }

    #[must_use]
    pub fn longest_middle(&self) -> f64 {
        self.ticks.longest_middle
    }

    #[must_use]
    pub fn complete_longest(&self) -> f64 {
        self.ticks.complete_longest
    }

    pub fn to_json_pretty(&self) -> LikertResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            LikertError::InvalidData(format!("failed to serialize layout: {e}"))
        })
    }
}
