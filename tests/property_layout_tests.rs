use likert_rs::core::{
    DivergingBarLayout, LayoutOptions, MiddleSplit, PercentageMode, ResponseTable,
    normalize_per_row, row_mid_weight,
};
use likert_rs::render::Color;
use proptest::prelude::*;

fn table_strategy() -> impl Strategy<Value = ResponseTable> {
    (1usize..9, 1usize..12).prop_flat_map(|(columns, rows)| {
        proptest::collection::vec(proptest::collection::vec(0.0f64..1_000.0, columns), rows)
            .prop_map(move |values| {
                let column_labels: Vec<String> = (0..columns).map(|c| format!("C{c}")).collect();
                let rows = values
                    .into_iter()
                    .enumerate()
                    .map(|(r, row)| (format!("R{r}"), row))
                    .collect();
                ResponseTable::from_rows(&column_labels, rows).expect("generated table")
            })
    })
}

fn layout(table: &ResponseTable, normalise: bool) -> DivergingBarLayout {
    let colors = vec![Color::BLACK; table.column_count()];
    let options = LayoutOptions {
        normalise,
        labels: true,
        percentage_mode: PercentageMode::PerRow,
    };
    DivergingBarLayout::compute(table, &colors, options).expect("layout")
}

proptest! {
    #[test]
    fn mid_weight_never_exceeds_row_total(table in table_strategy()) {
        let split = MiddleSplit::for_columns(table.columns()).expect("split");
        for (row, total) in table.rows().iter().zip(table.row_totals()) {
            prop_assert!(row_mid_weight(row, &split) <= total + 1e-9);
        }
    }

    #[test]
    fn every_row_centers_on_longest_middle(table in table_strategy(), normalise in any::<bool>()) {
        let layout = layout(&table, normalise);
        for row in &layout.rows {
            prop_assert!(row.left_gap >= 0.0);
            prop_assert!((row.left_gap + row.mid_weight - layout.longest_middle()).abs() <= 1e-6);
        }
    }

    #[test]
    fn segment_widths_reproduce_row_totals(table in table_strategy(), normalise in any::<bool>()) {
        let layout = layout(&table, normalise);
        for row in &layout.rows {
            let width_sum: f64 = row.segments.iter().map(|s| s.width).sum();
            prop_assert!((width_sum - row.total).abs() <= 1e-6);
            for pair in row.segments.windows(2) {
                prop_assert!((pair[0].end() - pair[1].start).abs() <= 1e-9);
            }
            prop_assert!(row.left_gap + row.total <= layout.complete_longest() + 1e-9);
        }
    }

    #[test]
    fn normalized_rows_sum_to_hundred_or_zero(table in table_strategy()) {
        let normalized = normalize_per_row(&table);
        for (original, row) in table.row_totals().iter().zip(normalized.rows()) {
            let total: f64 = row.iter().sum();
            prop_assert!(row.iter().all(|v| v.is_finite()));
            if *original > 0.0 {
                prop_assert!((total - 100.0).abs() <= 1e-6);
            } else {
                prop_assert!(row.iter().all(|v| *v == 0.0));
            }
        }
    }

    #[test]
    fn ticks_and_labels_stay_finite(table in table_strategy(), normalise in any::<bool>()) {
        let layout = layout(&table, normalise);
        prop_assert_eq!(layout.ticks.positions.len(), layout.ticks.labels.len());
        prop_assert!(layout.ticks.positions.iter().all(|p| p.is_finite()));
        prop_assert!(layout.labels.iter().all(|l| l.x.is_finite() && l.percentage.is_finite()));
    }
}
