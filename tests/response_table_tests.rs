use likert_rs::LikertError;
use likert_rs::core::{DivergingBarLayout, LayoutOptions, PercentageMode, ResponseTable};
use likert_rs::render::Color;

#[test]
fn table_exposes_totals() {
    let table = ResponseTable::from_rows(
        &["SD", "D", "A", "SA"],
        vec![("Q1", vec![2.0, 3.0, 3.0, 2.0]), ("Q2", vec![1.0, 0.0, 0.0, 1.0])],
    )
    .expect("table");

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.row_totals(), vec![10.0, 2.0]);
    assert_eq!(table.column_totals(), vec![3.0, 3.0, 3.0, 3.0]);
    assert_eq!(table.grand_total(), 12.0);
}

#[test]
fn empty_columns_are_rejected() {
    let columns: [&str; 0] = [];
    let err = ResponseTable::from_rows(&columns, Vec::<(String, Vec<f64>)>::new())
        .expect_err("must reject");
    assert!(matches!(err, LikertError::EmptyColumns));
}

#[test]
fn rows_without_items_are_valid() {
    let table =
        ResponseTable::from_rows(&["SD", "SA"], Vec::<(String, Vec<f64>)>::new()).expect("table");
    assert!(table.is_empty());
}

#[test]
fn negative_value_names_row_and_column() {
    let err = ResponseTable::from_rows(
        &["SD", "D", "N"],
        vec![("Q1", vec![1.0, 1.0, 1.0]), ("Q2", vec![1.0, -2.0, 1.0])],
    )
    .expect_err("must reject negative value");

    match err {
        LikertError::MalformedTable { row, column, .. } => {
            assert_eq!(row, "Q2");
            assert_eq!(column, "D");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_finite_value_is_rejected() {
    let err = ResponseTable::from_rows(&["SD", "SA"], vec![("Q1", vec![f64::NAN, 1.0])])
        .expect_err("must reject NaN");
    assert!(format!("{err}").contains("row `Q1`, column `SD`"));
}

#[test]
fn short_row_names_first_missing_column() {
    let err = ResponseTable::from_rows(&["SD", "D", "A"], vec![("Q1", vec![1.0])])
        .expect_err("must reject short row");

    match err {
        LikertError::MalformedTable { row, column, reason } => {
            assert_eq!(row, "Q1");
            assert_eq!(column, "D");
            assert!(reason.contains("1 values"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn overflowing_row_total_is_rejected() {
    let err = ResponseTable::from_rows(
        &["SD", "D", "A", "SA"],
        vec![("Q", vec![1e308, 1e308, 1.0, 1.0]), ("R", vec![1.0; 4])],
    )
    .expect_err("must reject infinite row total");

    match err {
        LikertError::MalformedTable { row, column, .. } => {
            assert_eq!(row, "Q");
            assert_eq!(column, "total");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn table_total_past_limit_names_the_row_that_crosses_it() {
    let err = ResponseTable::from_rows(
        &["SD", "SA"],
        vec![("Q1", vec![0.0, 6e307]), ("Q2", vec![6e307, 0.0])],
    )
    .expect_err("must reject oversized table total");

    match err {
        LikertError::MalformedTable { row, column, .. } => {
            assert_eq!(row, "Q2");
            assert_eq!(column, "total");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn large_finite_table_keeps_layout_finite() {
    let table = ResponseTable::from_rows(
        &["SD", "SA"],
        vec![("Q1", vec![4e307, 0.0]), ("Q2", vec![0.0, 4e307])],
    )
    .expect("table");
    let colors = vec![Color::BLACK, Color::WHITE];
    let options = LayoutOptions {
        normalise: false,
        labels: false,
        percentage_mode: PercentageMode::PerRow,
    };
    let layout = DivergingBarLayout::compute(&table, &colors, options).expect("layout");

    assert!(layout.complete_longest().is_finite());
    assert!(layout.rows.iter().all(|row| row.left_gap.is_finite()));
}
