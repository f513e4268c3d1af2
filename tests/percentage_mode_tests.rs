use likert_rs::core::{PercentageMode, ResponseTable, cell_percentages, normalize_per_row};

fn table() -> ResponseTable {
    ResponseTable::from_rows(
        &["SD", "N", "SA"],
        vec![
            ("Q1", vec![1.0, 1.0, 2.0]),
            ("Q2", vec![3.0, 0.0, 0.0]),
            ("Q3", vec![0.0, 0.0, 0.0]),
        ],
    )
    .expect("table")
}

#[test]
fn per_row_percentages() {
    let pct = cell_percentages(&table(), PercentageMode::PerRow);
    assert_eq!(pct[0], vec![25.0, 25.0, 50.0]);
    assert_eq!(pct[1], vec![100.0, 0.0, 0.0]);
    assert_eq!(pct[2], vec![0.0, 0.0, 0.0]);
}

#[test]
fn per_column_percentages() {
    let pct = cell_percentages(&table(), PercentageMode::PerColumn);
    assert_eq!(pct[0], vec![25.0, 100.0, 100.0]);
    assert_eq!(pct[1], vec![75.0, 0.0, 0.0]);
}

#[test]
fn grand_total_percentages() {
    let pct = cell_percentages(&table(), PercentageMode::Grand);
    assert_eq!(pct[0], vec![14.29, 14.29, 28.57]);
    assert_eq!(pct[1], vec![42.86, 0.0, 0.0]);
}

#[test]
fn normalization_keeps_labels_and_zero_rows() {
    let normalized = normalize_per_row(&table());
    assert_eq!(normalized.columns(), table().columns());
    assert_eq!(normalized.row_labels(), table().row_labels());
    assert_eq!(normalized.rows()[0], vec![25.0, 25.0, 50.0]);
    assert_eq!(normalized.rows()[2], vec![0.0, 0.0, 0.0]);
}

#[test]
fn percentage_mode_uses_snake_case_json() {
    let json = serde_json::to_string(&PercentageMode::PerColumn).expect("json");
    assert_eq!(json, "\"per_column\"");
    let mode: PercentageMode = serde_json::from_str("\"grand\"").expect("parse");
    assert_eq!(mode, PercentageMode::Grand);
}
