use criterion::{Criterion, criterion_group, criterion_main};
use likert_rs::api::{LikertChart, LikertConfig};
use likert_rs::core::{DivergingBarLayout, LayoutOptions, PercentageMode, ResponseTable};
use likert_rs::render::{Color, NullRenderer};
use std::hint::black_box;

fn survey_table(rows: usize) -> ResponseTable {
    let columns = ["SD", "D", "N", "A", "SA"];
    let rows = (0..rows)
        .map(|i| {
            let base = (i % 17) as f64;
            (
                format!("Item {i}"),
                vec![base, base * 2.0 + 1.0, 7.0, 12.0 - base * 0.5, 3.0 + base],
            )
        })
        .collect();
    ResponseTable::from_rows(&columns, rows).expect("valid generated table")
}

fn bench_layout_1k_rows(c: &mut Criterion) {
    let table = survey_table(1_000);
    let colors = vec![Color::BLACK; table.column_count()];
    let options = LayoutOptions {
        normalise: true,
        labels: true,
        percentage_mode: PercentageMode::PerRow,
    };

    c.bench_function("layout_1k_rows", |b| {
        b.iter(|| {
            let _ = DivergingBarLayout::compute(black_box(&table), black_box(&colors), options)
                .expect("layout should succeed");
        })
    });
}

fn bench_frame_build_100_rows(c: &mut Criterion) {
    let table = survey_table(100);
    let chart = LikertChart::new(NullRenderer::default(), LikertConfig::default())
        .expect("chart init");

    c.bench_function("frame_build_100_rows", |b| {
        b.iter(|| {
            let _ = chart
                .build_frame(black_box(&table))
                .expect("frame should succeed");
        })
    });
}

criterion_group!(benches, bench_layout_1k_rows, bench_frame_build_100_rows);
criterion_main!(benches);
