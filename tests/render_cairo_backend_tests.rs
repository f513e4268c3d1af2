#![cfg(feature = "cairo-backend")]

use likert_rs::LikertError;
use likert_rs::api::{LikertChart, LikertConfig};
use likert_rs::core::{ResponseTable, Viewport};
use likert_rs::render::{CairoRenderer, LineStrokeStyle};

fn table() -> ResponseTable {
    ResponseTable::from_rows(
        &["SD", "D", "N", "A", "SA"],
        vec![
            ("Q1", vec![10.0, 20.0, 40.0, 20.0, 10.0]),
            ("Q2", vec![20.0, 20.0, 20.0, 20.0, 20.0]),
        ],
    )
    .expect("table")
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, LikertError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_full_chart() {
    let renderer = CairoRenderer::new(1000, 800).expect("renderer");
    let config = LikertConfig::default().with_rotation(45.0);
    let mut chart = LikertChart::new(renderer, config).expect("chart init");

    let frame = chart.build_frame(&table()).expect("frame");
    assert!(
        frame
            .lines
            .iter()
            .any(|line| line.stroke_style == LineStrokeStyle::Dashed)
    );
    assert!(frame.texts.iter().any(|text| text.rotation_deg == 45.0));

    chart.render(&table()).expect("render");
    let stats = chart.into_renderer().last_stats();

    assert_eq!(stats.rects_drawn, 15);
    assert_eq!(stats.lines_drawn, 7);
    assert_eq!(stats.texts_drawn, 23);
}

#[test]
fn cairo_renderer_writes_png() {
    let mut chart = LikertChart::new(
        CairoRenderer::new(400, 300).expect("renderer"),
        LikertConfig::new(Viewport::new(400, 300)),
    )
    .expect("chart init");
    chart.render(&table()).expect("render");
    let renderer = chart.into_renderer();

    let path = std::env::temp_dir().join(format!("likert_rs_cairo_{}.png", std::process::id()));
    renderer.write_png(&path).expect("write png");

    let bytes = std::fs::read(&path).expect("read png");
    std::fs::remove_file(&path).expect("cleanup");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
}
