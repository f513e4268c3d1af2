use likert_rs::api::{ColormapConfig, Palette};

#[test]
fn categorical_labels_map_by_position() {
    let config = ColormapConfig::new(Palette::RdBu);
    let by_label = config.colors_for(&["SD", "D", "N", "A", "SA"]);
    let by_index = config.map_values(&[0.0, 1.0, 2.0, 3.0, 4.0]);

    assert_eq!(by_label, by_index);
    assert_eq!(by_label[0], Palette::RdBu.sample(0.0));
    assert_eq!(by_label[2], Palette::RdBu.sample(0.5));
    assert_eq!(by_label[4], Palette::RdBu.sample(1.0));
}

#[test]
fn numeric_labels_map_by_value() {
    let config = ColormapConfig::new(Palette::RdYlGn);
    let colors = config.colors_for(&["1", "2", "5"]);

    assert_eq!(colors[0], Palette::RdYlGn.sample(0.0));
    assert_eq!(colors[1], Palette::RdYlGn.sample(0.25));
    assert_eq!(colors[2], Palette::RdYlGn.sample(1.0));
}

#[test]
fn explicit_bounds_rescale_and_clamp() {
    let config = ColormapConfig::new(Palette::Greys).with_bounds(Some(0.0), Some(8.0));
    let colors = config.colors_for(&["SD", "D", "N"]);

    assert_eq!(colors[0], Palette::Greys.sample(0.0));
    assert_eq!(colors[2], Palette::Greys.sample(0.25));

    let clamped = ColormapConfig::new(Palette::Greys)
        .with_bounds(Some(0.0), Some(1.0))
        .map_values(&[5.0]);
    assert_eq!(clamped[0], Palette::Greys.sample(1.0));
}

#[test]
fn sampled_colors_are_valid() {
    for palette in [
        Palette::RdBu,
        Palette::RdYlGn,
        Palette::PuOr,
        Palette::BrBG,
        Palette::Greys,
    ] {
        for step in 0..=20 {
            palette
                .sample(f64::from(step) / 20.0)
                .validate()
                .expect("valid color");
        }
    }
}
