// File: crates/wave-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG.

use wave_core::signal::Wave;
use wave_core::{Axis, Chart, RenderOptions, Series};

#[test]
fn render_smoke_png() {
    let wave = Wave::standard().expect("fixed configuration is valid");
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", 0.0, 10.0);
    chart.y_axis = Axis::new("sin(x)", -1.1, 1.1);
    chart.add_series(Series::from_wave("sin(x)", &wave));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_tolerates_short_series() {
    // A single point draws nothing but must not fail.
    let mut chart = Chart::new();
    chart.add_series(Series::with_points("dot", vec![(1.0, 1.0)]));
    let opts = RenderOptions::default();
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(!bytes.is_empty());
}
