// File: crates/wave-core/tests/autoscale.rs
// Purpose: Validate autoscale and view-state fitting over sampled data.

use wave_core::signal::Wave;
use wave_core::{Chart, Series, ViewState};

#[test]
fn autoscale_fits_sine_extents() {
    let wave = Wave::standard().expect("fixed configuration is valid");
    let mut chart = Chart::new();
    chart.add_series(Series::from_wave("sin(x)", &wave));

    chart.autoscale_axes(0.0);

    assert!(chart.x_axis.min <= 0.0 + 1e-9);
    assert!(chart.x_axis.max >= 10.0 - 1e-9);

    // sin over [0, 10] reaches close to -1 and +1
    assert!(chart.y_axis.min <= -0.99);
    assert!(chart.y_axis.max >= 0.99);
    assert!(chart.y_axis.min >= -1.0 - 1e-9);
    assert!(chart.y_axis.max <= 1.0 + 1e-9);
}

#[test]
fn view_margin_expands_y_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_points("seg", vec![(0.0, 0.0), (4.0, 2.0)]));

    let view = ViewState::from_chart_margin(&chart, 0.5);
    assert_eq!(view.x_min, 0.0);
    assert_eq!(view.x_max, 4.0);
    assert!((view.y_min - (-1.0)).abs() < 1e-9);
    assert!((view.y_max - 3.0).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_view() {
    let mut chart = Chart::new();
    chart.add_series(Series::new("empty"));
    let view = ViewState::from_chart(&chart);
    assert_eq!(view.x_min, 0.0);
    assert_eq!(view.x_max, 1.0);
    assert_eq!(view.y_min, 0.0);
    assert_eq!(view.y_max, 1.0);
}

#[test]
fn degenerate_extents_are_widened() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_points("flat", vec![(2.0, 3.0), (2.0, 3.0)]));
    let view = ViewState::from_chart_margin(&chart, 0.0);
    assert!(view.x_max > view.x_min);
    assert!(view.y_max > view.y_min);
}

#[test]
fn pan_shifts_both_bounds_equally() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_points("seg", vec![(0.0, 0.0), (10.0, 1.0)]));
    let mut view = ViewState::from_chart_margin(&chart, 0.0);
    let span_x = view.x_max - view.x_min;
    let span_y = view.y_max - view.y_min;

    view.pan_by_pixels(50.0, -20.0, 1024, 640, &wave_core::types::Insets::default());

    assert!((view.x_max - view.x_min - span_x).abs() < 1e-9);
    assert!((view.y_max - view.y_min - span_y).abs() < 1e-9);
    // dragging content right moves the window left in world space
    assert!(view.x_min < 0.0);
}
