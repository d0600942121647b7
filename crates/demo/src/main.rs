// File: crates/demo/src/main.rs
// Summary: Headless demo; samples sin(x) over [0, 10] and renders line plots to PNGs.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use wave_core::signal::{Wave, X_END, X_START};
use wave_core::{theme, Axis, Chart, RenderOptions, Series};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let wave = Wave::standard().context("generate sine samples")?;
    info!(
        "generated {} samples of sin(x) over [{}, {}]",
        wave.len(),
        X_START,
        X_END
    );

    let mut chart = Chart::new();
    chart.x_axis = Axis::new("x", X_START, X_END);
    chart.y_axis = Axis::default_y();
    chart.add_series(Series::from_wave("sin(x)", &wave));

    for name in ["dark", "light"] {
        let mut opts = RenderOptions::default();
        opts.theme = theme::find(name);
        let out = PathBuf::from(format!("target/out/sine_{name}.png"));
        chart
            .render_to_png(&opts, &out)
            .with_context(|| format!("render {}", out.display()))?;
        info!("wrote {}", out.display());
    }

    Ok(())
}
