use anyhow::Result;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wave_core::signal::sine_wave;
use wave_core::{Axis, Chart, RenderOptions, Series};

fn build_chart(n: usize) -> Chart {
    let wave = sine_wave(0.0, 10.0, n).expect("valid sampling");
    let mut ch = Chart::new();
    ch.x_axis = Axis::new("x", 0.0, 10.0);
    ch.y_axis = Axis::new("sin(x)", -1.1, 1.1);
    ch.add_series(Series::from_wave("sin(x)", &wave));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[100usize, 10_000usize] {
        group.bench_function(format!("sine_{n}"), |b| {
            let ch = build_chart(n);
            let mut opts = RenderOptions::default();
            opts.width = 800;
            opts.height = 500;
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
