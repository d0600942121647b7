use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wave_core::signal::{linspace, sine};

fn bench_signal(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal");
    for &n in &[100usize, 10_000usize, 1_000_000usize] {
        group.bench_with_input(BenchmarkId::new("linspace_sine", n), &n, |b, &n| {
            b.iter(|| {
                let xs = linspace(0.0, 10.0, n).expect("valid sampling");
                let ys = sine(&xs);
                black_box((xs, ys));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_signal);
criterion_main!(benches);
