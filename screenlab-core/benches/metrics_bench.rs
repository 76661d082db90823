//! Criterion benchmarks for the screening hot paths.
//!
//! Benchmarks:
//! 1. True range + ATR over long histories
//! 2. Full snapshot assembly
//! 3. Parallel batch snapshot over a universe

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use screenlab_core::config::MetricsConfig;
use screenlab_core::domain::PriceSeries;
use screenlab_core::metrics::{compute_atr_pct, compute_batch, MetricsSnapshot};

fn make_series(n: usize) -> PriceSeries {
    let closes: Vec<f64> = (0..n)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.5).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.5).collect();
    let volumes: Vec<f64> = (0..n).map(|i| 1_000_000.0 + (i % 500_000) as f64).collect();

    PriceSeries::from_closes(closes)
        .with_high_low(highs, lows)
        .unwrap()
        .with_volume(volumes)
        .unwrap()
}

fn bench_atr(c: &mut Criterion) {
    let cfg = MetricsConfig::default();
    let mut group = c.benchmark_group("atr");
    for n in [250, 2_500, 25_000] {
        let series = make_series(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &series, |b, series| {
            b.iter(|| compute_atr_pct(black_box(series), &cfg));
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let cfg = MetricsConfig::default();
    let series = make_series(2_500);
    c.bench_function("snapshot_2500_bars", |b| {
        b.iter(|| MetricsSnapshot::compute(black_box(&series), &cfg));
    });
}

fn bench_batch(c: &mut Criterion) {
    let cfg = MetricsConfig::default();
    let universe: Vec<(String, PriceSeries)> = (0..64)
        .map(|i| (format!("SYM{i:03}"), make_series(1_000)))
        .collect();
    c.bench_function("batch_64_symbols", |b| {
        b.iter(|| compute_batch(black_box(&universe), &cfg));
    });
}

criterion_group!(benches, bench_atr, bench_snapshot, bench_batch);
criterion_main!(benches);
