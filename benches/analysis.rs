//! Benchmarks for pattern analysis.

use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pattern_echo::prelude::*;

/// Deterministic pseudo-random walk
fn generate_closes(n: usize) -> Vec<f64> {
    let mut closes = Vec::with_capacity(n);
    let mut price = 100.0;

    for i in 0..n {
        let change = ((i * 7 + 13) % 100) as f64 / 50.0 - 1.0;
        price = (price + change).max(1.0);
        closes.push(price);
    }

    closes
}

fn series(granularity: Granularity, n: usize) -> PriceSeries {
    let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    PriceSeries::from_closes(granularity, start, &generate_closes(n)).unwrap()
}

fn bench_encode(c: &mut Criterion) {
    let closes = generate_closes(87_600);

    c.bench_function("encode_10y_hourly", |b| {
        b.iter(|| {
            let _ = black_box(encode_closes(black_box(&closes)));
        })
    });
}

fn bench_find_matches(c: &mut Criterion) {
    let haystack = encode_closes(&generate_closes(87_600)).unwrap();
    let needle: DirectionPattern = "UUDDUDUU".parse().unwrap();

    c.bench_function("find_matches_10y_hourly", |b| {
        b.iter(|| {
            let _ = black_box(find_matches(black_box(&needle), black_box(&haystack)));
        })
    });
}

fn bench_analyze_scaling(c: &mut Criterion) {
    let analyzer = AnalyzerBuilder::new(Granularity::Daily).build().unwrap();
    let subject = series(Granularity::Daily, 365);

    let mut group = c.benchmark_group("analyze_daily");

    for size in [500, 1000, 3650].iter() {
        let reference = series(Granularity::Daily, *size);

        group.bench_with_input(BenchmarkId::new("analyze", size), size, |b, _| {
            b.iter(|| {
                let _ = black_box(analyzer.analyze(black_box(&subject), black_box(&reference)));
            })
        });
    }

    group.finish();
}

fn bench_analyze_hourly(c: &mut Criterion) {
    let analyzer = AnalyzerBuilder::new(Granularity::Hourly).build().unwrap();
    let subject = series(Granularity::Hourly, 8_760);
    let reference = series(Granularity::Hourly, 87_600);

    c.bench_function("analyze_10y_hourly", |b| {
        b.iter(|| {
            let _ = black_box(analyzer.analyze(black_box(&subject), black_box(&reference)));
        })
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_find_matches,
    bench_analyze_scaling,
    bench_analyze_hourly,
);

criterion_main!(benches);
