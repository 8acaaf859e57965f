//! Benchmarks for curve queries and scenario derivation.
//!
//! Run with: cargo bench -p irrbb-curves

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use irrbb_curves::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

const TENORS: [&str; 14] = [
    "ON", "1W", "1M", "3M", "6M", "9M", "1Y", "2Y", "3Y", "5Y", "7Y", "10Y", "20Y", "30Y",
];

fn create_quotes(n_indices: usize) -> WideQuotes {
    (0..n_indices).fold(WideQuotes::new(TENORS), |quotes, i| {
        let cells = (0..TENORS.len())
            .map(|j| QuoteCell::from(0.02 + 0.001 * i as f64 + 0.0005 * j as f64))
            .collect();
        quotes
            .with_row(format!("INDEX_{i:03}"), cells)
            .unwrap()
    })
}

fn create_set(n_indices: usize) -> ForwardCurveSet {
    ForwardCurveSet::from_quotes(
        &create_quotes(n_indices),
        Date::from_ymd(2025, 1, 31).unwrap(),
        DayCountConvention::Act365,
    )
    .unwrap()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_discount_factor(c: &mut Criterion) {
    let set = create_set(1);
    let curve = set.get("INDEX_000").unwrap();
    let times: Vec<f64> = (0..1_000).map(|i| f64::from(i) * 0.04).collect();

    let mut group = c.benchmark_group("discount_factor");
    group.throughput(Throughput::Elements(times.len() as u64));
    group.bench_function("log_linear_1000_points", |b| {
        b.iter(|| {
            times
                .iter()
                .map(|&t| curve.discount_factor(black_box(t)))
                .sum::<f64>()
        });
    });
    group.finish();
}

fn bench_rate_on_date(c: &mut Criterion) {
    let set = create_set(10);
    let date = Date::from_ymd(2031, 6, 15).unwrap();

    c.bench_function("rate_on_date", |b| {
        b.iter(|| set.rate_on_date(black_box("INDEX_005"), black_box(date)));
    });
}

fn bench_build_from_quotes(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_quotes");
    for n in [1, 10, 50] {
        let quotes = create_quotes(n);
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &quotes, |b, quotes| {
            b.iter(|| ForwardCurveSet::from_quotes(black_box(quotes), date, DayCountConvention::Act365));
        });
    }
    group.finish();
}

fn bench_eba_scenarios(c: &mut Criterion) {
    let base = create_set(20);
    let shocks = [ParallelShock::up(200.0), ParallelShock::down(200.0)];

    c.bench_function("eba_parallel_pair_20_indices", |b| {
        b.iter(|| apply_parallel_shocks(black_box(&base), &shocks, &ShockTarget::All));
    });
}

criterion_group!(
    benches,
    bench_discount_factor,
    bench_rate_on_date,
    bench_build_from_quotes,
    bench_eba_scenarios
);
criterion_main!(benches);
