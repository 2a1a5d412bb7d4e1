//! Criterion benchmarks for greeks_core.
//!
//! Measures the series-expansion CDF across its input range, each Greek
//! individually, the full bundle, and batch evaluation at increasing book
//! sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use greeks_core::analytical::batch::{self, GreeksRequest};
use greeks_core::analytical::{delta, gamma, rho, theta, vega, Greeks, GreeksScales};
use greeks_core::math::distributions::{double_factorial, standard_normal_cdf};
use greeks_core::types::{MarketInputs, OptionType};

/// Generate a book of options with varied strikes and expiries.
fn generate_book(n: usize) -> Vec<GreeksRequest> {
    (0..n)
        .map(|i| {
            let strike = 80.0 + (i % 41) as f64;
            let expiry = 0.05 + (i % 12) as f64 / 12.0;
            let option_type = if i % 2 == 0 {
                OptionType::Call
            } else {
                OptionType::Put
            };
            GreeksRequest::new(
                MarketInputs::new(100.0, strike, expiry, 0.2, 0.02),
                option_type,
                1.0,
            )
        })
        .collect()
}

/// Benchmark the CDF in the series region and in the saturated tails.
fn bench_distribution(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribution");

    for x in [0.0, 1.0, 4.0, 7.9, 9.0] {
        group.bench_with_input(BenchmarkId::new("cdf", x), &x, |b, &x| {
            b.iter(|| standard_normal_cdf(black_box(x)));
        });
    }

    group.bench_function("double_factorial_199", |b| {
        b.iter(|| double_factorial(black_box(199.0)));
    });

    group.finish();
}

/// Benchmark each Greek for a single near-the-money option.
fn bench_single_greeks(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_greeks");
    let (s, k, t, v, r) = (206.35, 206.0, 0.086, 0.1, 0.0015);

    group.bench_function("delta", |b| {
        b.iter(|| delta(black_box(s), k, t, v, r, OptionType::Call));
    });
    group.bench_function("theta", |b| {
        b.iter(|| theta(black_box(s), k, t, v, r, OptionType::Call, 365.0));
    });
    group.bench_function("gamma", |b| {
        b.iter(|| gamma(black_box(s), k, t, v, r));
    });
    group.bench_function("vega", |b| {
        b.iter(|| vega(black_box(s), k, t, v, r));
    });
    group.bench_function("rho", |b| {
        b.iter(|| rho(black_box(s), k, t, v, r, OptionType::Put, 100.0));
    });

    let inputs = MarketInputs::new(s, k, t, v, r);
    group.bench_function("bundle", |b| {
        b.iter(|| Greeks::compute(black_box(&inputs), OptionType::Call, GreeksScales::default()));
    });

    group.finish();
}

/// Benchmark batch evaluation scaling.
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for size in [100, 1_000, 10_000] {
        let book = generate_book(size);
        group.bench_with_input(BenchmarkId::new("compute", size), &book, |b, book| {
            b.iter(|| batch::compute(black_box(book), GreeksScales::default()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_distribution, bench_single_greeks, bench_batch);
criterion_main!(benches);
