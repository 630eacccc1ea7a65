//! Performance benchmarks for configuring, evaluating and inverting
//! piecewise linear functions.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fcm_membership::PiecewiseLinear;

/// A zig-zag with `n` teeth, so the inverse has many overlapping branches.
fn zigzag(n: usize) -> String {
    (0..=2 * n)
        .map(|i| format!("{};{}", i, if i % 2 == 0 { 0 } else { 1 }))
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_set(c: &mut Criterion) {
    let encoding = zigzag(100);

    c.bench_function("set_zigzag_100", |b| {
        b.iter(|| {
            let mut f = PiecewiseLinear::new();
            f.set(&[black_box(encoding.as_str())])
        })
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let f: PiecewiseLinear = zigzag(1000).parse().expect("Failed to configure function");

    c.bench_function("evaluate_zigzag_1000", |b| {
        b.iter(|| {
            (0..100)
                .map(|i| f.evaluate(black_box(f64::from(i) * 20.0 + 0.5)))
                .sum::<f64>()
        })
    });
}

fn bench_derivative(c: &mut Criterion) {
    let f: PiecewiseLinear = zigzag(1000).parse().expect("Failed to configure function");

    c.bench_function("derivative_zigzag_1000", |b| {
        b.iter(|| black_box(&f).derivative())
    });
}

fn bench_inverse(c: &mut Criterion) {
    let monotonic: PiecewiseLinear = "0;0 1;2 3;3 4;7 6;8"
        .parse()
        .expect("Failed to configure function");
    let zigzag: PiecewiseLinear = zigzag(10).parse().expect("Failed to configure function");

    c.bench_function("inverse_monotonic", |b| {
        b.iter(|| black_box(&monotonic).inverse())
    });
    c.bench_function("inverse_zigzag_10", |b| {
        b.iter(|| black_box(&zigzag).inverse())
    });
}

criterion_group!(
    benches,
    bench_set,
    bench_evaluate,
    bench_derivative,
    bench_inverse
);
criterion_main!(benches);
