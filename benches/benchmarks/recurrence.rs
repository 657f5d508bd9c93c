use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use algoseq::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Recurrence");
    group.bench_function("Fibonacci Exact", |b| {
        b.iter(|| black_box(fibonacci(black_box(1000), 0, NumberFormat::Exact)))
    });
    group.bench_function("Pell Numbers", |b| {
        b.iter(|| black_box(pell(black_box(64), 0, NumberFormat::Number)))
    });
    group.finish();
}

pub fn periods(c: &mut Criterion) {
    let mut group = c.benchmark_group("Recurrence");
    group.bench_function("Pisano Periods", |b| {
        b.iter(|| {
            for modulus in 2..64 {
                let _ = black_box(pisano_period(black_box(modulus)));
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = recurrence;
    config = Criterion::default();
    targets = generate, periods
}
