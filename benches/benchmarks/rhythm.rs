use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use algoseq::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn euclidean_rhythms(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rhythm");
    group.bench_function("Euclidean", |b| {
        b.iter(|| {
            for beats in 0..=64 {
                black_box(euclidean(black_box(64), beats, 0));
            }
        })
    });
    group.bench_function("Fast Euclidean", |b| {
        b.iter(|| {
            for beats in 0..=64 {
                black_box(fast_euclidean(black_box(64), beats, 0));
            }
        })
    });
    group.finish();
}

pub fn hex_beats(c: &mut Criterion) {
    let mut group = c.benchmark_group("Rhythm");
    group.bench_function("Hex Beat", |b| {
        b.iter(|| black_box(hex_beat(black_box("f8a9 0c3e 7b1d 2465"))))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = rhythm;
    config = Criterion::default();
    targets = euclidean_rhythms, hex_beats
}
