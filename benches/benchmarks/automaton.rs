use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use algoseq::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_automaton() -> Automaton {
    let mut automaton = Automaton::new(256, 110).unwrap();
    let mut seed = vec![0u8; 256];
    seed[255] = 1;
    automaton.feed(seed);
    automaton
}

// ---------------------------------------------------------------------------------------------

pub fn step(c: &mut Criterion) {
    let mut group = c.benchmark_group("Automaton");
    group.bench_function("Step", |b| {
        b.iter_batched(
            create_automaton,
            |mut automaton| {
                for _ in 0..256 {
                    black_box(automaton.step());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = automaton;
    config = Criterion::default();
    targets = step
}
