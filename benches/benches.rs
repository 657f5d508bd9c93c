use criterion::criterion_main;

// ---------------------------------------------------------------------------------------------

mod benchmarks;

// ---------------------------------------------------------------------------------------------

criterion_main!(
    benchmarks::rhythm::rhythm, //
    benchmarks::recurrence::recurrence,
    benchmarks::automaton::automaton,
);
