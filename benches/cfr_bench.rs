//! Benchmarks for the MCCFR+ trainer.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kuhn_mccfr::cfr::{exploitability, MCCFRTrainer};

fn kuhn_iteration_benchmark(c: &mut Criterion) {
    let mut trainer = MCCFRTrainer::with_seed(42);

    c.bench_function("kuhn_single_iteration", |b| {
        b.iter(|| black_box(trainer.run_iteration()))
    });
}

fn kuhn_1000_iterations_benchmark(c: &mut Criterion) {
    c.bench_function("kuhn_1000_iterations", |b| {
        b.iter(|| {
            let mut trainer = MCCFRTrainer::with_seed(42);
            trainer.train(black_box(1000))
        })
    });
}

fn kuhn_exploitability_benchmark(c: &mut Criterion) {
    let mut trainer = MCCFRTrainer::with_seed(42);
    trainer.train(1000).unwrap();

    c.bench_function("kuhn_exploitability", |b| {
        b.iter(|| black_box(exploitability(trainer.info_sets())))
    });
}

criterion_group!(
    benches,
    kuhn_iteration_benchmark,
    kuhn_1000_iterations_benchmark,
    kuhn_exploitability_benchmark
);
criterion_main!(benches);
