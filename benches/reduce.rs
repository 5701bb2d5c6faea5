//! # Reducer Benchmarks
//!
//! Compares the three reducers on random perfect trees:
//! - a depth sweep at the default parallelism,
//! - a budget sweep (1, 2, 4, ..., 128) on a fixed-depth tree.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::StdRng};
use std::hint::black_box;
use tree_sum::{config::Strategy, generate::perfect_tree};

fn depth_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_sweep");
    let mut rng = StdRng::seed_from_u64(1);
    for depth in [10, 14, 18] {
        let mut tree = perfect_tree(depth, &mut rng).unwrap();
        group.throughput(Throughput::Elements(tree.len() as u64));
        for strategy in [
            Strategy::Sequential,
            Strategy::fork_join_default(),
            Strategy::depth_bounded_default(),
        ] {
            group.bench_with_input(
                BenchmarkId::new(strategy.to_string(), depth),
                &strategy,
                |b, &strategy| b.iter(|| black_box(strategy.run(&mut tree))),
            );
        }
    }
    group.finish();
}

fn budget_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("budget_sweep");
    let mut tree = perfect_tree(18, &mut StdRng::seed_from_u64(2)).unwrap();
    group.throughput(Throughput::Elements(tree.len() as u64));
    for budget in (0..=7).map(|shift| 1usize << shift) {
        group.bench_with_input(BenchmarkId::new("ForkJoin", budget), &budget, |b, &budget| {
            b.iter(|| black_box(Strategy::ForkJoin { budget }.run(&mut tree)));
        });
        group.bench_with_input(
            BenchmarkId::new("DepthBounded", budget),
            &budget,
            |b, &parallelism| {
                b.iter(|| black_box(Strategy::DepthBounded { parallelism }.run(&mut tree)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, depth_sweep, budget_sweep);
criterion_main!(benches);
