//! Repair throughput across dataset sizes and engines
//!
//! Run with: cargo bench --bench repair_bench [--features parallel]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fair_repair::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// `[id, group, score_1 .. score_k]` with group-dependent shifts
fn generate_dataset(n_rows: usize, n_groups: usize, n_scores: usize, seed: u64) -> Dataset {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rows = (0..n_rows)
        .map(|i| {
            let group = rng.gen_range(0..n_groups);
            let mut row = vec![Cell::from(format!("id-{i}")), Cell::from(format!("g{group}"))];
            row.extend((0..n_scores).map(|_| {
                Cell::from((rng.gen::<f64>() * 100.0).round() + 7.0 * group as f64)
            }));
            row
        })
        .collect();
    Dataset::new(rows)
}

fn bench_repair_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("MedianRepair");
    let n_scores = 4;

    for &size in &[1_000, 10_000, 100_000] {
        let data = generate_dataset(size, 4, n_scores, 42);
        let repairer = RepairerBuilder::new(n_scores + 2)
            .ignore(0)
            .protected(1)
            .repair_level(0.5)
            .build()
            .expect("valid configuration");

        group.bench_with_input(BenchmarkId::new("sequential", size), &data, |b, data| {
            b.iter(|| repairer.repair(black_box(data)))
        });

        #[cfg(feature = "parallel")]
        {
            let parallel = RepairerBuilder::new(n_scores + 2)
                .with_engine(fair_repair::parallel())
                .ignore(0)
                .protected(1)
                .repair_level(0.5)
                .build()
                .expect("valid configuration");
            group.bench_with_input(BenchmarkId::new("parallel", size), &data, |b, data| {
                b.iter(|| parallel.repair(black_box(data)))
            });
        }
    }
    group.finish();
}

fn bench_group_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("GroupCount");

    // More groups means smaller groups and fewer quantile buckets
    for &n_groups in &[2, 8, 32] {
        let data = generate_dataset(20_000, n_groups, 2, 7);
        let repairer = RepairerBuilder::new(4)
            .ignore(0)
            .protected(1)
            .repair_level(1.0)
            .build()
            .expect("valid configuration");
        group.bench_with_input(BenchmarkId::from_parameter(n_groups), &data, |b, data| {
            b.iter(|| repairer.repair(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_repair_sizes, bench_group_count);
criterion_main!(benches);
