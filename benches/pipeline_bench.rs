//! Benchmark for the checked pipeline against plain iterator chains.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tryout::pipeline::Pipeline;

// =============================================================================
// Stage Benchmarks
// =============================================================================

fn benchmark_pipeline_stages(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline_stages");

    for size in [100, 1000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("map_filter_to_list", size),
            &size,
            |bencher, &size| {
                let values: Vec<i64> = (0..size).collect();
                bencher.iter(|| {
                    let selected: Result<Vec<i64>, String> =
                        Pipeline::from_values(values.clone())
                            .map(|value| Ok(value * 2))
                            .filter(|value| Ok(value % 3 != 0))
                            .to_list();
                    black_box(selected)
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("iterator_baseline", size),
            &size,
            |bencher, &size| {
                let values: Vec<i64> = (0..size).collect();
                bencher.iter(|| {
                    let selected: Vec<i64> = values
                        .clone()
                        .into_iter()
                        .map(|value| value * 2)
                        .filter(|value| value % 3 != 0)
                        .collect();
                    black_box(selected)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Terminal Benchmarks
// =============================================================================

fn benchmark_pipeline_terminals(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("pipeline_terminals");

    let values: Vec<i64> = (0..10_000).collect();

    group.bench_function("fold_sum", |bencher| {
        bencher.iter(|| {
            let total: Result<i64, String> = Pipeline::from_values(values.clone())
                .fold(0, |sum, value| Ok(sum + value));
            black_box(total)
        });
    });

    group.bench_function("fold_with_runs", |bencher| {
        bencher.iter(|| {
            let total: Result<i64, String> = Pipeline::from_values(values.clone()).fold_with(
                0,
                |sum, value| Ok(sum + value),
                |left, right| Ok(left + right),
            );
            black_box(total)
        });
    });

    group.bench_function("sorted_to_list", |bencher| {
        bencher.iter(|| {
            let ordered: Result<Vec<i64>, String> =
                Pipeline::from_values(values.iter().rev().copied().collect::<Vec<_>>())
                    .sorted()
                    .to_list();
            black_box(ordered)
        });
    });

    group.bench_function("find_first_in_generated", |bencher| {
        bencher.iter(|| {
            let mut next = 0_i64;
            let found: Result<Option<i64>, String> = Pipeline::generate(|| {
                next += 1;
                Ok(next)
            })
            .filter(|value| Ok(*value > 500))
            .find_first();
            black_box(found)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_pipeline_stages,
    benchmark_pipeline_terminals
);
criterion_main!(benches);
