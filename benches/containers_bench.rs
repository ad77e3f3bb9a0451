//! Benchmarks for the containers: Lazy, Maybe, Either and History.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use functors::{Either, Lazy, history, lazy, maybe, right};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;

// =============================================================================
// Lazy Benchmarks
// =============================================================================

fn benchmark_lazy_evaluate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_evaluate");

    group.bench_function("initial_evaluation", |bencher| {
        bencher.iter(|| {
            let deferred = lazy(|| (0..100).sum::<u64>());
            black_box(*deferred.evaluate())
        });
    });

    group.bench_function("cached_evaluation", |bencher| {
        let deferred = lazy(|| (0..100).sum::<u64>());
        deferred.evaluate();
        bencher.iter(|| black_box(*deferred.evaluate()));
    });

    for depth in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::new("map_chain", depth), &depth, |bencher, &depth| {
            bencher.iter(|| {
                let mut value = 0_u64;
                for _ in 0..depth {
                    let deferred = Lazy::new_with_value(value).map(|x| x + 1);
                    value = *deferred.evaluate();
                }
                black_box(value)
            });
        });
    }

    group.finish();
}

fn benchmark_lazy_contended(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lazy_contended");

    for threads in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("threads", threads), &threads, |bencher, &threads| {
            bencher.iter(|| {
                let shared = Arc::new(Lazy::new(|| (0..1000).sum::<u64>()));
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let shared = Arc::clone(&shared);
                        thread::spawn(move || *shared.evaluate())
                    })
                    .collect();
                for handle in handles {
                    black_box(handle.join().unwrap());
                }
            });
        });
    }

    group.finish();
}

// =============================================================================
// Maybe / Either Benchmarks
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("present", |bencher| {
        bencher.iter(|| {
            maybe(black_box(Some("8080")))
                .flat_map(|value| value.parse::<u16>().ok())
                .map(|port| port + 1)
                .map_empty(|| 3000)
                .unwrap()
        });
    });

    group.bench_function("absent", |bencher| {
        bencher.iter(|| {
            maybe(black_box(None::<&str>))
                .flat_map(|value| value.parse::<u16>().ok())
                .map(|port| port + 1)
                .map_empty(|| 3000)
                .unwrap()
        });
    });

    group.finish();
}

fn benchmark_either_shaping(criterion: &mut Criterion) {
    criterion.bench_function("either_shaping", |bencher| {
        bencher.iter(|| {
            let response: Either<String, u32> = right(black_box(200));
            response
                .right(|status| status.to_string())
                .left(|error| format!("error: {error}"))
                .unwrap()
        });
    });
}

// =============================================================================
// History Benchmarks
// =============================================================================

fn benchmark_history(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("history");

    for size in [100_usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("map", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut current = history(0_u64);
                for _ in 0..size {
                    current = current.map(|value| value + 1);
                }
                black_box(*current.current())
            });
        });

        let built = (0..size).fold(history(0_u64), |current, _| current.map(|value| value + 1));

        group.bench_with_input(BenchmarkId::new("rollback_half", size), &built, |bencher, built| {
            bencher.iter(|| black_box(*built.rollback(black_box(size / 2)).current()));
        });

        group.bench_with_input(BenchmarkId::new("reset", size), &built, |bencher, built| {
            bencher.iter(|| black_box(*built.reset().current()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_lazy_evaluate,
    benchmark_lazy_contended,
    benchmark_maybe_chain,
    benchmark_either_shaping,
    benchmark_history
);
criterion_main!(benches);
