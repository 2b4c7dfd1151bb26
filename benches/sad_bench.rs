use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sadscan_rs::{sad_distance, search_parallel, search_sequential};

/// Deterministic pseudo-random samples in [0, 1).
fn series(n: usize, seed: u64) -> Vec<f32> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 40) as f32 / (1u64 << 24) as f32
        })
        .collect()
}

/// Series with `pattern` hidden near the end, the worst case for early exit.
fn workload(n: usize, m: usize) -> (Vec<f32>, Vec<f32>) {
    let mut ts = series(n, 42);
    let pattern = series(m, 7);
    let hidden = n - m;
    ts[hidden..].copy_from_slice(&pattern);
    (ts, pattern)
}

fn bench_sad_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("sad_distance");
    for m in [16, 128, 625] {
        let (ts, pattern) = workload(10_000, m);
        group.bench_with_input(BenchmarkId::from_parameter(m), &m, |b, _| {
            b.iter(|| sad_distance(black_box(&ts), black_box(&pattern), black_box(1_234)))
        });
    }
    group.finish();
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    group.sample_size(10);
    for n in [10_000, 100_000] {
        let (ts, pattern) = workload(n, 64);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| search_sequential(black_box(&ts), black_box(&pattern)).unwrap())
        });
    }
    group.finish();
}

fn bench_sequential_vs_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_vs_parallel");
    group.sample_size(10);
    let (ts, pattern) = workload(200_000, 64);
    group.bench_function("sequential", |b| {
        b.iter(|| search_sequential(black_box(&ts), black_box(&pattern)).unwrap())
    });
    for workers in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("parallel", workers), &workers, |b, &w| {
            b.iter(|| search_parallel(black_box(&ts), black_box(&pattern), w).unwrap())
        });
    }
    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_thread_scaling(c: &mut Criterion) {
    use sadscan_rs::{SadEngine, SearchConfig};

    let mut group = c.benchmark_group("thread_scaling");
    group.sample_size(10);

    let (ts, pattern) = workload(200_000, 64);

    for threads in [1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("threads", threads),
            &threads,
            |b, &threads| {
                let engine = SadEngine::with_thread_pool(SearchConfig::partitioned(threads))
                    .unwrap();
                b.iter(|| engine.search(black_box(&ts), black_box(&pattern)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_sad_distance,
    bench_sequential,
    bench_sequential_vs_parallel,
);

#[cfg(feature = "parallel")]
criterion_group!(parallel_benches, bench_thread_scaling);

#[cfg(feature = "parallel")]
criterion_main!(benches, parallel_benches);

#[cfg(not(feature = "parallel"))]
criterion_main!(benches);
