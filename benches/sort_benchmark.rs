//! Criterion benchmarks for generic vs specialized quicksort.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use dispatch_sorting::data_gen;
use dispatch_sorting::generic_sort;
use dispatch_sorting::specialized_sort;
use dispatch_sorting::{IntCompare, StrCompare};

const DATA_SEED: u64 = 0xda7a;
const PIVOT_SEED: u64 = 0x9140;

/// Generate random integer test data of the given size.
fn random_ints(size: usize) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    data_gen::random_ints(&mut rng, size, 1_000_000)
}

/// Generate random string test data of the given size.
fn random_strings(size: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(DATA_SEED);
    data_gen::random_strings(&mut rng, size, 100)
}

/// Benchmark the comparator-indirected and inlined int sorts side by side.
fn bench_int_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("Int Sort");

    for size_exp in [10, 12, 14, 16] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("generic", size), &size, |b, &size| {
            b.iter_batched(
                || random_ints(size),
                |mut data| {
                    let mut rng = StdRng::seed_from_u64(PIVOT_SEED);
                    generic_sort::sort(black_box(&mut data), &IntCompare, &mut rng);
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("specialized", size), &size, |b, &size| {
            b.iter_batched(
                || random_ints(size),
                |mut data| {
                    let mut rng = StdRng::seed_from_u64(PIVOT_SEED);
                    specialized_sort::sort_ints(black_box(&mut data), &mut rng);
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

/// Benchmark the comparator-indirected and inlined string sorts side by side.
fn bench_string_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("String Sort");

    for size_exp in [8, 10, 12, 14] {
        let size = 1usize << size_exp;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("generic", size), &size, |b, &size| {
            b.iter_batched(
                || random_strings(size),
                |mut data| {
                    let mut rng = StdRng::seed_from_u64(PIVOT_SEED);
                    generic_sort::sort(black_box(&mut data), &StrCompare, &mut rng);
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("specialized", size), &size, |b, &size| {
            b.iter_batched(
                || random_strings(size),
                |mut data| {
                    let mut rng = StdRng::seed_from_u64(PIVOT_SEED);
                    specialized_sort::sort_strings(black_box(&mut data), &mut rng);
                    data
                },
                criterion::BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_int_sort, bench_string_sort);
criterion_main!(benches);
