//! Benchmark for the sequence search family.
//!
//! Measures finding, multi-occurrence scanning, splitting, and prefix
//! extraction over periodic numeric data at several haystack sizes.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use recollect::search::SequenceSearch;
use std::hint::black_box;

const HAYSTACK_SIZES: [usize; 3] = [64, 1024, 16384];

/// A repeating 0..7 pattern, so a two-element delimiter occurs every seven
/// positions and the values 8 and 9 never occur.
fn periodic_haystack(length: usize) -> Vec<u8> {
    (0..length).map(|index| (index % 7) as u8).collect()
}

// =============================================================================
// 1. Single Occurrence
// =============================================================================

fn benchmark_find_seq_hit_at_end(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_seq_hit_at_end");

    for size in HAYSTACK_SIZES {
        let mut haystack = periodic_haystack(size);
        haystack.extend_from_slice(&[9, 9, 9, 9]);

        group.bench_with_input(BenchmarkId::from_parameter(size), &haystack, |bencher, haystack| {
            bencher.iter(|| black_box(haystack.find_seq(black_box(&[9, 9, 9, 9]))));
        });
    }

    group.finish();
}

fn benchmark_find_seq_miss(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_seq_miss");

    for size in HAYSTACK_SIZES {
        let haystack = periodic_haystack(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &haystack, |bencher, haystack| {
            bencher.iter(|| black_box(haystack.find_seq(black_box(&[9, 9]))));
        });
    }

    group.finish();
}

fn benchmark_find_seq_in_window(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_seq_in_window");
    let haystack = periodic_haystack(16384);

    group.bench_function("middle_half", |bencher| {
        bencher.iter(|| black_box(haystack.find_seq_in(black_box(4096..12288), black_box(&[9, 9]))));
    });

    group.finish();
}

// =============================================================================
// 2. All Occurrences
// =============================================================================

fn benchmark_find_seq_iter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("find_seq_iter");

    for size in HAYSTACK_SIZES {
        let haystack = periodic_haystack(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &haystack, |bencher, haystack| {
            bencher.iter(|| black_box(haystack.find_seq_iter(black_box(&[6, 0])).count()));
        });
    }

    group.finish();
}

// =============================================================================
// 3. Splitting
// =============================================================================

fn benchmark_split_seq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("split_seq");

    for size in HAYSTACK_SIZES {
        let haystack = periodic_haystack(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &haystack, |bencher, haystack| {
            bencher.iter(|| {
                let segments: Vec<&[u8]> = haystack.split_seq(black_box(&[6, 0])).collect();
                black_box(segments)
            });
        });
    }

    group.finish();
}

fn benchmark_split_once_seq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("split_once_seq");
    let haystack = periodic_haystack(16384);

    group.bench_function("first_delimiter", |bencher| {
        bencher.iter(|| black_box(haystack.split_once_seq(black_box(&[6, 0]))));
    });

    group.finish();
}

criterion_group!(
    benches,
    // 1. Single Occurrence
    benchmark_find_seq_hit_at_end,
    benchmark_find_seq_miss,
    benchmark_find_seq_in_window,
    // 2. All Occurrences
    benchmark_find_seq_iter,
    // 3. Splitting
    benchmark_split_seq,
    benchmark_split_once_seq,
);

criterion_main!(benches);
