//! Mixlane Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (4, "4B"),
        (16, "16B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
        (4 * KB, "4KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mixlane::hash64(black_box(data), 0).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: SMALL FILES
// =============================================================================

/// Throughput for small files (Git objects, database chunks).
fn bench_small_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Small-Files");

    let sizes = [
        (8 * KB, "8KB"),
        (16 * KB, "16KB"),
        (32 * KB, "32KB"),
        (64 * KB, "64KB"),
        (128 * KB, "128KB"),
        (256 * KB, "256KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mixlane::hash64(black_box(data), 0).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: MEDIUM FILES
// =============================================================================

/// Throughput for medium files (Documents, images, source bundles).
fn bench_medium_files(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Medium-Files");
    group.sample_size(50); // Reduced samples for larger inputs

    let sizes = [
        (512 * KB, "512KB"),
        (MB, "1MB"),
        (4 * MB, "4MB"),
        (8 * MB, "8MB"),
        (16 * MB, "16MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mixlane::hash64(black_box(data), 0).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: DIGEST WIDTHS
// =============================================================================

/// 32-bit vs 64-bit path at matched sizes. The two rounds differ in word
/// width and constant set, so their throughput is not trivially equal.
fn bench_digest_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Digest-Widths");

    let sizes = [(64, "64B"), (4 * KB, "4KB"), (256 * KB, "256KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("32-bit", name),
            &input,
            |b, data| b.iter(|| mixlane::hash32(black_box(data), 0).unwrap()),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("64-bit", name),
            &input,
            |b, data| b.iter(|| mixlane::hash64(black_box(data), 0).unwrap()),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("width-dynamic", name),
            &input,
            |b, data| b.iter(|| mixlane::compute(black_box(data), 0, 64).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: CACHE EFFECTS
// =============================================================================

/// Performance at various cache hierarchy levels (L1/L2/L3/RAM).
fn bench_cache_effects(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Cache-Effects");

    let sizes = [
        (8 * KB, "8KB-L1"),     // Fits in L1 cache
        (64 * KB, "64KB-L2"),   // Fits in L2 cache
        (512 * KB, "512KB-L3"), // Fits in L3 cache
        (8 * MB, "8MB-RAM"),    // RAM access
        (64 * MB, "64MB-RAM"),  // Heavy RAM access
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| mixlane::hash64(black_box(data), 0).unwrap()),
        );
    }
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_small_files,
    bench_medium_files,
    bench_digest_widths,
    bench_cache_effects,
);

criterion_main!(benches);
