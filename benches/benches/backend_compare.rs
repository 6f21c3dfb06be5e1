//! Backend Comparison Benchmark
//!
//! Compares performance of the runtime dispatcher vs explicit SSE2, AVX2,
//! and AVX-512 kernels. Validates the cost of the dispatch indirection and
//! of each fallback tier.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use mixlane::kernels;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mixlane Backends");

    // Scenarios:
    // - Small (7B): dispatch overhead vs the sub-block scalar delegation
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): bulk throughput (widest registers saturated)
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Dispatched (Production Path)
        // Measures runtime dispatch + fastest available kernel
        group.bench_function(format!("Dispatched (Default) - {size} bytes"), |b| {
            b.iter(|| mixlane::hash64(black_box(&input), 0).unwrap());
        });

        // 2. AVX-512 - Explicit kernel (bypasses dispatcher)
        if is_x86_feature_detected!("avx512f") {
            group.bench_function(format!("AVX-512 Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::avx512::hash64(black_box(&input), 0).unwrap() });
            });
        }

        // 3. AVX2 - Explicit middle-tier kernel
        if is_x86_feature_detected!("avx2") {
            group.bench_function(format!("AVX2 Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::avx2::hash64(black_box(&input), 0).unwrap() });
            });
        }

        // 4. SSE2 - Explicit baseline-vector kernel
        if is_x86_feature_detected!("sse2") {
            group.bench_function(format!("SSE2 Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::sse2::hash64(black_box(&input), 0).unwrap() });
            });
        }

        // 5. Scalar - Pure Rust, no SIMD
        // Baseline to quantify the speedup from hardware acceleration
        group.bench_function(format!("Scalar (No SIMD) - {size} bytes"), |b| {
            b.iter(|| kernels::scalar::hash64(black_box(&input), 0).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
