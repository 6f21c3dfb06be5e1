//! Wide vector kernels (AVX-512F, 512-bit registers).
//!
//! Sixteen 32-bit lanes or eight 64-bit lanes per register. AVX-512F has
//! native per-lane rotates (`rol_epi32`/`rol_epi64`) and a native 32-bit lane
//! multiply; only the 64-bit lane multiply needs emulation.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_ptr_alignment)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

use core::arch::x86_64::{
    __m128i, __m256i, __m512i, _mm256_castsi256_si128, _mm256_extracti128_si256, _mm256_xor_si256,
    _mm512_add_epi32, _mm512_add_epi64, _mm512_castsi512_si256, _mm512_extracti64x4_epi64,
    _mm512_loadu_si512, _mm512_mul_epu32, _mm512_mullo_epi32, _mm512_rol_epi32, _mm512_rol_epi64,
    _mm512_set1_epi32, _mm512_set1_epi64, _mm512_slli_epi64, _mm512_srli_epi32, _mm512_srli_epi64,
    _mm512_xor_si512, _mm_cvtsi128_si32, _mm_cvtsi128_si64, _mm_srli_si128, _mm_xor_si128,
};

use crate::block;
use crate::kernels::constants::{
    C1_32, C1_64, C2_32, C2_64, C3_32, C3_64, C4_32, C4_64, C5_32, C5_64,
};
use crate::kernels::emulate::define_mul_lanes_u64;
use crate::kernels::scalar;
use crate::types::Error;

/// Bytes per 512-bit block at 32-bit lane width (16 lanes).
const BLOCK_32: usize = 64;
/// Bytes per 512-bit block at 64-bit lane width (8 lanes).
const BLOCK_64: usize = 64;

define_mul_lanes_u64!(
    "avx512f",
    __m512i,
    _mm512_mul_epu32,
    _mm512_srli_epi64,
    _mm512_slli_epi64,
    _mm512_add_epi64
);

// =============================================================================
// 32-BIT LANE PRIMITIVES
// =============================================================================

/// One block round over sixteen independent 32-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn round32_lanes(h: __m512i, block: __m512i) -> __m512i {
    let mut k = _mm512_mullo_epi32(block, _mm512_set1_epi32(C1_32 as i32));
    k = _mm512_rol_epi32(k, 15);
    k = _mm512_mullo_epi32(k, _mm512_set1_epi32(C2_32 as i32));
    let h = _mm512_rol_epi32(_mm512_xor_si512(h, k), 13);
    _mm512_add_epi32(
        _mm512_mullo_epi32(h, _mm512_set1_epi32(5)),
        _mm512_set1_epi32(C3_32 as i32),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn avalanche32_lanes(mut h: __m512i) -> __m512i {
    h = _mm512_xor_si512(h, _mm512_srli_epi32(h, 16));
    h = _mm512_mullo_epi32(h, _mm512_set1_epi32(C4_32 as i32));
    h = _mm512_xor_si512(h, _mm512_srli_epi32(h, 13));
    h = _mm512_mullo_epi32(h, _mm512_set1_epi32(C5_32 as i32));
    _mm512_xor_si512(h, _mm512_srli_epi32(h, 16))
}

/// XOR all sixteen 32-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u32(v: __m512i) -> u32 {
    let half: __m256i = _mm256_xor_si256(
        _mm512_castsi512_si256(v),
        _mm512_extracti64x4_epi64(v, 1),
    );
    let quarter: __m128i = _mm_xor_si128(
        _mm256_castsi256_si128(half),
        _mm256_extracti128_si256(half, 1),
    );
    let quarter = _mm_xor_si128(quarter, _mm_srli_si128(quarter, 8));
    let quarter = _mm_xor_si128(quarter, _mm_srli_si128(quarter, 4));
    _mm_cvtsi128_si32(quarter) as u32
}

// =============================================================================
// 64-BIT LANE PRIMITIVES
// =============================================================================

/// One block round over eight independent 64-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn round64_lanes(h: __m512i, block: __m512i) -> __m512i {
    let mut k = mul_lanes_u64(block, _mm512_set1_epi64(C1_64 as i64));
    k = _mm512_rol_epi64(k, 31);
    k = mul_lanes_u64(k, _mm512_set1_epi64(C2_64 as i64));
    let h = _mm512_rol_epi64(_mm512_xor_si512(h, k), 27);
    _mm512_add_epi64(
        _mm512_add_epi64(_mm512_slli_epi64(h, 2), h),
        _mm512_set1_epi64(C3_64 as i64),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn avalanche64_lanes(mut h: __m512i) -> __m512i {
    h = _mm512_xor_si512(h, _mm512_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm512_set1_epi64(C4_64 as i64));
    h = _mm512_xor_si512(h, _mm512_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm512_set1_epi64(C5_64 as i64));
    _mm512_xor_si512(h, _mm512_srli_epi64(h, 33))
}

/// XOR all eight 64-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[inline]
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u64(v: __m512i) -> u64 {
    let half: __m256i = _mm256_xor_si256(
        _mm512_castsi512_si256(v),
        _mm512_extracti64x4_epi64(v, 1),
    );
    let quarter: __m128i = _mm_xor_si128(
        _mm256_castsi256_si128(half),
        _mm256_extracti128_si256(half, 1),
    );
    let quarter = _mm_xor_si128(quarter, _mm_srli_si128(quarter, 8));
    _mm_cvtsi128_si64(quarter) as u64
}

// =============================================================================
// KERNELS
// =============================================================================

/// Hash `input` into a 32-bit digest using sixteen AVX-512F lanes.
///
/// Inputs shorter than one 64-byte register block delegate to the scalar
/// kernel, so lane parallelism degenerates to a single lane there.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
pub unsafe fn hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    if input.len() < BLOCK_32 {
        return scalar::hash32(input, seed);
    }
    let padded = block::format(input, BLOCK_32, 4)?;
    let mut acc = _mm512_set1_epi32(seed as i32);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_32) {
        // SAFETY: chunks_exact yields 64 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm512_loadu_si512(chunk.as_ptr().cast());
        acc = round32_lanes(acc, block);
    }
    acc = _mm512_xor_si512(acc, _mm512_set1_epi32(input.len() as u32 as i32));
    acc = avalanche32_lanes(acc);
    Ok(fold_lanes_u32(acc))
}

/// Hash `input` into a 64-bit digest using eight AVX-512F lanes.
///
/// Inputs shorter than one 64-byte register block delegate to the scalar
/// kernel.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports AVX-512F.
#[target_feature(enable = "avx512f")]
#[allow(unsafe_code)]
pub unsafe fn hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    if input.len() < BLOCK_64 {
        return scalar::hash64(input, seed);
    }
    let padded = block::format(input, BLOCK_64, 8)?;
    let mut acc = _mm512_set1_epi64(seed as i64);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_64) {
        // SAFETY: chunks_exact yields 64 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm512_loadu_si512(chunk.as_ptr().cast());
        acc = round64_lanes(acc, block);
    }
    acc = _mm512_xor_si512(acc, _mm512_set1_epi64(input.len() as i64));
    acc = avalanche64_lanes(acc);
    Ok(fold_lanes_u64(acc))
}

// =============================================================================
// TESTS
// =============================================================================
