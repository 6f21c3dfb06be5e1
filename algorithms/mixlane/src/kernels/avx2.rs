//! Medium vector kernels (AVX2, 256-bit registers).
//!
//! Eight 32-bit lanes or four 64-bit lanes per register. AVX2 brings a native
//! 32-bit lane multiply (`mullo_epi32`); rotates and the 64-bit lane multiply
//! are still emulated.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_ptr_alignment)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

use core::arch::x86_64::{
    __m128i, __m256i, _mm256_add_epi32, _mm256_add_epi64, _mm256_castsi256_si128,
    _mm256_extracti128_si256, _mm256_loadu_si256, _mm256_mul_epu32, _mm256_mullo_epi32,
    _mm256_or_si256, _mm256_set1_epi32, _mm256_set1_epi64x, _mm256_slli_epi32, _mm256_slli_epi64,
    _mm256_srli_epi32, _mm256_srli_epi64, _mm256_xor_si256, _mm_cvtsi128_si32, _mm_cvtsi128_si64,
    _mm_srli_si128, _mm_xor_si128,
};

use crate::block;
use crate::kernels::constants::{
    C1_32, C1_64, C2_32, C2_64, C3_32, C3_64, C4_32, C4_64, C5_32, C5_64,
};
use crate::kernels::emulate::define_mul_lanes_u64;
use crate::kernels::scalar;
use crate::types::Error;

/// Bytes per 256-bit block at 32-bit lane width (8 lanes).
const BLOCK_32: usize = 32;
/// Bytes per 256-bit block at 64-bit lane width (4 lanes).
const BLOCK_64: usize = 32;

define_mul_lanes_u64!(
    "avx2",
    __m256i,
    _mm256_mul_epu32,
    _mm256_srli_epi64,
    _mm256_slli_epi64,
    _mm256_add_epi64
);

// =============================================================================
// 32-BIT LANE PRIMITIVES
// =============================================================================

/// Rotate each 32-bit lane left by 15 (block-value rotation).
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn rotl32_lanes_15(v: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi32(v, 15), _mm256_srli_epi32(v, 17))
}

/// Rotate each 32-bit lane left by 13 (accumulator rotation).
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn rotl32_lanes_13(v: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi32(v, 13), _mm256_srli_epi32(v, 19))
}

/// One block round over eight independent 32-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn round32_lanes(h: __m256i, block: __m256i) -> __m256i {
    let mut k = _mm256_mullo_epi32(block, _mm256_set1_epi32(C1_32 as i32));
    k = rotl32_lanes_15(k);
    k = _mm256_mullo_epi32(k, _mm256_set1_epi32(C2_32 as i32));
    let h = rotl32_lanes_13(_mm256_xor_si256(h, k));
    _mm256_add_epi32(
        _mm256_mullo_epi32(h, _mm256_set1_epi32(5)),
        _mm256_set1_epi32(C3_32 as i32),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn avalanche32_lanes(mut h: __m256i) -> __m256i {
    h = _mm256_xor_si256(h, _mm256_srli_epi32(h, 16));
    h = _mm256_mullo_epi32(h, _mm256_set1_epi32(C4_32 as i32));
    h = _mm256_xor_si256(h, _mm256_srli_epi32(h, 13));
    h = _mm256_mullo_epi32(h, _mm256_set1_epi32(C5_32 as i32));
    _mm256_xor_si256(h, _mm256_srli_epi32(h, 16))
}

/// XOR all eight 32-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u32(v: __m256i) -> u32 {
    let folded: __m128i = _mm_xor_si128(_mm256_castsi256_si128(v), _mm256_extracti128_si256(v, 1));
    let folded = _mm_xor_si128(folded, _mm_srli_si128(folded, 8));
    let folded = _mm_xor_si128(folded, _mm_srli_si128(folded, 4));
    _mm_cvtsi128_si32(folded) as u32
}

// =============================================================================
// 64-BIT LANE PRIMITIVES
// =============================================================================

/// Rotate each 64-bit lane left by 31 (block-value rotation).
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn rotl64_lanes_31(v: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64(v, 31), _mm256_srli_epi64(v, 33))
}

/// Rotate each 64-bit lane left by 27 (accumulator rotation).
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn rotl64_lanes_27(v: __m256i) -> __m256i {
    _mm256_or_si256(_mm256_slli_epi64(v, 27), _mm256_srli_epi64(v, 37))
}

/// One block round over four independent 64-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn round64_lanes(h: __m256i, block: __m256i) -> __m256i {
    let mut k = mul_lanes_u64(block, _mm256_set1_epi64x(C1_64 as i64));
    k = rotl64_lanes_31(k);
    k = mul_lanes_u64(k, _mm256_set1_epi64x(C2_64 as i64));
    let h = rotl64_lanes_27(_mm256_xor_si256(h, k));
    _mm256_add_epi64(
        _mm256_add_epi64(_mm256_slli_epi64(h, 2), h),
        _mm256_set1_epi64x(C3_64 as i64),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn avalanche64_lanes(mut h: __m256i) -> __m256i {
    h = _mm256_xor_si256(h, _mm256_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm256_set1_epi64x(C4_64 as i64));
    h = _mm256_xor_si256(h, _mm256_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm256_set1_epi64x(C5_64 as i64));
    _mm256_xor_si256(h, _mm256_srli_epi64(h, 33))
}

/// XOR all four 64-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[inline]
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u64(v: __m256i) -> u64 {
    let folded: __m128i = _mm_xor_si128(_mm256_castsi256_si128(v), _mm256_extracti128_si256(v, 1));
    let folded = _mm_xor_si128(folded, _mm_srli_si128(folded, 8));
    _mm_cvtsi128_si64(folded) as u64
}

// =============================================================================
// KERNELS
// =============================================================================

/// Hash `input` into a 32-bit digest using eight AVX2 lanes.
///
/// Inputs shorter than one 32-byte register block delegate to the scalar
/// kernel, so lane parallelism degenerates to a single lane there.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    if input.len() < BLOCK_32 {
        return scalar::hash32(input, seed);
    }
    let padded = block::format(input, BLOCK_32, 4)?;
    let mut acc = _mm256_set1_epi32(seed as i32);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_32) {
        // SAFETY: chunks_exact yields 32 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm256_loadu_si256(chunk.as_ptr().cast());
        acc = round32_lanes(acc, block);
    }
    acc = _mm256_xor_si256(acc, _mm256_set1_epi32(input.len() as u32 as i32));
    acc = avalanche32_lanes(acc);
    Ok(fold_lanes_u32(acc))
}

/// Hash `input` into a 64-bit digest using four AVX2 lanes.
///
/// Inputs shorter than one 32-byte register block delegate to the scalar
/// kernel.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports AVX2.
#[target_feature(enable = "avx2")]
#[allow(unsafe_code)]
pub unsafe fn hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    if input.len() < BLOCK_64 {
        return scalar::hash64(input, seed);
    }
    let padded = block::format(input, BLOCK_64, 8)?;
    let mut acc = _mm256_set1_epi64x(seed as i64);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_64) {
        // SAFETY: chunks_exact yields 32 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm256_loadu_si256(chunk.as_ptr().cast());
        acc = round64_lanes(acc, block);
    }
    acc = _mm256_xor_si256(acc, _mm256_set1_epi64x(input.len() as i64));
    acc = avalanche64_lanes(acc);
    Ok(fold_lanes_u64(acc))
}

// =============================================================================
// TESTS
// =============================================================================
