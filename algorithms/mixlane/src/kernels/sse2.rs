//! Narrow vector kernels (SSE2, 128-bit registers).
//!
//! Four 32-bit lanes or two 64-bit lanes per register. SSE2 predates per-lane
//! rotates and full-width lane multiplies, so rotates are assembled from
//! shift/or and multiplies from `mul_epu32` partial products.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_ptr_alignment)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::similar_names)]

use core::arch::x86_64::{
    __m128i, _mm_add_epi32, _mm_add_epi64, _mm_cvtsi128_si32, _mm_cvtsi128_si64,
    _mm_loadu_si128, _mm_mul_epu32, _mm_or_si128, _mm_set1_epi32, _mm_set1_epi64x,
    _mm_shuffle_epi32, _mm_slli_epi32, _mm_slli_epi64, _mm_srli_epi32, _mm_srli_epi64,
    _mm_srli_si128, _mm_unpacklo_epi32, _mm_xor_si128,
};

use crate::block;
use crate::kernels::constants::{
    C1_32, C1_64, C2_32, C2_64, C3_32, C3_64, C4_32, C4_64, C5_32, C5_64,
};
use crate::kernels::emulate::define_mul_lanes_u64;
use crate::kernels::scalar;
use crate::types::Error;

/// Bytes per 128-bit block at 32-bit lane width (4 lanes).
const BLOCK_32: usize = 16;
/// Bytes per 128-bit block at 64-bit lane width (2 lanes).
const BLOCK_64: usize = 16;

define_mul_lanes_u64!(
    "sse2",
    __m128i,
    _mm_mul_epu32,
    _mm_srli_epi64,
    _mm_slli_epi64,
    _mm_add_epi64
);

// =============================================================================
// 32-BIT LANE PRIMITIVES
// =============================================================================

/// Per-lane 32x32 -> low-32 multiply (SSE2 has no `mullo_epi32`).
///
/// Even and odd lanes are multiplied separately with `mul_epu32`; the low
/// halves of the widened products are recombined by shuffle/unpack.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn mullo_lanes_u32(a: __m128i, b: __m128i) -> __m128i {
    let even = _mm_mul_epu32(a, b);
    let odd = _mm_mul_epu32(_mm_srli_si128(a, 4), _mm_srli_si128(b, 4));
    // _MM_SHUFFLE(0, 0, 2, 0) spelled as a literal; the const fn is unstable.
    let even_lo = _mm_shuffle_epi32(even, 0b00_00_10_00);
    let odd_lo = _mm_shuffle_epi32(odd, 0b00_00_10_00);
    _mm_unpacklo_epi32(even_lo, odd_lo)
}

/// Rotate each 32-bit lane left by 15 (block-value rotation).
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn rotl32_lanes_15(v: __m128i) -> __m128i {
    _mm_or_si128(_mm_slli_epi32(v, 15), _mm_srli_epi32(v, 17))
}

/// Rotate each 32-bit lane left by 13 (accumulator rotation).
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn rotl32_lanes_13(v: __m128i) -> __m128i {
    _mm_or_si128(_mm_slli_epi32(v, 13), _mm_srli_epi32(v, 19))
}

/// One block round over four independent 32-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn round32_lanes(h: __m128i, block: __m128i) -> __m128i {
    let mut k = mullo_lanes_u32(block, _mm_set1_epi32(C1_32 as i32));
    k = rotl32_lanes_15(k);
    k = mullo_lanes_u32(k, _mm_set1_epi32(C2_32 as i32));
    let h = rotl32_lanes_13(_mm_xor_si128(h, k));
    // h * 5 + C3, with the multiply strength-reduced to (h << 2) + h.
    _mm_add_epi32(
        _mm_add_epi32(_mm_slli_epi32(h, 2), h),
        _mm_set1_epi32(C3_32 as i32),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn avalanche32_lanes(mut h: __m128i) -> __m128i {
    h = _mm_xor_si128(h, _mm_srli_epi32(h, 16));
    h = mullo_lanes_u32(h, _mm_set1_epi32(C4_32 as i32));
    h = _mm_xor_si128(h, _mm_srli_epi32(h, 13));
    h = mullo_lanes_u32(h, _mm_set1_epi32(C5_32 as i32));
    _mm_xor_si128(h, _mm_srli_epi32(h, 16))
}

/// XOR all four 32-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u32(v: __m128i) -> u32 {
    let v = _mm_xor_si128(v, _mm_srli_si128(v, 8));
    let v = _mm_xor_si128(v, _mm_srli_si128(v, 4));
    _mm_cvtsi128_si32(v) as u32
}

// =============================================================================
// 64-BIT LANE PRIMITIVES
// =============================================================================

/// Rotate each 64-bit lane left by 31 (block-value rotation).
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn rotl64_lanes_31(v: __m128i) -> __m128i {
    _mm_or_si128(_mm_slli_epi64(v, 31), _mm_srli_epi64(v, 33))
}

/// Rotate each 64-bit lane left by 27 (accumulator rotation).
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn rotl64_lanes_27(v: __m128i) -> __m128i {
    _mm_or_si128(_mm_slli_epi64(v, 27), _mm_srli_epi64(v, 37))
}

/// One block round over two independent 64-bit lanes.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn round64_lanes(h: __m128i, block: __m128i) -> __m128i {
    let mut k = mul_lanes_u64(block, _mm_set1_epi64x(C1_64 as i64));
    k = rotl64_lanes_31(k);
    k = mul_lanes_u64(k, _mm_set1_epi64x(C2_64 as i64));
    let h = rotl64_lanes_27(_mm_xor_si128(h, k));
    _mm_add_epi64(
        _mm_add_epi64(_mm_slli_epi64(h, 2), h),
        _mm_set1_epi64x(C3_64 as i64),
    )
}

/// Per-lane avalanche finalizer.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn avalanche64_lanes(mut h: __m128i) -> __m128i {
    h = _mm_xor_si128(h, _mm_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm_set1_epi64x(C4_64 as i64));
    h = _mm_xor_si128(h, _mm_srli_epi64(h, 33));
    h = mul_lanes_u64(h, _mm_set1_epi64x(C5_64 as i64));
    _mm_xor_si128(h, _mm_srli_epi64(h, 33))
}

/// XOR both 64-bit lanes down to one scalar.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[inline]
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
unsafe fn fold_lanes_u64(v: __m128i) -> u64 {
    let v = _mm_xor_si128(v, _mm_srli_si128(v, 8));
    _mm_cvtsi128_si64(v) as u64
}

// =============================================================================
// KERNELS
// =============================================================================

/// Hash `input` into a 32-bit digest using four SSE2 lanes.
///
/// Inputs shorter than one 16-byte register block delegate to the scalar
/// kernel, so lane parallelism degenerates to a single lane there.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    if input.len() < BLOCK_32 {
        return scalar::hash32(input, seed);
    }
    let padded = block::format(input, BLOCK_32, 4)?;
    let mut acc = _mm_set1_epi32(seed as i32);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_32) {
        // SAFETY: chunks_exact yields 16 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm_loadu_si128(chunk.as_ptr().cast());
        acc = round32_lanes(acc, block);
    }
    acc = _mm_xor_si128(acc, _mm_set1_epi32(input.len() as u32 as i32));
    acc = avalanche32_lanes(acc);
    Ok(fold_lanes_u32(acc))
}

/// Hash `input` into a 64-bit digest using two SSE2 lanes.
///
/// Inputs shorter than one 16-byte register block delegate to the scalar
/// kernel.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
///
/// # Safety
/// Caller must ensure the CPU supports SSE2.
#[target_feature(enable = "sse2")]
#[allow(unsafe_code)]
pub unsafe fn hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    if input.len() < BLOCK_64 {
        return scalar::hash64(input, seed);
    }
    let padded = block::format(input, BLOCK_64, 8)?;
    let mut acc = _mm_set1_epi64x(seed as i64);
    for chunk in padded.as_bytes().chunks_exact(BLOCK_64) {
        // SAFETY: chunks_exact yields 16 readable bytes; loadu has no
        // alignment requirement.
        let block = _mm_loadu_si128(chunk.as_ptr().cast());
        acc = round64_lanes(acc, block);
    }
    acc = _mm_xor_si128(acc, _mm_set1_epi64x(input.len() as i64));
    acc = avalanche64_lanes(acc);
    Ok(fold_lanes_u64(acc))
}

// =============================================================================
// TESTS
// =============================================================================
