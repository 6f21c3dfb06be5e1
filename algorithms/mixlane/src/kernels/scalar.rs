//! Reference scalar kernels.
//!
//! Plain integer renditions of the mixing algorithm, one per digest width.
//! These run on any target and serve as the correctness oracle for the vector
//! backends: whatever a vector kernel computes for a sub-block input must
//! match what these return.

#![allow(clippy::cast_possible_truncation)]

use crate::block;
use crate::kernels::constants::{
    C1_32, C1_64, C2_32, C2_64, C3_32, C3_64, C4_32, C4_64, C5_32, C5_64, R1_32, R1_64, R2_32,
    R2_64,
};
use crate::types::Error;

// =============================================================================
// MIXING PRIMITIVES
// =============================================================================

/// One block round: fold word `k` into accumulator `h`.
#[inline]
const fn round32(h: u32, k: u32) -> u32 {
    let k = k
        .wrapping_mul(C1_32)
        .rotate_left(R1_32)
        .wrapping_mul(C2_32);
    (h ^ k).rotate_left(R2_32).wrapping_mul(5).wrapping_add(C3_32)
}

#[inline]
const fn round64(h: u64, k: u64) -> u64 {
    let k = k
        .wrapping_mul(C1_64)
        .rotate_left(R1_64)
        .wrapping_mul(C2_64);
    (h ^ k).rotate_left(R2_64).wrapping_mul(5).wrapping_add(C3_64)
}

/// Avalanche finalizer: xor-shift / multiply cascade.
#[inline]
const fn avalanche32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(C4_32);
    h ^= h >> 13;
    h = h.wrapping_mul(C5_32);
    h ^ (h >> 16)
}

#[inline]
const fn avalanche64(mut h: u64) -> u64 {
    h ^= h >> 33;
    h = h.wrapping_mul(C4_64);
    h ^= h >> 33;
    h = h.wrapping_mul(C5_64);
    h ^ (h >> 33)
}

// =============================================================================
// KERNELS
// =============================================================================

/// Hash `input` into a 32-bit digest, one 4-byte word at a time.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
pub fn hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    let padded = block::format(input, 4, 4)?;
    let mut h = seed;
    for word in padded.as_bytes().chunks_exact(4) {
        h = round32(h, u32::from_le_bytes([word[0], word[1], word[2], word[3]]));
    }
    h ^= input.len() as u32;
    Ok(avalanche32(h))
}

/// Hash `input` into a 64-bit digest, one 8-byte word at a time.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
pub fn hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    let padded = block::format(input, 8, 8)?;
    let mut h = seed;
    for word in padded.as_bytes().chunks_exact(8) {
        h = round64(
            h,
            u64::from_le_bytes([
                word[0], word[1], word[2], word[3], word[4], word[5], word[6], word[7],
            ]),
        );
    }
    h ^= input.len() as u64;
    Ok(avalanche64(h))
}

// =============================================================================
// TESTS
// =============================================================================
