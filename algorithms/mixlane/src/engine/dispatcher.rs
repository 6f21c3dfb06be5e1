//! Hardware dispatcher.
//!
//! Selects the widest vector kernel the capability snapshot reports, falling
//! back to the scalar reference kernels. Selection takes the snapshot as an
//! argument so tests can drive the policy with synthetic flag sets; callers
//! obtain one snapshot and never re-probe mid-call.

use crate::caps::Capabilities;
use crate::kernels::scalar;
#[cfg(target_arch = "x86_64")]
use crate::types::Error;
use crate::types::{Hash32Fn, Hash64Fn};

// =============================================================================
// SAFE KERNEL WRAPPERS
// =============================================================================
// `#[target_feature]` functions cannot coerce to plain fn pointers, so each
// vector kernel gets a safe wrapper that the selection functions hand out.

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn sse2_hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    // SAFETY: handed out only when the snapshot reports SSE2.
    unsafe { crate::kernels::sse2::hash32(input, seed) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn sse2_hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    // SAFETY: handed out only when the snapshot reports SSE2.
    unsafe { crate::kernels::sse2::hash64(input, seed) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn avx2_hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    // SAFETY: handed out only when the snapshot reports AVX2.
    unsafe { crate::kernels::avx2::hash32(input, seed) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn avx2_hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    // SAFETY: handed out only when the snapshot reports AVX2.
    unsafe { crate::kernels::avx2::hash64(input, seed) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn avx512_hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    // SAFETY: handed out only when the snapshot reports AVX-512F.
    unsafe { crate::kernels::avx512::hash32(input, seed) }
}

#[cfg(target_arch = "x86_64")]
#[inline]
#[allow(unsafe_code)]
fn avx512_hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    // SAFETY: handed out only when the snapshot reports AVX-512F.
    unsafe { crate::kernels::avx512::hash64(input, seed) }
}

// =============================================================================
// SELECTION
// =============================================================================

/// Choose the 32-bit kernel for a capability snapshot.
///
/// Priority: wide (AVX-512F) > medium (AVX2) > narrow (SSE2) > scalar. A
/// backend is eligible only if it is compiled in for the target and its flag
/// is reported; missing flags demote, they never fail.
#[must_use]
#[cfg_attr(not(target_arch = "x86_64"), allow(unused_variables))]
pub const fn select_hash32(caps: Capabilities) -> Hash32Fn {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.wide_vector() {
            return avx512_hash32;
        }
        if caps.medium_vector() {
            return avx2_hash32;
        }
        if caps.narrow_vector() {
            return sse2_hash32;
        }
    }
    scalar::hash32
}

/// Choose the 64-bit kernel for a capability snapshot.
///
/// Same priority order as [`select_hash32`]; the selected tier is
/// width-independent.
#[must_use]
#[cfg_attr(not(target_arch = "x86_64"), allow(unused_variables))]
pub const fn select_hash64(caps: Capabilities) -> Hash64Fn {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.wide_vector() {
            return avx512_hash64;
        }
        if caps.medium_vector() {
            return avx2_hash64;
        }
        if caps.narrow_vector() {
            return sse2_hash64;
        }
    }
    scalar::hash64
}

/// Human-readable name of the tier the snapshot selects.
#[must_use]
#[cfg_attr(not(target_arch = "x86_64"), allow(unused_variables))]
pub const fn backend_name(caps: Capabilities) -> &'static str {
    #[cfg(target_arch = "x86_64")]
    {
        if caps.wide_vector() {
            return "wide (avx512)";
        }
        if caps.medium_vector() {
            return "medium (avx2)";
        }
        if caps.narrow_vector() {
            return "narrow (sse2)";
        }
    }
    "scalar"
}

// =============================================================================
// TESTS
// =============================================================================
