//! Public API layer.
//!
//! Thin front door over the dispatcher: every call takes the process-wide
//! capability snapshot, picks a kernel, and hashes. All entry points are pure
//! and safe to call concurrently.

#![allow(clippy::cast_possible_truncation)]

use core::ffi::CStr;

use crate::caps::{self, Capabilities};
use crate::engine::dispatcher;
use crate::types::Error;

/// Hash `input` into a 32-bit digest.
///
/// Deterministic for a given `(input, seed)` pair and backend; inputs of at
/// most one 4-byte word digest identically on every backend.
///
/// # Example
/// ```rust
/// let digest = mixlane::hash32(b"Performance Matters", 0)?;
/// assert_eq!(digest, mixlane::hash32(b"Performance Matters", 0)?);
/// # Ok::<(), mixlane::Error>(())
/// ```
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
#[inline]
pub fn hash32(input: &[u8], seed: u32) -> Result<u32, Error> {
    dispatcher::select_hash32(caps::probe())(input, seed)
}

/// Hash a NUL-terminated text into a 32-bit digest.
///
/// Adapter over [`hash32`]: the hashed bytes run up to, and exclude, the
/// terminator. For buffers with embedded NULs use the explicit-length entry
/// points.
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
#[inline]
pub fn hash32_from_text(text: &CStr, seed: u32) -> Result<u32, Error> {
    hash32(text.to_bytes(), seed)
}

/// Hash `input` into a 64-bit digest.
///
/// Deterministic for a given `(input, seed)` pair and backend; inputs of at
/// most one 8-byte word digest identically on every backend.
///
/// # Example
/// ```rust
/// let digest = mixlane::hash64(b"Performance Matters", 7)?;
/// assert_ne!(digest, mixlane::hash64(b"Performance Matters!", 7)?);
/// # Ok::<(), mixlane::Error>(())
/// ```
///
/// # Errors
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
#[inline]
pub fn hash64(input: &[u8], seed: u64) -> Result<u64, Error> {
    dispatcher::select_hash64(caps::probe())(input, seed)
}

/// Width-dynamic entry point: a 32- or 64-bit digest through one signature.
///
/// Width 32 uses the low 32 bits of `seed` and zero-extends the digest; any
/// other width than 32/64 is rejected, never approximated.
///
/// # Example
/// ```rust
/// let wide = mixlane::compute(b"data", 1, 64)?;
/// assert_eq!(wide, mixlane::hash64(b"data", 1)?);
/// # Ok::<(), mixlane::Error>(())
/// ```
///
/// # Errors
/// [`Error::UnsupportedWidth`] for widths other than 32 or 64;
/// [`Error::Allocation`] if the transient block buffer cannot be allocated.
pub fn compute(input: &[u8], seed: u64, width: u32) -> Result<u64, Error> {
    match width {
        32 => hash32(input, seed as u32).map(u64::from),
        64 => hash64(input, seed),
        _ => Err(Error::UnsupportedWidth { width }),
    }
}

/// The capability snapshot dispatch decisions are made from.
#[must_use]
pub fn capabilities() -> Capabilities {
    caps::probe()
}

/// Name of the backend tier selected on this processor.
#[must_use]
pub fn active_backend() -> &'static str {
    dispatcher::backend_name(caps::probe())
}
