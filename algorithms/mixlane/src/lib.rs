#![cfg_attr(not(feature = "std"), no_std)]

//! # Mixlane
//!
//! Fast, deterministic, non-cryptographic hashing with 32- and 64-bit
//! digests, dispatched at runtime across lane-parallel SIMD backends
//! (SSE2 / AVX2 / AVX-512F) with a scalar fallback. The mixing structure is
//! the public `MurmurHash3` one; the vector backends run it over independent
//! register lanes and fold at finalization.

//! # Usage
//! ```rust
//! // 1. Fixed-width digests
//! let d32 = mixlane::hash32(b"Performance Matters", 0)?;
//! let d64 = mixlane::hash64(b"Performance Matters", 0)?;
//!
//! // 2. Width chosen at run time
//! let wide = mixlane::compute(b"Performance Matters", 0, 64)?;
//! assert_eq!(wide, d64);
//!
//! // 3. Inspect the dispatch decision
//! println!("backend: {}", mixlane::active_backend());
//! for flag in mixlane::capabilities().names() {
//!     println!("  {flag}");
//! }
//! # Ok::<(), mixlane::Error>(())
//! ```
//!
//! Digests are stable for a given backend. Inputs no longer than one scalar
//! word (4 bytes at width 32, 8 at width 64) digest identically on every
//! backend; longer inputs may differ across backends because vector lanes
//! mix blocks independently.

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

mod block;
mod caps;
mod engine;
#[cfg(feature = "std")]
mod ffi;
// Kernels stay reachable for benchmarks and cross-backend tests, but are not
// part of the documented surface.
#[doc(hidden)]
pub mod kernels;
mod oneshot;
pub(crate) mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use caps::Capabilities;
pub use oneshot::{active_backend, capabilities, compute, hash32, hash32_from_text, hash64};
pub use types::Error;
