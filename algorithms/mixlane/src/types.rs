//! Shared types used across the mixlane library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified 32-bit kernel signature: `(input, seed) -> digest`.
///
/// Every backend (scalar, SSE2, AVX2, AVX-512F) implements this same shape so
/// the dispatcher can swap them at runtime behind one function pointer.
pub type Hash32Fn = fn(&[u8], u32) -> Result<u32, Error>;

/// Unified 64-bit kernel signature: `(input, seed) -> digest`.
pub type Hash64Fn = fn(&[u8], u64) -> Result<u64, Error>;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors reported by the hashing entry points.
///
/// Hashing never fails on content. The only failure sources are the transient
/// padded-block allocation and malformed requests at the width-dynamic and C
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The padded block buffer could not be allocated.
    Allocation {
        /// Size of the failed request in bytes.
        bytes: usize,
    },
    /// A digest width other than 32 or 64 bits was requested.
    UnsupportedWidth {
        /// The rejected width in bits.
        width: u32,
    },
    /// The caller described an impossible input: a null data pointer with a
    /// non-zero length, or a length that overflows when scaled to bytes.
    InvalidInput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Allocation { bytes } => {
                write!(f, "failed to allocate {bytes}-byte block buffer")
            }
            Self::UnsupportedWidth { width } => {
                write!(f, "unsupported digest width {width} (expected 32 or 64)")
            }
            Self::InvalidInput => write!(f, "invalid input description"),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}
