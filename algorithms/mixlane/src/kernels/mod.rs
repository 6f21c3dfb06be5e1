//! Hashing kernels.
//!
//! One scalar reference pair plus three x86-64 vector backends, all built on
//! the same per-width mixing constants. The dispatcher decides which of these
//! actually runs.

#[cfg(target_arch = "x86_64")]
pub mod avx2;
#[cfg(target_arch = "x86_64")]
pub mod avx512;
pub mod constants;
#[cfg(target_arch = "x86_64")]
mod emulate;
pub mod scalar;
#[cfg(target_arch = "x86_64")]
pub mod sse2;
