//! C ABI surface.
//!
//! Exposes the hashing entry points to C/C++ with pointer checks, a
//! `catch_unwind` panic boundary, and integer status codes. A null data
//! pointer with a zero byte length is a valid empty input; every other null
//! is rejected before any work happens.

#![allow(unsafe_code)]

use core::ffi::{c_char, c_int, c_uint};
use core::slice;
use std::ffi::CStr;
use std::panic::catch_unwind;

use crate::types::Error;

// =============================================================================
// STATUS CODES
// =============================================================================

/// Operation completed and the digest was written.
pub const MIXLANE_OK: c_int = 0;
/// Null pointer with a non-zero length, or byte-length overflow.
pub const MIXLANE_ERR_INVALID: c_int = -1;
/// A panic was caught at the language boundary.
pub const MIXLANE_ERR_PANIC: c_int = -2;
/// Digest width other than 32 or 64.
pub const MIXLANE_ERR_WIDTH: c_int = -3;
/// Block buffer allocation failed.
pub const MIXLANE_ERR_ALLOC: c_int = -4;

const fn status_of(err: Error) -> c_int {
    match err {
        Error::Allocation { .. } => MIXLANE_ERR_ALLOC,
        Error::UnsupportedWidth { .. } => MIXLANE_ERR_WIDTH,
        Error::InvalidInput => MIXLANE_ERR_INVALID,
    }
}

// =============================================================================
// ONE-SHOT API
// =============================================================================

/// Hash `length` elements of `element_size` bytes each into a 32-bit digest.
///
/// The hashed byte count is `length * element_size`, checked for overflow.
///
/// # Safety
/// - `data` must be readable for `length * element_size` bytes, or null with
///   a zero byte count.
/// - `out` must be writable.
///
/// # Returns
/// `0` on success, `-1` invalid argument, `-2` panic caught, `-4` allocation
/// failure.
#[no_mangle]
pub unsafe extern "C" fn mixlane_hash32(
    data: *const u8,
    length: usize,
    element_size: usize,
    seed: u32,
    out: *mut u32,
) -> c_int {
    if out.is_null() {
        return MIXLANE_ERR_INVALID;
    }
    let Some(bytes) = length.checked_mul(element_size) else {
        return MIXLANE_ERR_INVALID;
    };
    if data.is_null() && bytes != 0 {
        return MIXLANE_ERR_INVALID;
    }
    let input = if bytes == 0 {
        &[][..]
    } else {
        // SAFETY: non-null per the check above; readable per the contract.
        slice::from_raw_parts(data, bytes)
    };
    match catch_unwind(|| crate::hash32(input, seed)) {
        Ok(Ok(digest)) => {
            out.write(digest);
            MIXLANE_OK
        }
        Ok(Err(err)) => status_of(err),
        Err(_) => MIXLANE_ERR_PANIC,
    }
}

/// Hash a NUL-terminated string into a 32-bit digest.
///
/// A null `text` hashes the empty string.
///
/// # Safety
/// - A non-null `text` must point to a NUL-terminated allocation.
/// - `out` must be writable.
///
/// # Returns
/// `0` on success, `-1` invalid argument, `-2` panic caught, `-4` allocation
/// failure.
#[no_mangle]
pub unsafe extern "C" fn mixlane_hash32_text(
    text: *const c_char,
    seed: u32,
    out: *mut u32,
) -> c_int {
    if out.is_null() {
        return MIXLANE_ERR_INVALID;
    }
    let input = if text.is_null() {
        &[][..]
    } else {
        // SAFETY: non-null and NUL-terminated per the contract.
        CStr::from_ptr(text).to_bytes()
    };
    match catch_unwind(|| crate::hash32(input, seed)) {
        Ok(Ok(digest)) => {
            out.write(digest);
            MIXLANE_OK
        }
        Ok(Err(err)) => status_of(err),
        Err(_) => MIXLANE_ERR_PANIC,
    }
}

/// Hash `length` bytes into a 64-bit digest.
///
/// # Safety
/// - `data` must be readable for `length` bytes, or null with `length == 0`.
/// - `out` must be writable.
///
/// # Returns
/// `0` on success, `-1` invalid argument, `-2` panic caught, `-4` allocation
/// failure.
#[no_mangle]
pub unsafe extern "C" fn mixlane_hash64(
    data: *const u8,
    length: usize,
    seed: u64,
    out: *mut u64,
) -> c_int {
    if out.is_null() || (data.is_null() && length != 0) {
        return MIXLANE_ERR_INVALID;
    }
    let input = if length == 0 {
        &[][..]
    } else {
        // SAFETY: non-null per the check above; readable per the contract.
        slice::from_raw_parts(data, length)
    };
    match catch_unwind(|| crate::hash64(input, seed)) {
        Ok(Ok(digest)) => {
            out.write(digest);
            MIXLANE_OK
        }
        Ok(Err(err)) => status_of(err),
        Err(_) => MIXLANE_ERR_PANIC,
    }
}

/// Hash `length` bytes into a digest of `width` bits (32 or 64).
///
/// A 32-bit digest is zero-extended into `out`.
///
/// # Safety
/// - `data` must be readable for `length` bytes, or null with `length == 0`.
/// - `out` must be writable.
///
/// # Returns
/// `0` on success, `-1` invalid argument, `-2` panic caught, `-3` unsupported
/// width, `-4` allocation failure.
#[no_mangle]
pub unsafe extern "C" fn mixlane_compute(
    data: *const u8,
    length: usize,
    seed: u64,
    width: u32,
    out: *mut u64,
) -> c_int {
    if out.is_null() || (data.is_null() && length != 0) {
        return MIXLANE_ERR_INVALID;
    }
    let input = if length == 0 {
        &[][..]
    } else {
        // SAFETY: non-null per the check above; readable per the contract.
        slice::from_raw_parts(data, length)
    };
    match catch_unwind(|| crate::compute(input, seed, width)) {
        Ok(Ok(digest)) => {
            out.write(digest);
            MIXLANE_OK
        }
        Ok(Err(err)) => status_of(err),
        Err(_) => MIXLANE_ERR_PANIC,
    }
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Capability flag bits reported for this processor.
///
/// Bit assignments match the `Capabilities` constants on the Rust side.
#[no_mangle]
pub extern "C" fn mixlane_capabilities() -> c_uint {
    crate::capabilities().bits()
}

/// Name of the selected backend tier as a NUL-terminated string.
///
/// The pointer refers to a static string and stays valid for the process
/// lifetime.
#[no_mangle]
pub extern "C" fn mixlane_backend_name() -> *const c_char {
    let name: &'static CStr = match crate::active_backend() {
        "wide (avx512)" => c"wide (avx512)",
        "medium (avx2)" => c"medium (avx2)",
        "narrow (sse2)" => c"narrow (sse2)",
        _ => c"scalar",
    };
    name.as_ptr()
}
