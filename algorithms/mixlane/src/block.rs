//! Padded block formatting.
//!
//! Kernels never read caller memory directly: the input is first copied into
//! a transient buffer rounded up to a whole number of kernel blocks, with the
//! tail zero-filled. Empty input still yields one all-zero block so every
//! kernel runs its mixing loop at least once.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::types::Error;

/// Zero-extended copy of a caller buffer, sized to a multiple of the
/// requesting kernel's block size.
pub struct PaddedBlocks {
    buf: Vec<u8>,
}

impl PaddedBlocks {
    /// The padded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

/// Copy `input` into a fresh buffer of `block_bytes`-sized blocks.
///
/// `word_bytes` is the lane word size the kernel will load; under the
/// `big-endian` feature each word-sized group is reversed during the copy, so
/// the byte-order switch lives here and nowhere else.
///
/// # Errors
/// [`Error::Allocation`] if the buffer cannot be reserved. Content never
/// fails.
pub fn format(input: &[u8], block_bytes: usize, word_bytes: usize) -> Result<PaddedBlocks, Error> {
    debug_assert!(block_bytes % word_bytes == 0);

    // Slices are capped at isize::MAX bytes, so rounding up cannot overflow.
    let mut padded_len = input.len().div_ceil(block_bytes) * block_bytes;
    if padded_len == 0 {
        padded_len = block_bytes;
    }

    let mut buf = Vec::new();
    buf.try_reserve_exact(padded_len).map_err(|_| Error::Allocation { bytes: padded_len })?;
    buf.extend_from_slice(input);
    buf.resize(padded_len, 0);

    #[cfg(feature = "big-endian")]
    for word in buf.chunks_exact_mut(word_bytes) {
        word.reverse();
    }

    Ok(PaddedBlocks { buf })
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_forms_one_zero_block() {
        let padded = format(&[], 16, 4).unwrap();
        assert_eq!(padded.as_bytes(), &[0u8; 16]);
    }

    #[test]
    fn exact_multiple_is_not_extended() {
        let input = [7u8; 32];
        let padded = format(&input, 16, 4).unwrap();
        assert_eq!(padded.as_bytes().len(), 32);
        assert_eq!(&padded.as_bytes()[..32], &input);
    }

    #[test]
    fn tail_is_zero_filled() {
        let input = [0xAAu8; 5];
        let padded = format(&input, 16, 4).unwrap();
        assert_eq!(padded.as_bytes().len(), 16);
        assert_eq!(&padded.as_bytes()[..5], &input);
        assert!(padded.as_bytes()[5..].iter().all(|&b| b == 0));
    }

    #[test]
    fn length_is_always_a_block_multiple() {
        let backing = [1u8; 70];
        for len in 0..=backing.len() {
            let input = &backing[..len];
            for block in [4, 8, 16, 32, 64] {
                let padded = format(input, block, 4).unwrap();
                assert_eq!(padded.as_bytes().len() % block, 0, "len={len} block={block}");
                assert!(padded.as_bytes().len() >= input.len());
                assert!(!padded.as_bytes().is_empty());
            }
        }
    }

    #[cfg(feature = "big-endian")]
    #[test]
    fn big_endian_reverses_each_word() {
        let input = [1u8, 2, 3, 4, 5];
        let padded = format(&input, 8, 4).unwrap();
        assert_eq!(padded.as_bytes(), &[4, 3, 2, 1, 0, 0, 0, 5]);
    }
}
