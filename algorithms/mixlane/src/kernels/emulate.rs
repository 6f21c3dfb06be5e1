//! Shared lane-arithmetic emulation.
//!
//! None of SSE2, AVX2, or AVX-512F has a 64x64 -> low-64 per-lane multiply,
//! so every vector backend assembles it from the same three 32-bit partial
//! products. The construction is written once here and instantiated per
//! register width, keeping the backends from growing diverging copies.

/// Define a `mul_lanes_u64` helper for one register type.
///
/// Expands to a `#[target_feature]` function computing, per 64-bit lane,
/// `lo*lo + ((hi*lo + lo*hi) << 32)` — the low 64 bits of the full product.
macro_rules! define_mul_lanes_u64 {
    ($feature:literal, $reg:ty, $mul_epu32:ident, $srli_epi64:ident, $slli_epi64:ident, $add_epi64:ident) => {
        /// Per-lane 64x64 -> low-64 multiply from 32-bit partial products.
        ///
        /// # Safety
        /// The caller must ensure the CPU supports the enabled target feature.
        #[inline]
        #[target_feature(enable = $feature)]
        #[allow(unsafe_code)]
        #[allow(clippy::similar_names)]
        unsafe fn mul_lanes_u64(a: $reg, b: $reg) -> $reg {
            let lo_lo = $mul_epu32(a, b);
            let a_hi = $srli_epi64(a, 32);
            let b_hi = $srli_epi64(b, 32);
            let hi_lo = $mul_epu32(a_hi, b);
            let lo_hi = $mul_epu32(a, b_hi);
            let cross = $slli_epi64($add_epi64(hi_lo, lo_hi), 32);
            $add_epi64(lo_lo, cross)
        }
    };
}

pub(crate) use define_mul_lanes_u64;
