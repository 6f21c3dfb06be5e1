//! Mixing constants shared by every kernel of a digest width.
//!
//! These are the public `MurmurHash3` parameter sets (x86 32-bit and x64
//! 128-bit finalization constants). Each width has one set; scalar and vector
//! kernels of that width must use the same values, otherwise the single-word
//! agreement guarantee breaks.

// =============================================================================
// 32-BIT FAMILY
// =============================================================================

/// First block multiplier.
pub const C1_32: u32 = 0xCC9E_2D51;
/// Second block multiplier.
pub const C2_32: u32 = 0x1B87_3593;
/// Additive round constant.
pub const C3_32: u32 = 0xE654_6B64;
/// First avalanche multiplier.
pub const C4_32: u32 = 0x85EB_CA6B;
/// Second avalanche multiplier.
pub const C5_32: u32 = 0xC2B2_AE35;
/// Block-value rotation.
pub const R1_32: u32 = 15;
/// Accumulator rotation.
pub const R2_32: u32 = 13;

// =============================================================================
// 64-BIT FAMILY
// =============================================================================

/// First block multiplier.
pub const C1_64: u64 = 0x87C3_7B91_1142_53D5;
/// Second block multiplier.
pub const C2_64: u64 = 0x4CF5_AD43_2745_937F;
/// Additive round constant.
pub const C3_64: u64 = 0x52DC_E729;
/// First avalanche multiplier.
pub const C4_64: u64 = 0xFF51_AFD7_ED55_8CCD;
/// Second avalanche multiplier.
pub const C5_64: u64 = 0xC4CE_B9FE_1A85_EC53;
/// Block-value rotation.
pub const R1_64: u32 = 31;
/// Accumulator rotation.
pub const R2_64: u32 = 27;
