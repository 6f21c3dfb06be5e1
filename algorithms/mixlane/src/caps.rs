//! Processor capability probing.
//!
//! The probe produces an immutable [`Capabilities`] snapshot of the host's
//! vector-instruction support. Under `std` the snapshot is taken once per
//! process with CPUID-backed runtime detection and cached; without `std` it is
//! fixed at compile time from the enabled target features. Dispatch decisions
//! take the snapshot as an argument, so tests can inject synthetic ones.

#[cfg(feature = "std")]
use std::sync::OnceLock;

// =============================================================================
// CAPABILITY SNAPSHOT
// =============================================================================

/// Immutable set of instruction-set extensions reported for this processor.
///
/// Unknown or undetectable features read as absent, which only ever demotes
/// dispatch to a slower, still-correct kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    bits: u32,
}

impl Capabilities {
    /// MMX (64-bit multimedia registers).
    pub const MMX: u32 = 1 << 0;
    /// SSE (128-bit single-precision lanes).
    pub const SSE: u32 = 1 << 1;
    /// SSE2 (128-bit integer lanes).
    pub const SSE2: u32 = 1 << 2;
    /// SSE3.
    pub const SSE3: u32 = 1 << 3;
    /// Supplemental SSE3.
    pub const SSSE3: u32 = 1 << 4;
    /// SSE4.1.
    pub const SSE41: u32 = 1 << 5;
    /// SSE4.2.
    pub const SSE42: u32 = 1 << 6;
    /// SSE4a (AMD).
    pub const SSE4A: u32 = 1 << 7;
    /// AVX (256-bit single-precision lanes).
    pub const AVX: u32 = 1 << 8;
    /// AVX2 (256-bit integer lanes).
    pub const AVX2: u32 = 1 << 9;
    /// Fused multiply-add.
    pub const FMA: u32 = 1 << 10;
    /// AVX-512 Foundation (512-bit lanes).
    pub const AVX512F: u32 = 1 << 11;
    /// Native 64-bit integer arithmetic.
    pub const X64: u32 = 1 << 12;

    /// Snapshot with no features reported.
    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    /// Reconstruct a snapshot from raw flag bits.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Raw flag bits, as exposed through the C ABI.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Copy of the snapshot with `flag` added; for building synthetic
    /// snapshots in tests.
    #[must_use]
    pub const fn with(self, flag: u32) -> Self {
        Self {
            bits: self.bits | flag,
        }
    }

    /// Whether every bit of `flag` is reported.
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        self.bits & flag == flag
    }

    /// Narrow (128-bit) integer vectors are usable.
    #[must_use]
    pub const fn narrow_vector(self) -> bool {
        self.has(Self::SSE2)
    }

    /// Medium (256-bit) integer vectors are usable.
    #[must_use]
    pub const fn medium_vector(self) -> bool {
        self.has(Self::AVX2)
    }

    /// Wide (512-bit) integer vectors are usable.
    #[must_use]
    pub const fn wide_vector(self) -> bool {
        self.has(Self::AVX512F)
    }

    /// Names of all reported flags, in probe order, for diagnostics.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        FLAG_NAMES
            .iter()
            .filter(move |(flag, _)| self.has(*flag))
            .map(|(_, name)| *name)
    }
}

/// Flag/name table in probe order.
const FLAG_NAMES: [(u32, &str); 13] = [
    (Capabilities::MMX, "MMX"),
    (Capabilities::SSE, "SSE"),
    (Capabilities::SSE2, "SSE2"),
    (Capabilities::SSE3, "SSE3"),
    (Capabilities::SSSE3, "SSSE3"),
    (Capabilities::SSE41, "SSE4.1"),
    (Capabilities::SSE42, "SSE4.2"),
    (Capabilities::SSE4A, "SSE4a"),
    (Capabilities::AVX, "AVX"),
    (Capabilities::AVX2, "AVX2"),
    (Capabilities::FMA, "FMA"),
    (Capabilities::AVX512F, "AVX-512F"),
    (Capabilities::X64, "x64"),
];

// =============================================================================
// PROBING
// =============================================================================

/// Capability snapshot for the current process.
///
/// The first call performs the runtime probe; later calls return the cached
/// snapshot, so every dispatch decision in a process sees the same value.
#[cfg(feature = "std")]
#[must_use]
pub fn probe() -> Capabilities {
    static SNAPSHOT: OnceLock<Capabilities> = OnceLock::new();
    *SNAPSHOT.get_or_init(detect)
}

/// Capability snapshot for the current process.
///
/// Without `std` there is no runtime CPUID path, so the snapshot is fixed at
/// compile time from the enabled target features.
#[cfg(not(feature = "std"))]
#[must_use]
pub const fn probe() -> Capabilities {
    compiled()
}

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn detect() -> Capabilities {
    let mut caps = compiled();
    if is_x86_feature_detected!("mmx") {
        caps = caps.with(Capabilities::MMX);
    }
    if is_x86_feature_detected!("sse") {
        caps = caps.with(Capabilities::SSE);
    }
    if is_x86_feature_detected!("sse2") {
        caps = caps.with(Capabilities::SSE2);
    }
    if is_x86_feature_detected!("sse3") {
        caps = caps.with(Capabilities::SSE3);
    }
    if is_x86_feature_detected!("ssse3") {
        caps = caps.with(Capabilities::SSSE3);
    }
    if is_x86_feature_detected!("sse4.1") {
        caps = caps.with(Capabilities::SSE41);
    }
    if is_x86_feature_detected!("sse4.2") {
        caps = caps.with(Capabilities::SSE42);
    }
    if is_x86_feature_detected!("sse4a") {
        caps = caps.with(Capabilities::SSE4A);
    }
    if is_x86_feature_detected!("avx") {
        caps = caps.with(Capabilities::AVX);
    }
    if is_x86_feature_detected!("avx2") {
        caps = caps.with(Capabilities::AVX2);
    }
    if is_x86_feature_detected!("fma") {
        caps = caps.with(Capabilities::FMA);
    }
    if is_x86_feature_detected!("avx512f") {
        caps = caps.with(Capabilities::AVX512F);
    }
    caps
}

#[cfg(all(feature = "std", not(target_arch = "x86_64")))]
fn detect() -> Capabilities {
    compiled()
}

/// Flags knowable without a runtime probe: features the binary was compiled
/// to assume, plus the pointer-width-derived `x64` flag. MMX has no compile
/// time feature gate, so it is only ever reported by the runtime probe.
const fn compiled() -> Capabilities {
    let mut bits = 0;
    if cfg!(target_pointer_width = "64") {
        bits |= Capabilities::X64;
    }
    if cfg!(target_feature = "sse") {
        bits |= Capabilities::SSE;
    }
    if cfg!(target_feature = "sse2") {
        bits |= Capabilities::SSE2;
    }
    if cfg!(target_feature = "sse3") {
        bits |= Capabilities::SSE3;
    }
    if cfg!(target_feature = "ssse3") {
        bits |= Capabilities::SSSE3;
    }
    if cfg!(target_feature = "sse4.1") {
        bits |= Capabilities::SSE41;
    }
    if cfg!(target_feature = "sse4.2") {
        bits |= Capabilities::SSE42;
    }
    if cfg!(target_feature = "sse4a") {
        bits |= Capabilities::SSE4A;
    }
    if cfg!(target_feature = "avx") {
        bits |= Capabilities::AVX;
    }
    if cfg!(target_feature = "avx2") {
        bits |= Capabilities::AVX2;
    }
    if cfg!(target_feature = "fma") {
        bits |= Capabilities::FMA;
    }
    if cfg!(target_feature = "avx512f") {
        bits |= Capabilities::AVX512F;
    }
    Capabilities::from_bits(bits)
}

// =============================================================================
// TESTS
// =============================================================================
