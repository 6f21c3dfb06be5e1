//! Caps Command
//!
//! Report processor capabilities, the backend the dispatcher selected, and a
//! pair of sample digests produced through it.

use anyhow::Result;
use mixlane::Capabilities;

/// Reference input for the sample digest printout.
const SAMPLE: &[u8] = b"efzuhp|salkjnd2passahnf2adasd!ash-dn2jn1jk_d.sakdj";
const SAMPLE_SEED: u64 = 0xE4FC_C32B;

const TIERS: [(&str, &[(u32, &str)]); 4] = [
    (
        "SIMD64:",
        &[(Capabilities::MMX, "MMX"), (Capabilities::X64, "x64")],
    ),
    (
        "SIMD128:",
        &[
            (Capabilities::SSE, "SSE"),
            (Capabilities::SSE2, "SSE2"),
            (Capabilities::SSE3, "SSE3"),
            (Capabilities::SSSE3, "SSSE3"),
            (Capabilities::SSE41, "SSE4.1"),
            (Capabilities::SSE42, "SSE4.2"),
            (Capabilities::SSE4A, "SSE4a"),
        ],
    ),
    (
        "SIMD256:",
        &[
            (Capabilities::AVX, "AVX"),
            (Capabilities::AVX2, "AVX2"),
            (Capabilities::FMA, "FMA"),
        ],
    ),
    ("SIMD512:", &[(Capabilities::AVX512F, "AVX-512F")]),
];

/// Print the capability report.
pub fn caps_mode() -> Result<()> {
    let caps = mixlane::capabilities();

    println!("Processor capabilities (0x{:04x}):", caps.bits());
    for (tier, flags) in TIERS {
        let detected: Vec<&str> = flags
            .iter()
            .filter(|(bit, _)| caps.has(*bit))
            .map(|(_, name)| *name)
            .collect();
        let line = if detected.is_empty() {
            "(none)".to_string()
        } else {
            detected.join(" ")
        };
        println!("  {tier:<9} {line}");
    }
    println!("Active backend: {}", mixlane::active_backend());

    let d32 = mixlane::hash32(SAMPLE, SAMPLE_SEED as u32)?;
    let d64 = mixlane::hash64(SAMPLE, SAMPLE_SEED)?;
    println!();
    println!("Sample digests (seed 0x{SAMPLE_SEED:X}):");
    println!("  32-bit: {d32:08x}");
    println!("  64-bit: {d64:016x}");

    Ok(())
}
