//! Generator for the frozen digest vectors
//!
//! Emits the JSON consumed by `tests/vectors.rs` to stdout. Every backend
//! column must be filled, so this must run on a processor with AVX-512F.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]
#![allow(unsafe_code)]

#[cfg(not(target_arch = "x86_64"))]
fn main() {
    eprintln!("vector generation needs an x86-64 processor with AVX-512F");
    std::process::exit(1);
}

#[cfg(target_arch = "x86_64")]
fn main() {
    use mixlane::kernels::{avx2, avx512, scalar, sse2};
    use serde_json::json;

    if !is_x86_feature_detected!("avx512f") {
        eprintln!("vector generation needs AVX-512F: every backend column must be filled");
        std::process::exit(1);
    }

    let named_inputs: Vec<(&str, Vec<u8>)> = vec![
        ("empty", Vec::new()),
        ("single_byte", b"a".to_vec()),
        ("abc", b"abc".to_vec()),
        ("one_word", b"abcd".to_vec()),
        ("hello", b"hello world".to_vec()),
        ("fifteen", (0u8..15).collect()),
        ("one_sse_block", (0u8..16).collect()),
        ("seventeen", (0u8..17).collect()),
        ("thirty_one", (0u8..31).collect()),
        ("one_avx2_block", (0u8..32).collect()),
        ("thirty_three", (0u8..33).collect()),
        ("sixty_three", (0u8..63).collect()),
        ("one_avx512_block", (0u8..64).collect()),
        ("sixty_five", (0u8..65).collect()),
        (
            "harness_string",
            b"efzuhp|salkjnd2passahnf2adasd!ash-dn2jn1jk_d.sakdj".to_vec(),
        ),
        ("pattern_256", (0u8..=255).collect()),
        ("kilobyte_a", vec![b'A'; 1024]),
    ];

    let mut vectors = Vec::new();
    for (name, data) in &named_inputs {
        for (tag, seed32, seed64) in [
            ("zero", 0u32, 0u64),
            ("seeded", 0x9747_B28C_u32, 0xE4FC_C32B_u64),
        ] {
            // SAFETY: AVX-512F implies AVX2 and SSE2; presence checked above.
            let entry = unsafe {
                json!({
                    "name": format!("{name}_{tag}"),
                    "input": name,
                    "seed32": format!("{seed32:08x}"),
                    "seed64": format!("{seed64:016x}"),
                    "hash32": {
                        "scalar": format!("{:08x}", scalar::hash32(data, seed32).unwrap()),
                        "sse2": format!("{:08x}", sse2::hash32(data, seed32).unwrap()),
                        "avx2": format!("{:08x}", avx2::hash32(data, seed32).unwrap()),
                        "avx512": format!("{:08x}", avx512::hash32(data, seed32).unwrap()),
                    },
                    "hash64": {
                        "scalar": format!("{:016x}", scalar::hash64(data, seed64).unwrap()),
                        "sse2": format!("{:016x}", sse2::hash64(data, seed64).unwrap()),
                        "avx2": format!("{:016x}", avx2::hash64(data, seed64).unwrap()),
                        "avx512": format!("{:016x}", avx512::hash64(data, seed64).unwrap()),
                    },
                })
            };
            vectors.push(entry);
        }
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
