#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // First four bytes pick the seed, the rest is the payload.
    let (seed, payload) = if data.len() >= 4 {
        let seed = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        (seed, &data[4..])
    } else {
        (0, data)
    };

    let d32 = mixlane::hash32(payload, seed).unwrap();
    let d64 = mixlane::hash64(payload, u64::from(seed)).unwrap();

    // One signature, two widths: must agree with the fixed-width calls.
    assert_eq!(
        mixlane::compute(payload, u64::from(seed), 32).unwrap(),
        u64::from(d32)
    );
    assert_eq!(mixlane::compute(payload, u64::from(seed), 64).unwrap(), d64);

    // Digests are a pure function of (input, seed).
    assert_eq!(mixlane::hash32(payload, seed).unwrap(), d32);
    assert_eq!(mixlane::hash64(payload, u64::from(seed)).unwrap(), d64);

    // Word-sized prefixes agree with the scalar reference on any backend.
    for len in 0..=payload.len().min(4) {
        assert_eq!(
            mixlane::hash32(&payload[..len], seed).unwrap(),
            mixlane::kernels::scalar::hash32(&payload[..len], seed).unwrap(),
            "word-sized prefix diverged from scalar"
        );
    }
});
