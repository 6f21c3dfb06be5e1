use bolero::check;

#[test]
fn fuzz_width_dispatch_consistency() {
    check!().with_type::<(Vec<u8>, u64)>().for_each(|(data, seed)| {
        let d32 = mixlane::hash32(data, *seed as u32).unwrap();
        let d64 = mixlane::hash64(data, *seed).unwrap();

        // The width-dynamic entry point must agree with the fixed-width ones.
        assert_eq!(mixlane::compute(data, *seed, 32).unwrap(), u64::from(d32));
        assert_eq!(mixlane::compute(data, *seed, 64).unwrap(), d64);

        // And every call is a pure function of (input, seed).
        assert_eq!(mixlane::hash32(data, *seed as u32).unwrap(), d32);
        assert_eq!(mixlane::hash64(data, *seed).unwrap(), d64);
    });
}

#[test]
fn fuzz_word_sized_prefixes_match_scalar() {
    check!().with_type::<(Vec<u8>, u32)>().for_each(|(data, seed)| {
        // Inputs of at most one word digest identically on every backend, so
        // the dispatched result must equal the scalar reference.
        for len in 0..=data.len().min(4) {
            assert_eq!(
                mixlane::hash32(&data[..len], *seed).unwrap(),
                mixlane::kernels::scalar::hash32(&data[..len], *seed).unwrap(),
                "prefix {len}"
            );
        }
        for len in 0..=data.len().min(8) {
            assert_eq!(
                mixlane::hash64(&data[..len], u64::from(*seed)).unwrap(),
                mixlane::kernels::scalar::hash64(&data[..len], u64::from(*seed)).unwrap(),
                "prefix {len}"
            );
        }
    });
}
