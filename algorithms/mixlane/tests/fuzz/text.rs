use std::ffi::CString;

use bolero::check;

#[test]
fn fuzz_text_adapter_matches_byte_api() {
    check!().with_type::<(Vec<u8>, u32)>().for_each(|(data, seed)| {
        // The text adapter sees bytes up to the terminator, so feed it a
        // NUL-free copy and demand agreement with the explicit-length API.
        let stripped: Vec<u8> = data.iter().copied().filter(|&b| b != 0).collect();
        let text = CString::new(stripped.clone()).unwrap();
        assert_eq!(
            mixlane::hash32_from_text(&text, *seed).unwrap(),
            mixlane::hash32(&stripped, *seed).unwrap()
        );
    });
}
