#![no_main]

use std::ffi::CString;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The text adapter stops at the first NUL, so compare on a NUL-free copy.
    let stripped: Vec<u8> = data.iter().copied().filter(|&b| b != 0).collect();
    let text = CString::new(stripped.clone()).unwrap();

    assert_eq!(
        mixlane::hash32_from_text(&text, 0xE4FC_C32B).unwrap(),
        mixlane::hash32(&stripped, 0xE4FC_C32B).unwrap(),
        "text adapter diverged from the byte API"
    );
});
