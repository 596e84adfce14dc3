#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Words must be non-empty, space-free slices of the input
    for word in docsearch::utils::split_into_words(data) {
        assert!(!word.is_empty());
        assert!(!word.contains(&b' '));
    }
});
