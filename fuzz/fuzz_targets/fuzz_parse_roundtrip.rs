#![no_main]

use std::str::FromStr;

use libfuzzer_sys::fuzz_target;

use decint_core::Integer;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Cap at 4096 digits for speed
    if text.len() > 4096 {
        return;
    }

    if let Ok(value) = Integer::from_str(text) {
        let canonical = value.to_string();
        assert!(canonical == "0" || !canonical.starts_with('0'));

        let reparsed = Integer::from_str(&canonical).expect("canonical form must reparse");
        assert_eq!(reparsed, value);
        assert_eq!(reparsed.to_string(), canonical);
    }
});
