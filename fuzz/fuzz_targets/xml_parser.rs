#![no_main]
use libfuzzer_sys::fuzz_target;
use xmlite::{parse, Config};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let first = parse(s);
        assert_eq!(first, parse(s));
    }
    let _ = xmlite::from_bytes_with_config(data, Config::new(64, 1 << 16));
});
