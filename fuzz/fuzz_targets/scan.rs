#![no_main]

use libfuzzer_sys::fuzz_target;
use strand_scan::{ScanError, Scanner};

fuzz_target!(|data: &[u8]| {
    // First byte picks the delimiter, the rest is the buffer
    let Some((&delim, rest)) = data.split_first() else {
        return;
    };
    let delim = char::from(delim);

    let mut through = Scanner::from_bytes(rest);
    let mut rebuilt = String::new();
    while !through.is_exhausted() {
        let before = through.position();
        let piece = through.read_through(delim).expect("read on a non-exhausted buffer");
        assert!(through.position() > before);
        assert!(through.position() <= through.len());
        rebuilt.push_str(&piece);
    }
    assert_eq!(rebuilt.chars().count(), rest.len());
    assert_eq!(through.read_char(), Err(ScanError::EndOfBuffer { position: rest.len() }));

    if let Ok(text) = std::str::from_utf8(rest) {
        let needle: String = text.chars().take(2).collect();
        let mut until = Scanner::new(text);
        while !until.is_exhausted() {
            let _ = until.read_until(needle.as_str());
        }
    }
});
