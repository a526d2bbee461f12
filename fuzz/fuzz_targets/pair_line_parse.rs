//! Fuzz target for single-line pair parsing.
//!
//! This fuzzer feeds arbitrary UTF-8 lines to the plain-lines parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use libfuzzer_sys::fuzz_target;
use scoremap::data::io_lines::fuzz_parse_pair_line;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let Ok(line) = std::str::from_utf8(data) else {
        return;
    };

    let _ = fuzz_parse_pair_line(line);
});
