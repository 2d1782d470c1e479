//! Fuzz target for integer table parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the integer table parser,
//! checking for panics (notably on ragged rows), crashes, or hangs.

#![no_main]

use framemetrics::table::int_rows_from_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = int_rows_from_slice(data);
});
