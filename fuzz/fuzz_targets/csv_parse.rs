//! Fuzz target for box CSV parsing.
//!
//! This fuzzer feeds arbitrary byte sequences to the box CSV parser,
//! checking for panics, crashes, or hangs.

#![no_main]

use boxmerge::ir::io_csv::from_csv_slice;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 10 * 1024 * 1024 {
        return;
    }

    let _ = from_csv_slice(data);
});
