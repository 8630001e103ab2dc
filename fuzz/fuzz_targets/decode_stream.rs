#![no_main]

use libfuzzer_sys::fuzz_target;
use sdlog2_decoder::{decode_slice, DecoderConfig};

// Fuzz target: strict whole-stream decoding of arbitrary bytes.
//
// Catches bugs in:
// - Header scanning on non-log input
// - FORMAT payload parsing from hostile streams
// - Declared-length handling (zero, shorter than the header, huge)
// - Trailing truncation at every possible byte position
fuzz_target!(|data: &[u8]| {
    let _ = decode_slice(data, DecoderConfig::new());
});
