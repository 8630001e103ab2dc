#![no_main]

use libfuzzer_sys::fuzz_target;
use sdlog2_decoder::{decode_slice, DecoderConfig};

// Fuzz target: error-correcting decode of arbitrary bytes.
//
// With correction enabled the decoder must never panic or loop: every
// iteration either consumes a whole message, advances at least one
// byte, or fails with an error (undeclared type ids stay fatal).
fuzz_target!(|data: &[u8]| {
    let config = DecoderConfig::new()
        .correct_errors(true)
        .time_message("TIME");
    let _ = decode_slice(data, config);
});
