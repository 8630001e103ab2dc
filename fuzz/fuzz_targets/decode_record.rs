#![no_main]

use libfuzzer_sys::fuzz_target;
use sdlog2_decoder::record::decode_record;
use sdlog2_types::MessageDescriptor;

// Fuzz target: record decoding against a fuzzer-chosen descriptor.
//
// Input format:
//   bytes 0..86: FORMAT payload defining the descriptor
//   bytes 86..:  record payload to decode against it
//
// Catches bugs in:
// - Field cursor arithmetic (overlap, overflow)
// - Scale application
// - Fixed-width string extraction
// - Short-payload handling
fuzz_target!(|data: &[u8]| {
    if data.len() < 86 {
        return;
    }
    let (format, record) = data.split_at(86);
    if let Ok(descr) = MessageDescriptor::from_format_payload(format) {
        let _ = decode_record(&descr, record);
    }
});
