#![no_main]

use libfuzzer_sys::fuzz_target;
use sdlog2_types::MessageDescriptor;

// Fuzz target: FORMAT payload parsing.
//
// Catches bugs in:
// - Wrong payload lengths
// - Non-UTF-8 name/format/label bytes
// - Unknown format codes
// - Label/field count mismatches
fuzz_target!(|data: &[u8]| {
    let _ = MessageDescriptor::from_format_payload(data);
});
