/// Implementation of `sdlog2 validate`.
///
/// Runs a full strict decode (no error correction) and reports either a
/// series of success checkmarks (`✓`) or a diagnostic failure line (`✗`).
/// The command exits with code 0 on a valid file and code 1 on any error
/// (the main dispatcher in `main.rs` converts `Err` to exit code 1).
///
/// # Success output
///
/// ```text
/// ✓ Headers: every message starts with the 0xA3 0x95 magic pair
/// ✓ Schema: 14 message types declared before use
/// ✓ Records: 48211 records decoded without error
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: bad message header at offset 1032 — found [FF, 0x95]
/// ```
///
/// A trailing partial message is not a failure; the sdlog2 writer
/// truncates mid-message on power loss as a matter of course.
use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{Context, Result, anyhow};
use sdlog2_decoder::{CHUNK_SIZE, DecodeError, DecoderConfig, LogDecoder};

use crate::ValidateArgs;

/// Run the `sdlog2 validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or if the stream fails
/// any structural check.
pub fn run(args: &ValidateArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let mut reader = BufReader::new(file);

    let mut decoder = LogDecoder::new(DecoderConfig::new());
    let mut chunk = vec![0u8; CHUNK_SIZE];
    let outcome = loop {
        let n = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) => break Err(DecodeError::Io(e)),
        };
        if n == 0 {
            break Ok(());
        }
        if let Err(e) = decoder.push_chunk(&chunk[..n]) {
            break Err(e);
        }
    };

    match outcome {
        Ok(()) => {
            let declared = decoder.registry().declared_names().len();
            let log = decoder.finish();
            println!("✓ Headers: every message starts with the 0xA3 0x95 magic pair");
            println!(
                "✓ Schema: {declared} message type{} declared before use",
                if declared == 1 { "" } else { "s" }
            );
            let records: usize = log
                .messages()
                .values()
                .map(|columns| columns.values().next().map_or(0, Vec::len))
                .sum();
            println!(
                "✓ Records: {records} record{} decoded without error",
                if records == 1 { "" } else { "s" }
            );
            Ok(())
        }

        Err(e) => {
            let diagnostic = decode_error_diagnostic(&e);
            println!("✗ Error: {diagnostic}");
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a [`DecodeError`] into a human-readable diagnostic string.
///
/// ```text
/// ┌─────────────────────┬─────────────────────────────────────────────┐
/// │ DecodeError variant │ Diagnostic message                          │
/// ├─────────────────────┼─────────────────────────────────────────────┤
/// │ InvalidHeader       │ "bad message header at offset N — ..."      │
/// │ UnknownMessageType  │ "data for undeclared type 0xNN at ..."      │
/// │ Type / Wire / Io    │ "<error Display>"                           │
/// └─────────────────────┴─────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::InvalidHeader { offset, found } => {
            format!("bad message header at offset {offset} — found {found:02X?}")
        }
        DecodeError::UnknownMessageType { msg_type, offset } => {
            format!("data for undeclared message type 0x{msg_type:02X} at offset {offset}")
        }
        other => other.to_string(),
    }
}
