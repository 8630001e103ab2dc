/// Implementation of `sdlog2 inspect`.
///
/// Streams the log through the decoder and prints the schema it declared,
/// one line per message type in declaration order.
///
/// # Output format
///
/// ```text
/// Schema: 3 message types
/// 0x01 TIME  (len 11)  format=Q      labels=StartTime
/// 0x02 ATT   (len  9)  format=ccC    labels=Roll,Pitch,Yaw
/// 0x03 GPS   (len 23)  format=QLLf   labels=GPSTime,Lat,Lon,Alt
/// ```
use std::fs::File;
use std::io::{BufReader, Read};

use anyhow::{Context, Result};
use sdlog2_decoder::{CHUNK_SIZE, DecoderConfig, LogDecoder};

use crate::InspectArgs;

/// Run the `sdlog2 inspect` command.
///
/// Decodes the whole file with error correction enabled so a damaged tail
/// cannot hide the schema, then prints every registered descriptor.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a FORMAT message is
/// malformed.
pub fn run(args: &InspectArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let mut reader = BufReader::new(file);

    // Correction smooths over corrupt header bytes so a damaged tail
    // cannot hide the schema. Data before its FORMAT declaration is
    // still a structural error and is reported as such.
    let config = DecoderConfig::new().correct_errors(true);
    let mut decoder = LogDecoder::new(config);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader
            .read(&mut chunk)
            .with_context(|| format!("cannot read {}", args.file.display()))?;
        if n == 0 {
            break;
        }
        decoder
            .push_chunk(&chunk[..n])
            .with_context(|| format!("failed to decode {}", args.file.display()))?;
    }

    let registry = decoder.registry();
    let count = registry.declared_names().len();
    println!(
        "Schema: {count} message type{}",
        if count == 1 { "" } else { "s" }
    );

    let name_width = registry
        .declared_names()
        .iter()
        .map(String::len)
        .max()
        .unwrap_or(0);
    for descr in registry.descriptors_in_order() {
        println!(
            "0x{:02X} {:name_width$}  (len {:3})  format={:<8} labels={}",
            descr.msg_type,
            descr.name,
            descr.length,
            descr.format,
            descr.labels.join(","),
        );
    }

    Ok(())
}
