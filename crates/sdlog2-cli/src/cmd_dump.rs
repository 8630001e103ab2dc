/// Implementation of `sdlog2 dump`.
///
/// Opens the log file, streams it through [`decode_reader`] with the
/// configuration assembled from the CLI flags, and serializes the
/// resulting log as JSON to stdout or `-o <file>`.
///
/// # Output shape
///
/// ```text
/// {
///   "TIME": { "StartTime": [334347, 588211, ...] },
///   "ATT":  { "Roll": [0.01, ...], "Pitch": [...], "TIME__": [334347, ...] }
/// }
/// ```
///
/// Message and column order follow first appearance in the stream, so the
/// output is stable across runs on the same file.
use std::fs::File;
use std::io::{self, BufReader, Write as _};

use anyhow::{Context, Result, anyhow};
use sdlog2_decoder::{DecoderConfig, decode_reader};
use sdlog2_types::MessageFilter;

use crate::DumpArgs;

/// Run the `sdlog2 dump` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a `--filter` spec is
/// malformed, the stream is structurally invalid, or the output cannot be
/// written.
pub fn run(args: &DumpArgs) -> Result<()> {
    let file =
        File::open(&args.file).with_context(|| format!("cannot open {}", args.file.display()))?;
    let mut reader = BufReader::new(file);

    let mut config = DecoderConfig::new().correct_errors(args.correct_errors);
    if let Some(name) = &args.time_msg {
        config = config.time_message(name);
    }
    if !args.filter.is_empty() {
        config = config.filter(parse_filter_specs(&args.filter)?);
    }

    let log = decode_reader(&mut reader, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&log)
    } else {
        serde_json::to_string(&log)
    }
    .context("cannot serialize decoded log")?;

    if let Some(path) = &args.output {
        std::fs::write(path, json.as_bytes())
            .with_context(|| format!("cannot write {}", path.display()))?;
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(json.as_bytes())
            .context("cannot write to stdout")?;
        handle.write_all(b"\n").context("cannot write to stdout")?;
    }

    Ok(())
}

// ── Flag parsers ──────────────────────────────────────────────────────────────

/// Parses repeated `--filter` specs into a [`MessageFilter`].
///
/// Each spec is either `NAME` (keep every field of the message) or
/// `NAME:label,label` (keep only the listed fields).
///
/// # Errors
///
/// Returns an error for an empty name or an empty label list after `:`.
fn parse_filter_specs(specs: &[String]) -> Result<MessageFilter> {
    let mut filter = MessageFilter::new();
    for spec in specs {
        match spec.split_once(':') {
            None => {
                if spec.is_empty() {
                    return Err(anyhow!("empty --filter spec"));
                }
                filter = filter.allow(spec);
            }
            Some((name, labels)) => {
                if name.is_empty() {
                    return Err(anyhow!("empty message name in --filter {spec:?}"));
                }
                let labels: Vec<&str> = labels
                    .split(',')
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .collect();
                if labels.is_empty() {
                    return Err(anyhow!("no labels after `:` in --filter {spec:?}"));
                }
                filter = filter.allow_fields(name, labels);
            }
        }
    }
    Ok(filter)
}
