use std::io::Read;

use tracing::{debug, trace, warn};

use sdlog2_types::{FieldSelection, FlightLog};
use sdlog2_wire::WireError;
use sdlog2_wire::header::{FORMAT_MSG_LEN, FORMAT_MSG_TYPE, HEADER_LEN, MessageHeader};

use crate::config::DecoderConfig;
use crate::error::DecodeError;
use crate::record::decode_record;
use crate::registry::SchemaRegistry;
use crate::window::ByteWindow;

/// Chunk size used by the reader-based entry points.
pub const CHUNK_SIZE: usize = 8192;

/// Incremental sdlog2 stream decoder.
///
/// Chunks are pushed in as they arrive; the decoder drains as many whole
/// messages from its window as possible after every push, so memory stays
/// bounded by one chunk plus one message of carry-over while the decoded
/// log grows.
///
/// The per-message loop is a small state machine:
///
/// ```text
///   SYNCING ──magic found──▶ HAVE_HEADER ──bytes ready──▶ decode ─┐
///      ▲ ▲                        │                               │
///      │ └── skip 1 byte          └──too few bytes──▶ NEED_MORE   │
///      │     (correct_errors)          (wait for next chunk)      │
///      └──────────────────────────────────────────────────────────┘
/// ```
///
/// `SYNCING` scans for the 2-byte magic pair. A mismatch is fatal unless
/// error correction is on, in which case the window advances one byte and
/// rescans. `HAVE_HEADER` dispatches on the type id: the FORMAT type goes
/// to the schema registry, everything else through descriptor lookup and
/// record decoding into the log. `NEED_MORE` leaves the partial message
/// buffered, without discarding, until the next chunk arrives.
///
/// A stream that ends in `NEED_MORE` silently drops the partial trailing
/// message — an intentional lossy boundary, not an error.
pub struct LogDecoder {
    config: DecoderConfig,
    window: ByteWindow,
    registry: SchemaRegistry,
    log: FlightLog,
}

impl LogDecoder {
    #[must_use]
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            window: ByteWindow::new(),
            registry: SchemaRegistry::new(),
            log: FlightLog::new(),
        }
    }

    /// Feed the next chunk and decode every whole message it completes.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InvalidHeader`] on a magic mismatch with error
    ///   correction disabled.
    /// - [`DecodeError::UnknownMessageType`] for a data message whose type
    ///   id has no registered descriptor. Error correction does not
    ///   recover from this: only header corruption is skippable.
    /// - [`DecodeError::Type`] / [`DecodeError::Wire`] for malformed
    ///   FORMAT or data payloads.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<(), DecodeError> {
        self.window.append(chunk);
        self.drain_window()
    }

    fn drain_window(&mut self) -> Result<(), DecodeError> {
        let mut skipped = 0usize;

        while self.window.available() >= HEADER_LEN {
            let Some(head) = self.window.take(HEADER_LEN) else {
                break;
            };
            let header = match MessageHeader::read_from(head, self.window.stream_offset()) {
                Ok(header) => header,
                Err(WireError::InvalidMagic { offset, found }) => {
                    if self.config.correct_errors {
                        self.window.advance(1);
                        skipped += 1;
                        continue;
                    }
                    return Err(DecodeError::InvalidHeader { offset, found });
                }
                // The loop guard keeps a full header buffered.
                Err(WireError::UnexpectedEof { .. }) => break,
            };
            if skipped > 0 {
                warn!(
                    skipped,
                    offset = self.window.stream_offset(),
                    "resynchronized after skipping corrupt bytes"
                );
                skipped = 0;
            }

            let msg_type = header.msg_type;
            if msg_type == FORMAT_MSG_TYPE {
                let Some(bytes) = self.window.take(FORMAT_MSG_LEN) else {
                    break; // NEED_MORE: wait for the next chunk
                };
                self.registry.register(&bytes[HEADER_LEN..])?;
                self.window.advance(FORMAT_MSG_LEN);
            } else {
                // Error correction never recovers from this: a valid
                // header carrying an undeclared type id means the schema
                // itself is missing, not that bytes were corrupted.
                let Some(descr) = self.registry.get(msg_type) else {
                    return Err(DecodeError::UnknownMessageType {
                        msg_type,
                        offset: self.window.stream_offset(),
                    });
                };
                let length = descr.length;
                let Some(bytes) = self.window.take(length) else {
                    break; // NEED_MORE
                };

                let selection = match &self.config.filter {
                    Some(filter) => filter.selection_for(&descr.name),
                    None => Some(FieldSelection::all()),
                };
                if let Some(selection) = selection {
                    // A declared length below the header size yields an
                    // empty payload rather than an out-of-range slice.
                    let payload = bytes.get(HEADER_LEN..).unwrap_or_default();
                    let record = decode_record(descr, payload)?;
                    trace!(name = %descr.name, fields = record.len(), "decoded record");
                    self.log.ingest(
                        descr,
                        record,
                        self.config.time_message.as_deref(),
                        selection,
                    );
                }
                // A malformed declared length below the header size would
                // stall the loop; consume at least the header.
                self.window.advance(length.max(HEADER_LEN));
            }
        }

        Ok(())
    }

    /// The schema registered so far, for tooling.
    #[must_use]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// The log accumulated so far.
    #[must_use]
    pub fn log(&self) -> &FlightLog {
        &self.log
    }

    /// End the session and return the completed log.
    ///
    /// Any partially buffered trailing message is dropped silently.
    #[must_use]
    pub fn finish(self) -> FlightLog {
        if self.window.available() > 0 {
            debug!(
                bytes = self.window.available(),
                "discarding partial trailing message"
            );
        }
        self.log
    }
}

/// Decode a complete stream from a blocking reader.
///
/// Pulls [`CHUNK_SIZE`]-byte chunks until the reader reports end of input,
/// then returns the completed log. This is the standard entry point for
/// log files.
///
/// # Errors
///
/// All [`LogDecoder::push_chunk`] errors, plus [`DecodeError::Io`] if a
/// chunk read fails.
pub fn decode_reader(r: &mut impl Read, config: DecoderConfig) -> Result<FlightLog, DecodeError> {
    let mut decoder = LogDecoder::new(config);
    let mut chunk = vec![0u8; CHUNK_SIZE];
    loop {
        let n = r.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        decoder.push_chunk(&chunk[..n])?;
    }
    Ok(decoder.finish())
}

/// Decode a complete in-memory stream.
///
/// # Errors
///
/// All [`LogDecoder::push_chunk`] errors.
pub fn decode_slice(bytes: &[u8], config: DecoderConfig) -> Result<FlightLog, DecodeError> {
    let mut decoder = LogDecoder::new(config);
    decoder.push_chunk(bytes)?;
    Ok(decoder.finish())
}

#[cfg(test)]
mod tests {
    use sdlog2_types::Value;
    use sdlog2_wire::header::MSG_MAGIC;

    use super::*;

    fn fmt_message(msg_type: u8, length: u8, name: &str, format: &str, labels: &str) -> Vec<u8> {
        let mut msg = vec![MSG_MAGIC[0], MSG_MAGIC[1], FORMAT_MSG_TYPE, msg_type, length];
        for (s, width) in [(name, 4), (format, 16), (labels, 64)] {
            let mut bytes = s.as_bytes().to_vec();
            bytes.resize(width, 0);
            msg.extend_from_slice(&bytes);
        }
        msg
    }

    fn data_message(msg_type: u8, payload: &[u8]) -> Vec<u8> {
        let mut msg = vec![MSG_MAGIC[0], MSG_MAGIC[1], msg_type];
        msg.extend_from_slice(payload);
        msg
    }

    #[test]
    fn schema_then_data_decodes() {
        let mut stream = fmt_message(0x01, 5, "STAT", "h", "Mode");
        stream.extend(data_message(0x01, &500i16.to_le_bytes()));

        let log = decode_slice(&stream, DecoderConfig::new()).unwrap();
        assert_eq!(log.series("STAT", "Mode"), Some(&[Value::Int(500)][..]));
    }

    #[test]
    fn data_before_schema_fails() {
        let stream = data_message(0x01, &[0, 0]);
        let result = decode_slice(&stream, DecoderConfig::new());
        assert!(matches!(
            result,
            Err(DecodeError::UnknownMessageType {
                msg_type: 0x01,
                offset: 0,
            })
        ));
    }

    #[test]
    fn bad_header_fails_without_correction() {
        let result = decode_slice(&[0xFF, 0xFF, 0x01, 0x02], DecoderConfig::new());
        assert!(matches!(
            result,
            Err(DecodeError::InvalidHeader {
                offset: 0,
                found: [0xFF, 0xFF],
            })
        ));
    }

    #[test]
    fn bad_header_skipped_with_correction() {
        let mut stream = vec![0x00, 0x13, 0x37]; // garbage prefix
        stream.extend(fmt_message(0x01, 5, "STAT", "h", "Mode"));
        stream.extend(data_message(0x01, &7i16.to_le_bytes()));

        let log = decode_slice(&stream, DecoderConfig::new().correct_errors(true)).unwrap();
        assert_eq!(log.series("STAT", "Mode"), Some(&[Value::Int(7)][..]));
    }

    #[test]
    fn message_split_across_chunks() {
        let mut stream = fmt_message(0x01, 11, "GPS", "ii", "Lat,Lon");
        stream.extend(data_message(0x01, &[1, 0, 0, 0, 2, 0, 0, 0]));

        let mut decoder = LogDecoder::new(DecoderConfig::new());
        let (a, b) = stream.split_at(stream.len() - 5);
        decoder.push_chunk(a).unwrap();
        decoder.push_chunk(b).unwrap();
        let log = decoder.finish();

        assert_eq!(log.series("GPS", "Lat"), Some(&[Value::Int(1)][..]));
        assert_eq!(log.series("GPS", "Lon"), Some(&[Value::Int(2)][..]));
    }

    #[test]
    fn trailing_partial_message_dropped() {
        let mut stream = fmt_message(0x01, 5, "STAT", "h", "Mode");
        stream.extend(data_message(0x01, &1i16.to_le_bytes()));
        stream.extend([0xA3, 0x95, 0x01, 0x09]); // only half a record

        let log = decode_slice(&stream, DecoderConfig::new()).unwrap();
        assert_eq!(log.series("STAT", "Mode"), Some(&[Value::Int(1)][..]));
    }

    #[test]
    fn filtered_message_consumed_but_not_stored() {
        use sdlog2_types::MessageFilter;

        let mut stream = fmt_message(0x01, 5, "STAT", "h", "Mode");
        stream.extend(fmt_message(0x02, 5, "BARO", "h", "Alt"));
        stream.extend(data_message(0x01, &1i16.to_le_bytes()));
        stream.extend(data_message(0x02, &2i16.to_le_bytes()));
        stream.extend(data_message(0x01, &3i16.to_le_bytes()));

        let config = DecoderConfig::new().filter(MessageFilter::new().allow("STAT"));
        let log = decode_slice(&stream, config).unwrap();

        assert!(log.messages().get("BARO").is_none());
        assert_eq!(
            log.series("STAT", "Mode"),
            Some(&[Value::Int(1), Value::Int(3)][..])
        );
    }

    #[test]
    fn unknown_type_fatal_even_with_correction() {
        let mut stream = fmt_message(0x01, 5, "STAT", "h", "Mode");
        stream.extend(data_message(0x07, &[1, 2])); // never declared

        let result = decode_slice(&stream, DecoderConfig::new().correct_errors(true));
        assert!(matches!(
            result,
            Err(DecodeError::UnknownMessageType {
                msg_type: 0x07,
                offset: 89,
            })
        ));
    }

    #[test]
    fn registry_visible_before_finish() {
        let stream = fmt_message(0x01, 5, "STAT", "h", "Mode");
        let mut decoder = LogDecoder::new(DecoderConfig::new());
        decoder.push_chunk(&stream).unwrap();
        assert_eq!(decoder.registry().declared_names(), ["STAT"]);
        assert!(decoder.log().is_empty());
    }
}
