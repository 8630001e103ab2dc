//! Synthetic sdlog2 stream builders shared by the integration tests and
//! benchmarks.
//!
//! [`StreamBuilder`] emits byte-exact log streams: FORMAT messages with
//! the declared length computed from the format string, data messages,
//! and arbitrary junk bytes for corruption scenarios. [`Payload`] builds
//! little-endian record payloads field by field.

use sdlog2_wire::format::FieldCodec;
use sdlog2_wire::header::{FORMAT_MSG_TYPE, HEADER_LEN, MSG_MAGIC};

/// Declared on-wire length of a data message with the given format
/// string: the 3-byte header plus every field's width.
///
/// # Panics
///
/// Panics on a format code the wire layer does not know; the fixture is
/// broken, not the code under test.
#[must_use]
pub fn declared_len(format: &str) -> u8 {
    let payload: usize = format
        .chars()
        .map(|c| {
            FieldCodec::for_code(c)
                .unwrap_or_else(|| panic!("fixture uses unknown format code {c:?}"))
                .wire_type
                .size()
        })
        .sum();
    u8::try_from(HEADER_LEN + payload).expect("fixture message longer than 255 bytes")
}

/// Byte-exact builder for synthetic sdlog2 streams.
#[derive(Default)]
pub struct StreamBuilder {
    bytes: Vec<u8>,
}

impl StreamBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a FORMAT message declaring `msg_type`. The length byte is
    /// derived from `format`, so fixtures cannot drift from the codec
    /// table.
    #[must_use]
    pub fn format(mut self, msg_type: u8, name: &str, format: &str, labels: &str) -> Self {
        self.bytes
            .extend([MSG_MAGIC[0], MSG_MAGIC[1], FORMAT_MSG_TYPE]);
        self.bytes.extend([msg_type, declared_len(format)]);
        for (s, width) in [(name, 4), (format, 16), (labels, 64)] {
            let mut fixed = s.as_bytes().to_vec();
            assert!(fixed.len() <= width, "fixture string {s:?} too long");
            fixed.resize(width, 0);
            self.bytes.extend_from_slice(&fixed);
        }
        self
    }

    /// Append a data message for `msg_type` with the given payload bytes.
    #[must_use]
    pub fn record(mut self, msg_type: u8, payload: &[u8]) -> Self {
        self.bytes.extend([MSG_MAGIC[0], MSG_MAGIC[1], msg_type]);
        self.bytes.extend_from_slice(payload);
        self
    }

    /// Append raw bytes verbatim, for corruption and truncation fixtures.
    #[must_use]
    pub fn junk(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    /// Drop the last `n` bytes, simulating a mid-message power loss.
    #[must_use]
    pub fn truncate_tail(mut self, n: usize) -> Self {
        let keep = self.bytes.len().saturating_sub(n);
        self.bytes.truncate(keep);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

/// Little-endian record payload builder.
#[derive(Default)]
pub struct Payload {
    bytes: Vec<u8>,
}

impl Payload {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn i8(self, v: i8) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u8(self, v: u8) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn i16(self, v: i16) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u16(self, v: u16) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn i32(self, v: i32) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u32(self, v: u32) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn i64(self, v: i64) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn u64(self, v: u64) -> Self {
        self.raw(&v.to_le_bytes())
    }

    #[must_use]
    pub fn f32(self, v: f32) -> Self {
        self.raw(&v.to_le_bytes())
    }

    /// A nul-padded fixed-width string field (`n`/`N`/`Z` codes).
    #[must_use]
    pub fn text(mut self, s: &str, width: usize) -> Self {
        let mut fixed = s.as_bytes().to_vec();
        assert!(fixed.len() <= width, "fixture string {s:?} too long");
        fixed.resize(width, 0);
        self.bytes.extend_from_slice(&fixed);
        self
    }

    #[must_use]
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.bytes.extend_from_slice(bytes);
        self
    }

    #[must_use]
    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_len_matches_codec_table() {
        assert_eq!(declared_len("h"), 5);
        assert_eq!(declared_len("ii"), 11);
        assert_eq!(declared_len("BBnNZ"), 3 + 1 + 1 + 4 + 16 + 64);
    }

    #[test]
    fn format_message_is_89_bytes() {
        let stream = StreamBuilder::new()
            .format(0x01, "ATT", "ccC", "Roll,Pitch,Yaw")
            .build();
        assert_eq!(stream.len(), 89);
        assert_eq!(&stream[..3], &[0xA3, 0x95, 0x80]);
        assert_eq!(stream[4], 9); // 3 header + 3 i16 fields
    }
}
