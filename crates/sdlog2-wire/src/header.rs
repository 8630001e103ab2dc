use crate::error::WireError;

/// Magic bytes opening every message on the wire.
///
/// Stored as raw bytes rather than a `u16` so byte order never enters the
/// picture — the stream always carries these two bytes in this order.
pub const MSG_MAGIC: [u8; 2] = [0xA3, 0x95];

/// Total message header size in bytes: two magic bytes plus the type id.
pub const HEADER_LEN: usize = 3;

/// Reserved type id of the self-describing FORMAT message.
pub const FORMAT_MSG_TYPE: u8 = 0x80;

/// Fixed total length of a FORMAT message, header included.
///
/// The payload is `type:u8 + length:u8 + name:char[4] + format:char[16] +
/// labels:char[64]` = 86 bytes, plus the 3-byte header.
pub const FORMAT_MSG_LEN: usize = 89;

/// Length of a FORMAT message payload (header excluded).
pub const FORMAT_PAYLOAD_LEN: usize = FORMAT_MSG_LEN - HEADER_LEN;

/// Message header — the first 3 bytes of every message.
///
/// ```text
/// ┌────────┬────────┬─────────────────────────────┐
/// │ Offset │ Size   │ Description                 │
/// ├────────┼────────┼─────────────────────────────┤
/// │ 0x00   │ 2 byte │ Magic: 0xA3 0x95            │
/// │ 0x02   │ 1 byte │ Message type id             │
/// └────────┴────────┴─────────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MessageHeader {
    pub msg_type: u8,
}

impl MessageHeader {
    /// Parse a header from the first 3 bytes of the provided buffer.
    ///
    /// `offset` is the absolute stream position of `buf[0]`, carried into
    /// errors so diagnostics survive window compaction.
    ///
    /// # Errors
    ///
    /// - [`WireError::UnexpectedEof`] if the buffer is shorter than 3 bytes.
    /// - [`WireError::InvalidMagic`] if the magic bytes don't match.
    pub fn read_from(buf: &[u8], offset: usize) -> Result<Self, WireError> {
        if buf.len() < HEADER_LEN {
            return Err(WireError::UnexpectedEof {
                offset: offset + buf.len(),
            });
        }

        if buf[0..2] != MSG_MAGIC {
            return Err(WireError::InvalidMagic {
                offset,
                found: [buf[0], buf[1]],
            });
        }

        Ok(Self { msg_type: buf[2] })
    }
}
