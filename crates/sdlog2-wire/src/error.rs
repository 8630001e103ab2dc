#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Message header magic bytes did not match `A3 95`.
    #[error("invalid header at offset {offset}: found {found:02X?}, expected [A3, 95]")]
    InvalidMagic { offset: usize, found: [u8; 2] },

    /// Input ended before a complete header or payload could be read.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEof { offset: usize },
}
