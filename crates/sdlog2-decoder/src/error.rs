use sdlog2_types::TypeError;
use sdlog2_wire::WireError;

/// Errors that can occur while decoding an sdlog2 stream.
///
/// All variants abort the parse immediately; there is no partial-result
/// return. The one lossy case — a stream ending mid-message — is not an
/// error and never surfaces here (the trailing partial record is silently
/// dropped).
///
/// ```text
///   DecodeError
///   ├── InvalidHeader           ← magic mismatch, error correction off
///   ├── UnknownMessageType      ← data message with no prior FORMAT
///   ├── Type(TypeError)         ← bad FORMAT content (codec, labels)
///   ├── Wire(WireError)         ← raw framing failures
///   └── Io(std::io::Error)      ← from the chunk reader
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The two magic bytes did not match at a message boundary.
    ///
    /// Only raised with error correction disabled; with it enabled the
    /// driver skips one byte at a time until the magic pair reappears.
    #[error("invalid header at offset {offset}: found {found:02X?}, expected [A3, 95]")]
    InvalidHeader { offset: usize, found: [u8; 2] },

    /// A data message arrived before any FORMAT message declared its type.
    ///
    /// The stream is self-describing: every data type id must be preceded
    /// by its schema declaration.
    #[error("unknown message type {msg_type:#04X} at offset {offset}")]
    UnknownMessageType { msg_type: u8, offset: usize },

    /// A FORMAT message could not be turned into a descriptor.
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A wire-level framing error.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// An I/O error from the underlying chunk reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
