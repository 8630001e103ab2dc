/// Errors raised while building typed descriptors from wire payloads.
///
/// These are higher-level than [`sdlog2_wire::WireError`] — they deal with
/// the content of a FORMAT message rather than raw byte framing. All of
/// them are fatal to the parse: a schema that cannot be understood makes
/// every later message of that type undecodable.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A FORMAT message referenced a format character that has no entry in
    /// the field codec table.
    #[error("unsupported format code {code:?} in message {message} ({msg_type})")]
    UnsupportedFormatCode {
        code: char,
        message: String,
        msg_type: u8,
    },

    /// The declared label list and format string disagree on field count.
    ///
    /// Every message layout must satisfy `labels.len() == format.len()`;
    /// a mismatch means records of this type cannot be mapped to columns.
    #[error("message {message} declares {labels} labels for {fields} fields")]
    LabelCountMismatch {
        message: String,
        labels: usize,
        fields: usize,
    },

    /// A FORMAT payload was handed over with the wrong length.
    #[error("FORMAT payload must be {expected} bytes, got {found}")]
    FormatPayloadLength { expected: usize, found: usize },
}
