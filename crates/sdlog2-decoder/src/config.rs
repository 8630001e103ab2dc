use sdlog2_types::MessageFilter;

/// Per-session decoder configuration.
///
/// Every option belongs to exactly one [`LogDecoder`](crate::LogDecoder)
/// session — nothing here is shared or static, so concurrent sessions
/// with different settings cannot leak into each other.
///
/// ```text
/// ┌────────────────┬────────────────────────────────────────────────────┐
/// │ Field          │ Purpose                                            │
/// ├────────────────┼────────────────────────────────────────────────────┤
/// │ time_message   │ Name of the time message; enables `<name>__`       │
/// │                │ shadow columns on every other message type         │
/// │ correct_errors │ Resynchronize byte-by-byte on bad headers instead  │
/// │                │ of failing                                         │
/// │ filter         │ Allowlist of message names (and optionally labels) │
/// │                │ to store; empty/absent keeps everything            │
/// └────────────────┴────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default)]
pub struct DecoderConfig {
    /// Name of the designated time message. Its first field is treated as
    /// the stream timestamp and shadowed into other messages' columns.
    pub time_message: Option<String>,

    /// When true, a header mismatch advances the window one byte and
    /// rescans instead of aborting with `InvalidHeader`.
    pub correct_errors: bool,

    /// Restricts which messages (and fields) are stored. `None` and an
    /// empty filter both keep everything.
    pub filter: Option<MessageFilter>,
}

impl DecoderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn time_message(mut self, name: impl Into<String>) -> Self {
        self.time_message = Some(name.into());
        self
    }

    #[must_use]
    pub fn correct_errors(mut self, enabled: bool) -> Self {
        self.correct_errors = enabled;
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: MessageFilter) -> Self {
        self.filter = Some(filter);
        self
    }
}
