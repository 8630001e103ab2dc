use std::collections::HashMap;

/// What to keep of a message type's fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldSelection {
    /// Keep every field (the `*` wildcard).
    All,
    /// Keep only the listed labels, in descriptor order.
    Fields(Vec<String>),
}

impl FieldSelection {
    /// Shared wildcard instance, for callers with no filter configured.
    #[must_use]
    pub fn all() -> &'static Self {
        &SELECT_ALL
    }

    /// True when `label` survives this selection.
    #[must_use]
    pub fn retains(&self, label: &str) -> bool {
        match self {
            Self::All => true,
            Self::Fields(labels) => labels.iter().any(|l| l == label),
        }
    }
}

/// Per-message allowlist restricting what the accumulator stores.
///
/// An empty filter retains everything. A non-empty filter drops any
/// message type it does not name — the driver still consumes the bytes
/// of dropped messages to keep the stream synchronized, but no record is
/// produced for them.
#[derive(Clone, Debug, Default)]
pub struct MessageFilter {
    rules: HashMap<String, FieldSelection>,
}

/// Wildcard selection handed out for messages when no filter applies.
static SELECT_ALL: FieldSelection = FieldSelection::All;

impl MessageFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep every field of `name`.
    #[must_use]
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.rules.insert(name.into(), FieldSelection::All);
        self
    }

    /// Keep only the given labels of `name`.
    #[must_use]
    pub fn allow_fields(
        mut self,
        name: impl Into<String>,
        labels: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.rules.insert(
            name.into(),
            FieldSelection::Fields(labels.into_iter().map(Into::into).collect()),
        );
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The selection applying to `name`, or `None` when the message is
    /// dropped entirely. An empty filter selects everything.
    #[must_use]
    pub fn selection_for(&self, name: &str) -> Option<&FieldSelection> {
        if self.rules.is_empty() {
            Some(&SELECT_ALL)
        } else {
            self.rules.get(name)
        }
    }
}
