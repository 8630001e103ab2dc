use indexmap::IndexMap;
use serde::Serialize;

use crate::descriptor::MessageDescriptor;
use crate::filter::FieldSelection;
use crate::value::Value;

/// Column name of the time-shadow series injected into non-time messages.
#[must_use]
pub fn shadow_label(time_message: &str) -> String {
    format!("{time_message}__")
}

/// The accumulated log: `message name → field label → ordered values`.
///
/// Both mapping levels preserve insertion order — message names appear in
/// arrival order, labels in descriptor order — and sequences only ever
/// grow by append. One `FlightLog` belongs to exactly one parser session;
/// it is created empty and returned complete.
///
/// When a time message is configured, every other message type gets one
/// extra column named `<time>__` holding the most recently observed time
/// value at the moment each record arrived. The column is only created if
/// a time value has been seen before the message type's first record; a
/// type whose first record precedes all time values never grows one.
#[derive(Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FlightLog {
    messages: IndexMap<String, IndexMap<String, Vec<Value>>>,
    #[serde(skip)]
    last_time: Option<Value>,
}

impl FlightLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decoded record to the log.
    ///
    /// `record` must be in descriptor field order. `selection` restricts
    /// which labels are stored; callers drop a message entirely (and never
    /// call `ingest`) when the filter excludes its name.
    pub fn ingest(
        &mut self,
        descr: &MessageDescriptor,
        record: Vec<Value>,
        time_message: Option<&str>,
        selection: &FieldSelection,
    ) {
        let is_time_msg = time_message == Some(descr.name.as_str());
        // The timestamp is the first field of the time message, captured
        // before the record is moved into its columns.
        let first = if is_time_msg { record.first().cloned() } else { None };

        if !self.messages.contains_key(&descr.name) {
            let mut columns = IndexMap::new();
            for label in &descr.labels {
                if selection.retains(label) {
                    columns.insert(label.clone(), Vec::new());
                }
            }
            if let Some(time) = time_message {
                if !is_time_msg && self.last_time.is_some() {
                    columns.insert(shadow_label(time), Vec::new());
                }
            }
            self.messages.insert(descr.name.clone(), columns);
        }

        let Some(columns) = self.messages.get_mut(&descr.name) else {
            return;
        };
        for (label, value) in descr.labels.iter().zip(record) {
            if let Some(series) = columns.get_mut(label) {
                series.push(value);
            }
        }

        if is_time_msg {
            self.last_time = first;
        } else if let Some(time) = time_message {
            if let (Some(series), Some(t)) =
                (columns.get_mut(&shadow_label(time)), self.last_time.as_ref())
            {
                series.push(t.clone());
            }
        }
    }

    /// All accumulated messages, in arrival order.
    #[must_use]
    pub fn messages(&self) -> &IndexMap<String, IndexMap<String, Vec<Value>>> {
        &self.messages
    }

    /// One series, if the message and label exist.
    #[must_use]
    pub fn series(&self, name: &str, label: &str) -> Option<&[Value]> {
        self.messages
            .get(name)
            .and_then(|columns| columns.get(label))
            .map(Vec::as_slice)
    }

    /// Number of distinct message types seen.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recently observed time value, if any.
    #[must_use]
    pub fn last_time(&self) -> Option<&Value> {
        self.last_time.as_ref()
    }
}
