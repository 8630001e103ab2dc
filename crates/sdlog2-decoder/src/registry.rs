use std::collections::HashMap;

use tracing::debug;

use sdlog2_types::{MessageDescriptor, TypeError};

/// Schema registry: message descriptors keyed by type id.
///
/// Built up incrementally as FORMAT messages arrive. The registry also
/// remembers the order in which message names were declared, so tooling
/// can reproduce the stream's schema as written. State grows
/// monotonically and never shrinks; a FORMAT message re-declaring an
/// already-seen type id overwrites the stored descriptor (columns
/// already accumulated under the old layout are left untouched).
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    descriptors: HashMap<u8, MessageDescriptor>,
    declared_names: Vec<String>,
}

impl SchemaRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor from a FORMAT message payload.
    ///
    /// A payload describing the FORMAT message itself (the stream's root
    /// self-descriptor) is consumed without being stored — the registry
    /// has no use for a data descriptor of the schema message.
    ///
    /// # Errors
    ///
    /// Propagates [`TypeError`] for malformed payloads (wrong length,
    /// unknown format code, label/field count mismatch).
    pub fn register(&mut self, payload: &[u8]) -> Result<(), TypeError> {
        let descr = MessageDescriptor::from_format_payload(payload)?;
        if descr.is_self_descriptor() {
            return Ok(());
        }

        debug!(
            msg_type = descr.msg_type,
            name = %descr.name,
            length = descr.length,
            format = %descr.format,
            "registered message descriptor"
        );

        if !self.declared_names.iter().any(|n| n == &descr.name) {
            self.declared_names.push(descr.name.clone());
        }
        self.descriptors.insert(descr.msg_type, descr);
        Ok(())
    }

    /// Look up the descriptor for a data message type id.
    #[must_use]
    pub fn get(&self, msg_type: u8) -> Option<&MessageDescriptor> {
        self.descriptors.get(&msg_type)
    }

    /// Message names in declaration order.
    #[must_use]
    pub fn declared_names(&self) -> &[String] {
        &self.declared_names
    }

    /// Descriptors in declaration order (skipping names whose type id was
    /// later re-declared under a different name).
    pub fn descriptors_in_order(&self) -> impl Iterator<Item = &MessageDescriptor> {
        self.declared_names
            .iter()
            .filter_map(|name| self.descriptors.values().find(|d| &d.name == name))
    }
}
