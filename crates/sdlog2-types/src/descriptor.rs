use sdlog2_wire::cstr::parse_cstr;
use sdlog2_wire::format::FieldCodec;
use sdlog2_wire::header::{FORMAT_MSG_TYPE, FORMAT_PAYLOAD_LEN};

use crate::error::TypeError;

/// The decoded layout of one message type, built from a FORMAT payload.
///
/// Created once per distinct type id and immutable thereafter. A later
/// FORMAT message for the same type id replaces the whole descriptor (the
/// registry's overwrite policy); the descriptor itself never mutates.
///
/// Invariant: `labels.len() == fields.len() == format.len()`, enforced at
/// parse time.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageDescriptor {
    /// Message type id, 0–255.
    pub msg_type: u8,
    /// Total encoded message length in bytes, 3-byte header included.
    pub length: usize,
    /// Short message name, e.g. `ATT` or `GPS`.
    pub name: String,
    /// Format string, one codec character per field.
    pub format: String,
    /// Field labels, in field order.
    pub labels: Vec<String>,
    /// Per-field codecs resolved from `format`.
    pub fields: Vec<FieldCodec>,
}

impl MessageDescriptor {
    /// Parse a descriptor from a FORMAT message payload (header excluded).
    ///
    /// Payload layout, all little-endian, fixed strings nul-trimmed:
    ///
    /// ```text
    /// ┌────────┬──────────┬───────────────────────────────┐
    /// │ Offset │ Size     │ Description                   │
    /// ├────────┼──────────┼───────────────────────────────┤
    /// │ 0x00   │ 1 byte   │ Described message type id     │
    /// │ 0x01   │ 1 byte   │ Message byte length           │
    /// │ 0x02   │ 4 bytes  │ Name (char[4])                │
    /// │ 0x06   │ 16 bytes │ Format string (char[16])      │
    /// │ 0x16   │ 64 bytes │ Labels, comma-separated       │
    /// └────────┴──────────┴───────────────────────────────┘
    /// ```
    ///
    /// # Errors
    ///
    /// - [`TypeError::FormatPayloadLength`] if `payload` is not exactly
    ///   86 bytes.
    /// - [`TypeError::UnsupportedFormatCode`] if the format string uses a
    ///   character absent from the codec table.
    /// - [`TypeError::LabelCountMismatch`] if labels and format disagree.
    pub fn from_format_payload(payload: &[u8]) -> Result<Self, TypeError> {
        if payload.len() != FORMAT_PAYLOAD_LEN {
            return Err(TypeError::FormatPayloadLength {
                expected: FORMAT_PAYLOAD_LEN,
                found: payload.len(),
            });
        }

        let msg_type = payload[0];
        let length = usize::from(payload[1]);
        let name = parse_cstr(&payload[2..6]);
        let format = parse_cstr(&payload[6..22]);
        let labels_csv = parse_cstr(&payload[22..86]);

        let labels: Vec<String> = if labels_csv.is_empty() {
            Vec::new()
        } else {
            labels_csv.split(',').map(str::to_owned).collect()
        };

        let mut fields = Vec::with_capacity(format.len());
        for code in format.chars() {
            let codec =
                FieldCodec::for_code(code).ok_or_else(|| TypeError::UnsupportedFormatCode {
                    code,
                    message: name.clone(),
                    msg_type,
                })?;
            fields.push(codec);
        }

        if labels.len() != fields.len() {
            return Err(TypeError::LabelCountMismatch {
                message: name,
                labels: labels.len(),
                fields: fields.len(),
            });
        }

        Ok(Self {
            msg_type,
            length,
            name,
            format,
            labels,
            fields,
        })
    }

    /// True when this descriptor describes the FORMAT message itself.
    ///
    /// Streams open with a root entry declaring the FORMAT layout; the
    /// registry consumes it without storing a data descriptor.
    #[must_use]
    pub fn is_self_descriptor(&self) -> bool {
        self.msg_type == FORMAT_MSG_TYPE
    }
}

#[cfg(test)]
mod tests {
    use sdlog2_wire::format::WireType;

    use super::*;

    /// Build an 86-byte FORMAT payload from its parts.
    fn format_payload(msg_type: u8, length: u8, name: &str, format: &str, labels: &str) -> Vec<u8> {
        let mut payload = vec![msg_type, length];
        payload.extend_from_slice(&fixed(name, 4));
        payload.extend_from_slice(&fixed(format, 16));
        payload.extend_from_slice(&fixed(labels, 64));
        payload
    }

    fn fixed(s: &str, width: usize) -> Vec<u8> {
        let mut bytes = s.as_bytes().to_vec();
        assert!(bytes.len() <= width, "fixture string too long");
        bytes.resize(width, 0);
        bytes
    }

    #[test]
    fn parses_simple_descriptor() {
        let payload = format_payload(0x01, 17, "ATT", "ccC", "Roll,Pitch,Yaw");
        let descr = MessageDescriptor::from_format_payload(&payload).unwrap();

        assert_eq!(descr.msg_type, 0x01);
        assert_eq!(descr.length, 17);
        assert_eq!(descr.name, "ATT");
        assert_eq!(descr.format, "ccC");
        assert_eq!(descr.labels, vec!["Roll", "Pitch", "Yaw"]);
        assert_eq!(descr.fields.len(), 3);
        assert_eq!(descr.fields[0].wire_type, WireType::Int16);
        assert_eq!(descr.fields[0].scale, Some(0.01));
        assert!(!descr.is_self_descriptor());
    }

    #[test]
    fn self_descriptor_detected() {
        let payload = format_payload(0x80, 89, "FMT", "BBnNZ", "Type,Length,Name,Format,Labels");
        let descr = MessageDescriptor::from_format_payload(&payload).unwrap();
        assert!(descr.is_self_descriptor());
    }

    #[test]
    fn rejects_unknown_format_code() {
        let payload = format_payload(0x02, 10, "BAD", "bx", "A,B");
        let result = MessageDescriptor::from_format_payload(&payload);
        assert!(matches!(
            result,
            Err(TypeError::UnsupportedFormatCode {
                code: 'x',
                msg_type: 0x02,
                ..
            })
        ));
    }

    #[test]
    fn rejects_label_count_mismatch() {
        let payload = format_payload(0x03, 8, "ODD", "hh", "OnlyOne");
        let result = MessageDescriptor::from_format_payload(&payload);
        assert!(matches!(
            result,
            Err(TypeError::LabelCountMismatch {
                labels: 1,
                fields: 2,
                ..
            })
        ));
    }

    #[test]
    fn rejects_wrong_payload_length() {
        let result = MessageDescriptor::from_format_payload(&[0u8; 40]);
        assert!(matches!(
            result,
            Err(TypeError::FormatPayloadLength {
                expected: 86,
                found: 40,
            })
        ));
    }

    #[test]
    fn empty_format_and_labels_agree() {
        let payload = format_payload(0x04, 3, "NIL", "", "");
        let descr = MessageDescriptor::from_format_payload(&payload).unwrap();
        assert!(descr.labels.is_empty());
        assert!(descr.fields.is_empty());
        assert_eq!(descr.length, 3);
    }
}
