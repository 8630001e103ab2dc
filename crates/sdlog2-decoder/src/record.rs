//! Decoding one data-message payload into field values.

use sdlog2_types::{MessageDescriptor, Value};
use sdlog2_wire::WireError;
use sdlog2_wire::cstr::parse_cstr;
use sdlog2_wire::format::WireType;

/// Decode a data message payload (header excluded) against its descriptor.
///
/// Fields are consumed in order, each exactly `wire_type.size()` bytes,
/// little-endian. Fixed-width strings trim at the first nul terminator;
/// scaled integers multiply into `f64`; everything else passes through as
/// the matching integer or float. The result has one value per descriptor
/// label, in label order.
///
/// # Errors
///
/// [`WireError::UnexpectedEof`] if the payload is shorter than the sum of
/// the declared field widths (a FORMAT message lied about its length).
pub fn decode_record(descr: &MessageDescriptor, payload: &[u8]) -> Result<Vec<Value>, WireError> {
    let mut cursor = 0;
    let mut record = Vec::with_capacity(descr.fields.len());

    for codec in &descr.fields {
        let size = codec.wire_type.size();
        let start = cursor;
        let bytes = payload
            .get(start..start + size)
            .ok_or(WireError::UnexpectedEof { offset: start })?;
        cursor += size;

        let value = match codec.wire_type {
            WireType::Int8 => signed(i64::from(i8::from_le_bytes(arr(bytes, start)?)), codec.scale),
            WireType::Int16 => {
                signed(i64::from(i16::from_le_bytes(arr(bytes, start)?)), codec.scale)
            }
            WireType::Int32 => {
                signed(i64::from(i32::from_le_bytes(arr(bytes, start)?)), codec.scale)
            }
            WireType::Int64 => signed(i64::from_le_bytes(arr(bytes, start)?), codec.scale),
            WireType::UInt8 => {
                unsigned(u64::from(u8::from_le_bytes(arr(bytes, start)?)), codec.scale)
            }
            WireType::UInt16 => {
                unsigned(u64::from(u16::from_le_bytes(arr(bytes, start)?)), codec.scale)
            }
            WireType::UInt32 => {
                unsigned(u64::from(u32::from_le_bytes(arr(bytes, start)?)), codec.scale)
            }
            WireType::UInt64 => unsigned(u64::from_le_bytes(arr(bytes, start)?), codec.scale),
            WireType::Float32 => Value::Float(f64::from(f32::from_le_bytes(arr(bytes, start)?))),
            WireType::Char4 | WireType::Char16 | WireType::Char64 => {
                Value::Text(parse_cstr(bytes))
            }
        };
        record.push(value);
    }

    Ok(record)
}

/// Fixed-width view of a field's bytes. The slice always has the right
/// length here, but a length mismatch surfaces as a wire error rather
/// than a panic so the decoder never aborts the process on hostile input.
fn arr<const N: usize>(bytes: &[u8], offset: usize) -> Result<[u8; N], WireError> {
    bytes
        .try_into()
        .map_err(|_| WireError::UnexpectedEof { offset })
}

#[allow(clippy::cast_precision_loss)]
fn signed(v: i64, scale: Option<f64>) -> Value {
    match scale {
        Some(s) => Value::Float(v as f64 * s),
        None => Value::Int(v),
    }
}

#[allow(clippy::cast_precision_loss)]
fn unsigned(v: u64, scale: Option<f64>) -> Value {
    match scale {
        Some(s) => Value::Float(v as f64 * s),
        None => Value::UInt(v),
    }
}
