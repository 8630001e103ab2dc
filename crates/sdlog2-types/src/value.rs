use std::fmt;

use serde::Serialize;

/// A single decoded field value.
///
/// The variant is decided statically by the field's wire type and scale,
/// never by inspecting the decoded data:
///
/// ```text
/// ┌──────────────────────────────┬──────────┐
/// │ Field kind                   │ Variant  │
/// ├──────────────────────────────┼──────────┤
/// │ signed integer, no scale     │ Int      │
/// │ unsigned integer, no scale   │ UInt     │
/// │ any scaled integer, or f32   │ Float    │
/// │ fixed-width string           │ Text     │
/// └──────────────────────────────┴──────────┘
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Numeric view of the value, when it has one.
    ///
    /// Integer variants widen losslessly enough for telemetry use; `Text`
    /// has no numeric view.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::UInt(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Text(_) => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::UInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}
