//! The field codec table: format characters to wire types and scales.
//!
//! Every data message's layout is declared by a FORMAT message as a string
//! of single-character format codes, one per field. Each code selects a
//! primitive wire type (all little-endian) and, for some codes, a decimal
//! scale factor applied after decoding.

/// Primitive wire type of a single field.
///
/// Fixed-width strings (`Char4`/`Char16`/`Char64`) are nul-padded byte
/// arrays on the wire; everything else is a little-endian scalar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WireType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Float32,
    Int64,
    UInt64,
    Char4,
    Char16,
    Char64,
}

impl WireType {
    /// Encoded width of this type in bytes.
    #[must_use]
    pub fn size(self) -> usize {
        match self {
            Self::Int8 | Self::UInt8 => 1,
            Self::Int16 | Self::UInt16 => 2,
            Self::Int32 | Self::UInt32 | Self::Float32 | Self::Char4 => 4,
            Self::Int64 | Self::UInt64 => 8,
            Self::Char16 => 16,
            Self::Char64 => 64,
        }
    }

}

/// Decoder for one field position: a wire type plus an optional scale.
///
/// Scaled fields multiply the decoded integer by `scale`, producing a
/// floating-point value (e.g. code `c` stores centidegrees as `i16` and
/// decodes to degrees).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldCodec {
    pub wire_type: WireType,
    pub scale: Option<f64>,
}

impl FieldCodec {
    /// Look up the codec for a format character.
    ///
    /// ```text
    /// ┌──────┬─────────┬───────────┐   ┌──────┬─────────┬───────────┐
    /// │ Code │ Type    │ Scale     │   │ Code │ Type    │ Scale     │
    /// ├──────┼─────────┼───────────┤   ├──────┼─────────┼───────────┤
    /// │ b    │ i8      │ —         │   │ c    │ i16     │ 0.01      │
    /// │ B    │ u8      │ —         │   │ C    │ u16     │ 0.01      │
    /// │ h    │ i16     │ —         │   │ e    │ i32     │ 0.01      │
    /// │ H    │ u16     │ —         │   │ E    │ u32     │ 0.01      │
    /// │ i    │ i32     │ —         │   │ L    │ i32     │ 0.0000001 │
    /// │ I    │ u32     │ —         │   │ M    │ i8      │ —         │
    /// │ f    │ f32     │ —         │   │ q    │ i64     │ —         │
    /// │ n    │ char[4] │ —         │   │ Q    │ u64     │ —         │
    /// │ N    │ char[16]│ —         │   │      │         │           │
    /// │ Z    │ char[64]│ —         │   │      │         │           │
    /// └──────┴─────────┴───────────┘   └──────┴─────────┴───────────┘
    /// ```
    ///
    /// Returns `None` for unrecognized codes; callers attach message
    /// name/type context when reporting the failure.
    #[must_use]
    pub fn for_code(code: char) -> Option<Self> {
        let (wire_type, scale) = match code {
            'b' => (WireType::Int8, None),
            'B' => (WireType::UInt8, None),
            'h' => (WireType::Int16, None),
            'H' => (WireType::UInt16, None),
            'i' => (WireType::Int32, None),
            'I' => (WireType::UInt32, None),
            'f' => (WireType::Float32, None),
            'n' => (WireType::Char4, None),
            'N' => (WireType::Char16, None),
            'Z' => (WireType::Char64, None),
            'c' => (WireType::Int16, Some(0.01)),
            'C' => (WireType::UInt16, Some(0.01)),
            'e' => (WireType::Int32, Some(0.01)),
            'E' => (WireType::UInt32, Some(0.01)),
            'L' => (WireType::Int32, Some(0.000_000_1)),
            // Mode enums ride as plain i8; no scale by definition.
            'M' => (WireType::Int8, None),
            'q' => (WireType::Int64, None),
            'Q' => (WireType::UInt64, None),
            _ => return None,
        };
        Some(Self { wire_type, scale })
    }
}
