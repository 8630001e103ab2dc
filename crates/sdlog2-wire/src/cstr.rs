//! Fixed-width nul-terminated string fields.

/// Decode a fixed-width string field, trimming at the first nul byte.
///
/// Bytes after the terminator are padding and are discarded regardless of
/// content. Non-UTF-8 bytes before the terminator are replaced rather than
/// rejected — field names and labels are ASCII in practice, but a corrupt
/// stream must not abort decoding here (structural errors are caught by
/// header sync, not string content).
#[must_use]
pub fn parse_cstr(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
