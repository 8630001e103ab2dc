/// Growable buffer over the unconsumed tail of the input stream.
///
/// Appending a chunk first discards everything before the read cursor, so
/// memory stays bounded by one chunk plus at most one message's worth of
/// carry-over, regardless of total stream length. The window also tracks
/// how many bytes it has discarded, so absolute stream offsets survive
/// compaction and show up correctly in error messages.
///
/// Invariant: `cursor <= buf.len()`.
#[derive(Debug, Default)]
pub struct ByteWindow {
    buf: Vec<u8>,
    cursor: usize,
    discarded: usize,
}

impl ByteWindow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk, compacting the consumed prefix first.
    pub fn append(&mut self, chunk: &[u8]) {
        self.buf.drain(..self.cursor);
        self.discarded += self.cursor;
        self.cursor = 0;
        self.buf.extend_from_slice(chunk);
    }

    /// Number of unconsumed bytes.
    #[must_use]
    pub fn available(&self) -> usize {
        self.buf.len() - self.cursor
    }

    /// Borrow `len` unconsumed bytes at the cursor, or `None` if fewer
    /// are buffered.
    #[must_use]
    pub fn take(&self, len: usize) -> Option<&[u8]> {
        self.buf.get(self.cursor..self.cursor + len)
    }

    /// Consume `n` bytes. Clamped to the bytes actually available.
    pub fn advance(&mut self, n: usize) {
        self.cursor = (self.cursor + n).min(self.buf.len());
    }

    /// Absolute stream offset of the cursor.
    #[must_use]
    pub fn stream_offset(&self) -> usize {
        self.discarded + self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::ByteWindow;

    #[test]
    fn append_then_consume() {
        let mut w = ByteWindow::new();
        w.append(&[1, 2, 3, 4]);
        assert_eq!(w.available(), 4);
        assert_eq!(w.take(1), Some(&[1][..]));

        w.advance(2);
        assert_eq!(w.available(), 2);
        assert_eq!(w.take(2), Some(&[3, 4][..]));
        assert_eq!(w.take(3), None);
    }

    #[test]
    fn append_compacts_consumed_prefix() {
        let mut w = ByteWindow::new();
        w.append(&[1, 2, 3, 4]);
        w.advance(3);
        w.append(&[5, 6]);

        // Only the unconsumed tail survives, with the new chunk after it.
        assert_eq!(w.available(), 3);
        assert_eq!(w.take(3), Some(&[4, 5, 6][..]));
        assert_eq!(w.stream_offset(), 3);
    }

    #[test]
    fn stream_offset_spans_compactions() {
        let mut w = ByteWindow::new();
        w.append(&[0; 100]);
        w.advance(100);
        w.append(&[0; 50]);
        w.advance(25);
        assert_eq!(w.stream_offset(), 125);
    }

    #[test]
    fn advance_clamps_to_buffer() {
        let mut w = ByteWindow::new();
        w.append(&[1, 2]);
        w.advance(10);
        assert_eq!(w.available(), 0);
    }
}
