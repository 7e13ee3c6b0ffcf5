/// Half-open byte range `[start, end)` into the normalized body of a
/// [`Source`](crate::Source).
///
/// Every AST node carries one of these. Line and column are not stored
/// here; they are resolved on demand through
/// [`Source::location()`](crate::Source::location) when a diagnostic
/// needs them.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ByteSpan {
    /// Byte offset of the first byte covered by this span (inclusive).
    pub start: usize,
    /// Byte offset one past the last byte covered by this span
    /// (exclusive).
    pub end: usize,
}

impl ByteSpan {
    /// Creates a new `ByteSpan` from start (inclusive) and end
    /// (exclusive) byte offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns an empty span positioned at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if this span has zero length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `other` lies entirely within this span.
    pub fn contains(&self, other: &ByteSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn merge(self, other: ByteSpan) -> ByteSpan {
        ByteSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}
