use memchr::memmem;
use std::fmt;
use std::sync::LazyLock;

/// Shared line-break matcher used by every [`SourceLocation::resolve()`]
/// call. Built on first use, never mutated afterwards.
static LINE_BREAK_FINDER: LazyLock<memmem::Finder<'static>> =
    LazyLock::new(|| memmem::Finder::new("\n"));

/// A human-oriented position in a [`Source`](crate::Source), derived from a
/// byte offset.
///
/// # Indexing Convention
///
/// **All values are 1-based:**
/// - `line`: 1 = first line of the document
/// - `column`: Unicode scalar values since the last line break, plus one
/// - `column_utf16`: UTF-16 code units since the last line break, plus one
///
/// For ASCII text both columns are equal. Characters outside the Basic
/// Multilingual Plane advance `column` by 1 and `column_utf16` by 2, which
/// is what LSP clients expect.
///
/// Locations are never stored on tokens or AST nodes; they are computed by
/// scanning the body each time a diagnostic asks for one.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SourceLocation {
    line: usize,
    column: usize,
    column_utf16: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, column_utf16: usize) -> Self {
        Self {
            line,
            column,
            column_utf16,
        }
    }

    /// Resolves `offset` against a (normalized) body.
    ///
    /// Offsets past the end clamp to `body.len()`. Offsets that land inside
    /// a multi-byte character clamp down to the start of that character.
    pub fn resolve(body: &str, offset: usize) -> Self {
        let mut offset = offset.min(body.len());
        while !body.is_char_boundary(offset) {
            offset -= 1;
        }
        let prefix = &body[..offset];

        let mut line = 1;
        let mut line_start = 0;
        for line_break in LINE_BREAK_FINDER.find_iter(prefix.as_bytes()) {
            line += 1;
            line_start = line_break + 1;
        }

        let current_line = &prefix[line_start..];
        Self {
            line,
            column: current_line.chars().count() + 1,
            column_utf16: current_line.encode_utf16().count() + 1,
        }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column, counted in Unicode scalar values.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 1-based column, counted in UTF-16 code units.
    pub fn column_utf16(&self) -> usize {
        self.column_utf16
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
