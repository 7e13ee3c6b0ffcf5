use crate::ByteSpan;
use crate::SourceLocation;
use std::ops::Range;

/// The text of one GraphQL document together with a diagnostic name.
///
/// Line endings are normalized once, at construction: every `\r\n` and
/// every lone `\r` becomes `\n`. All offsets reported by the lexer, the
/// parser and the AST are byte offsets into this normalized body, so a
/// caller that wants to map them back onto its original text must apply
/// the same normalization first. Callers that index text in UTF-16 code
/// units convert with [`utf16_offset()`](Self::utf16_offset) and
/// [`utf16_range()`](Self::utf16_range).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Source {
    body: String,
    name: String,
}

impl Source {
    /// Name used when the caller does not provide one.
    pub const DEFAULT_NAME: &'static str = "GraphQL";

    /// Creates a source named [`Source::DEFAULT_NAME`].
    pub fn new(body: impl Into<String>) -> Self {
        Self::with_name(body, Self::DEFAULT_NAME)
    }

    /// Creates a source with an explicit diagnostic name (typically a file
    /// path).
    pub fn with_name(body: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            body: normalize_line_endings(body.into()),
            name: name.into(),
        }
    }

    /// The normalized text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The diagnostic name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Length of the normalized body in bytes.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Resolves a byte offset into a 1-based line/column pair.
    ///
    /// See [`SourceLocation::resolve()`] for clamping rules.
    pub fn location(&self, offset: usize) -> SourceLocation {
        SourceLocation::resolve(&self.body, offset)
    }

    /// Converts a byte offset into a count of UTF-16 code units from the
    /// start of the body.
    ///
    /// Offsets past the end clamp to the end of the body. Offsets inside a
    /// multi-byte character clamp down to the start of that character.
    pub fn utf16_offset(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.body.len());
        while !self.body.is_char_boundary(offset) {
            offset -= 1;
        }
        self.body[..offset].encode_utf16().count()
    }

    /// Converts `span` into a range of UTF-16 code units.
    pub fn utf16_range(&self, span: ByteSpan) -> Range<usize> {
        let start = self.utf16_offset(span.start);
        let end = self.utf16_offset(span.end).max(start);
        start..end
    }

    /// Returns the text covered by `span`, or `""` if the span does not
    /// describe a valid range of this body.
    pub fn slice(&self, span: ByteSpan) -> &str {
        self.body.get(span.start..span.end).unwrap_or("")
    }
}

impl Default for Source {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl From<&str> for Source {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

impl From<String> for Source {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

fn normalize_line_endings(body: String) -> String {
    if memchr::memchr(b'\r', body.as_bytes()).is_none() {
        return body;
    }
    body.replace("\r\n", "\n").replace('\r', "\n")
}
