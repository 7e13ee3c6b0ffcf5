use crate::ByteSpan;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;
use std::fmt;

/// One lexical unit: its kind, its byte span in the normalized source, and
/// its text.
///
/// Tokens are transient. The parser holds exactly one at a time and copies
/// what it needs into owned AST nodes.
///
/// `value` borrows from the source for names, numbers, and strings without
/// escape sequences. A string containing escapes owns its decoded text.
/// Punctuators and `Eof` carry an empty value.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphQLToken<'src> {
    pub kind: GraphQLTokenKind,
    pub span: ByteSpan,
    pub value: Cow<'src, str>,
}

impl<'src> GraphQLToken<'src> {
    /// Creates a token that carries text.
    pub fn new(
        kind: GraphQLTokenKind,
        span: ByteSpan,
        value: impl Into<Cow<'src, str>>,
    ) -> Self {
        Self {
            kind,
            span,
            value: value.into(),
        }
    }

    /// Creates a punctuator (or `Eof`) token with an empty value.
    pub fn punctuator(kind: GraphQLTokenKind, span: ByteSpan) -> Self {
        Self {
            kind,
            span,
            value: Cow::Borrowed(""),
        }
    }

    /// Returns `true` if this is a `Name` token spelled exactly `keyword`.
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == GraphQLTokenKind::Name && self.value == keyword
    }
}

/// Renders the token the way diagnostics quote it: `Name "foo"` for
/// value-carrying kinds, the bare description (`{`, `EOF`) otherwise.
impl fmt::Display for GraphQLToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.has_value() {
            write!(f, "{} \"{}\"", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
