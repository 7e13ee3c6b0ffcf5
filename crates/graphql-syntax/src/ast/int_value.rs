use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// An integer literal, kept as its raw source text (e.g. `"-123"`).
///
/// GraphQL integers are not bounded by the grammar, so conversion is left
/// to the caller; [`as_i64()`](Self::as_i64) covers the common case.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IntValue {
    pub value: String,
    pub span: ByteSpan,
}

impl IntValue {
    /// Parses the literal as an `i64`, or `None` if it does not fit.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.parse().ok()
    }
}

#[inherent]
impl AstNode for IntValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
