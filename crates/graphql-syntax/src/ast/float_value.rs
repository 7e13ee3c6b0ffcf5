use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A float literal, kept as its raw source text (e.g. `"1.5e10"`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FloatValue {
    pub value: String,
    pub span: ByteSpan,
}

impl FloatValue {
    /// Parses the literal as an `f64`.
    ///
    /// Every lexically valid GraphQL float is accepted by Rust's float
    /// parser, so this only returns `None` for hand-built nodes.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.parse().ok()
    }
}

#[inherent]
impl AstNode for FloatValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
