use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A string literal.
///
/// `value` holds the decoded content (escapes resolved, quotes removed).
/// The span covers the literal including its quotes, so
/// [`source_text()`](AstNode::source_text) returns the raw spelling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StringValue {
    pub value: String,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for StringValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
