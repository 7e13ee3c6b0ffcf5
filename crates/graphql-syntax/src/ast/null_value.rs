use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `null`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NullValue {
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for NullValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
