use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `true` or `false`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BooleanValue {
    pub value: bool,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for BooleanValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
