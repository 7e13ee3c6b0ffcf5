use crate::ast::AstNode;
use crate::ast::Type;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `[Inner]`.
#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub of_type: Box<Type>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ListType {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
