use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `name: value` inside an object literal.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Name,
    pub value: Value,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ObjectField {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
