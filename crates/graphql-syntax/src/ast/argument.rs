use crate::ast::AstNode;
use crate::ast::Name;
use crate::ast::Value;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `name: value` inside a field's or directive's parentheses.
#[derive(Clone, Debug, PartialEq)]
pub struct Argument {
    pub name: Name,
    pub value: Value,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for Argument {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
