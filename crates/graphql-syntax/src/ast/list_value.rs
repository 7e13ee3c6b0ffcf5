use crate::ast::AstNode;
use crate::ast::Value;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `[value, ...]`. May be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ListValue {
    pub values: Vec<Value>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ListValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
