use crate::ast::AstNode;
use crate::ast::NamedType;
use crate::ast::OperationType;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// One `operation: Type` entry of a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationTypeDefinition {
    pub operation: OperationType,
    pub named_type: NamedType,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for OperationTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
