use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::OperationTypeDefinition;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `schema @directives { query: Query mutation: Mutation }`.
///
/// The body holds at least one operation type definition.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition {
    pub directives: Vec<Directive>,
    pub operation_types: Vec<OperationTypeDefinition>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
