use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// An operation definition (query, mutation, or subscription).
///
/// The shorthand form `{ ... }` produces a `Query` with no name, no
/// variable definitions and no directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Name>,
    pub variable_definitions: Vec<VariableDefinition>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for OperationDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
