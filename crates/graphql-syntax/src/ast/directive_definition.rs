use crate::ast::AstNode;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `directive @name(args) on LOCATION | LOCATION`.
///
/// Locations are kept as names; checking them against the set of known
/// locations is left to validation.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub locations: Vec<Name>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for DirectiveDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
