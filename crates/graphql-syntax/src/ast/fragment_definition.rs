use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `fragment Name on Type @directives { ... }`.
///
/// A fragment may not be named `on`; the parser rejects that spelling.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition {
    pub name: Name,
    pub type_condition: NamedType,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for FragmentDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
