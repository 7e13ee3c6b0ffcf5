use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::NamedType;
use crate::ast::SelectionSet;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `... on Type @directives { ... }`. The type condition is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment {
    pub type_condition: Option<NamedType>,
    pub directives: Vec<Directive>,
    pub selection_set: SelectionSet,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for InlineFragment {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
