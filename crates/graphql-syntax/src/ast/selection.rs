use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A single selection within a selection set.
#[allow(clippy::large_enum_variant)]
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Field),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}

#[inherent]
impl AstNode for Selection {
    pub fn span(&self) -> ByteSpan {
        match self {
            Selection::Field(s) => s.span,
            Selection::FragmentSpread(s) => s.span,
            Selection::InlineFragment(s) => s.span,
        }
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
