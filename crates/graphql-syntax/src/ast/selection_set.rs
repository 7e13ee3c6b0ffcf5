use crate::ast::AstNode;
use crate::ast::Selection;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A `{`-delimited list of one or more selections.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionSet {
    pub selections: Vec<Selection>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for SelectionSet {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
