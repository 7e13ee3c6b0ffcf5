use crate::ast::AstNode;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A variable reference: `$` followed by a name.
///
/// The span starts at the `$`; `name.span` covers only the name.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub name: Name,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for Variable {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
