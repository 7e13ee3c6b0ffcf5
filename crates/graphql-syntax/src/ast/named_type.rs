use crate::ast::AstNode;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A reference to a type by name, e.g. `User` in `user: User` or in
/// `... on User`.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedType {
    pub name: Name,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for NamedType {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
