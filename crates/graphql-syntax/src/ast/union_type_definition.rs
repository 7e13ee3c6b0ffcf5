use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `union Name @directives = A | B`. Has at least one member.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub types: Vec<NamedType>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for UnionTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
