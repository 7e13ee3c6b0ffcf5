use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// One value of an enum type, with its (constant) directives.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for EnumValueDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
