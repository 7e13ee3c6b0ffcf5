use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `enum Name @directives { A B C }`. Has at least one value.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub values: Vec<EnumValueDefinition>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for EnumTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
