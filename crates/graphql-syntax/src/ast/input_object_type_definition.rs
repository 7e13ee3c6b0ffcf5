use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `input Name @directives { fields }`. The field list may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<InputValueDefinition>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for InputObjectTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
