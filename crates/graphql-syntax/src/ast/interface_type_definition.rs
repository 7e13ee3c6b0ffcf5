use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `interface Name @directives { fields }`. The field list may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition {
    pub name: Name,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for InterfaceTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
