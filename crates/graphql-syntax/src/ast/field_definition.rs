use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::InputValueDefinition;
use crate::ast::Name;
use crate::ast::Type;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A field of an object or interface type: `name(args): Type @directives`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: Name,
    pub arguments: Vec<InputValueDefinition>,
    pub field_type: Type,
    pub directives: Vec<Directive>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for FieldDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
