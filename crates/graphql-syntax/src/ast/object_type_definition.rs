use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `type Name implements A B @directives { fields }`.
///
/// Implemented interfaces are listed as bare names separated by whitespace
/// or commas. The field list may be empty.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition {
    pub name: Name,
    pub interfaces: Vec<NamedType>,
    pub directives: Vec<Directive>,
    pub fields: Vec<FieldDefinition>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for ObjectTypeDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
