use crate::ast::AstNode;
use crate::ast::ObjectTypeDefinition;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `extend type ...`: an object type definition that adds to an existing
/// type. The span starts at `extend`; the wrapped definition's span starts
/// at `type`.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeExtensionDefinition {
    pub definition: ObjectTypeDefinition,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for TypeExtensionDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
