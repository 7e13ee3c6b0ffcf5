use crate::ast::AstNode;
use crate::ast::ObjectField;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `{ name: value, ... }`. May be empty. Field order is preserved and
/// duplicate names are not rejected.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectValue {
    pub fields: Vec<ObjectField>,
    pub span: ByteSpan,
}

impl ObjectValue {
    /// Returns the first field called `name`, if any.
    pub fn field(&self, name: &str) -> Option<&ObjectField> {
        self.fields.iter().find(|f| f.name.value == name)
    }
}

#[inherent]
impl AstNode for ObjectValue {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
