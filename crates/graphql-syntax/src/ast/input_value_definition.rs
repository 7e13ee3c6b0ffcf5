use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::Type;
use crate::ast::Value;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `name: Type = default @directives`.
///
/// Used for input object fields and for the arguments of field and
/// directive definitions. The default value is parsed as a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition {
    pub name: Name,
    pub value_type: Type,
    pub default_value: Option<Value>,
    pub directives: Vec<Directive>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for InputValueDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
