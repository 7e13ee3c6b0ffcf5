use crate::ast::AstNode;
use crate::ast::Type;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `$name: Type = default` inside an operation's parentheses.
///
/// The default value is always parsed as a constant, so it never contains
/// a [`Value::Variable`].
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition {
    pub variable: Variable,
    pub var_type: Type,
    pub default_value: Option<Value>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for VariableDefinition {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
