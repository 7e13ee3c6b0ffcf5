use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::NullValue;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A GraphQL input value.
///
/// `Variable` only appears where the parser was in the variable-permitting
/// context (field and executable-directive arguments). Default values and
/// type-system directive arguments never contain one, at any depth.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Variable),
    Int(IntValue),
    Float(FloatValue),
    String(StringValue),
    Boolean(BooleanValue),
    Null(NullValue),
    Enum(EnumValue),
    List(ListValue),
    Object(ObjectValue),
}

impl Value {
    /// Returns `true` if this value contains no variable reference at any
    /// depth.
    pub fn is_constant(&self) -> bool {
        match self {
            Value::Variable(_) => false,
            Value::List(list) => list.values.iter().all(Value::is_constant),
            Value::Object(object) => object.fields.iter().all(|f| f.value.is_constant()),
            Value::Int(_)
            | Value::Float(_)
            | Value::String(_)
            | Value::Boolean(_)
            | Value::Null(_)
            | Value::Enum(_) => true,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn span(&self) -> ByteSpan {
        match self {
            Value::Variable(v) => v.span,
            Value::Int(v) => v.span,
            Value::Float(v) => v.span,
            Value::String(v) => v.span,
            Value::Boolean(v) => v.span,
            Value::Null(v) => v.span,
            Value::Enum(v) => v.span,
            Value::List(v) => v.span,
            Value::Object(v) => v.span,
        }
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
