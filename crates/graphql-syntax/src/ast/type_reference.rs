use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullableType;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A type reference as written in a variable definition, field definition
/// or input value definition: `Int`, `[Int]`, `[Int!]!`, ...
#[derive(Clone, Debug, PartialEq)]
pub enum Type {
    Named(NamedType),
    List(ListType),
    NonNull(Box<NonNullType>),
}

impl Type {
    /// Returns the innermost named type, e.g. `Int` for `[[Int!]]!`.
    pub fn innermost_named_type(&self) -> &NamedType {
        match self {
            Type::Named(named) => named,
            Type::List(list) => list.of_type.innermost_named_type(),
            Type::NonNull(non_null) => match &non_null.of_type {
                NullableType::Named(named) => named,
                NullableType::List(list) => list.of_type.innermost_named_type(),
            },
        }
    }

    /// Returns `true` if the outermost wrapper is `!`.
    pub fn is_non_null(&self) -> bool {
        matches!(self, Type::NonNull(_))
    }
}

impl From<NullableType> for Type {
    fn from(nullable: NullableType) -> Self {
        match nullable {
            NullableType::Named(named) => Type::Named(named),
            NullableType::List(list) => Type::List(list),
        }
    }
}

#[inherent]
impl AstNode for Type {
    pub fn span(&self) -> ByteSpan {
        match self {
            Type::Named(t) => t.span,
            Type::List(t) => t.span,
            Type::NonNull(t) => t.span,
        }
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
