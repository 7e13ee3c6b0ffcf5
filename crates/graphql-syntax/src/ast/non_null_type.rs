use crate::ast::AstNode;
use crate::ast::ListType;
use crate::ast::NamedType;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// `Inner!`.
///
/// The wrapped type is a [`NullableType`], so `Int!!` cannot be
/// represented.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub of_type: NullableType,
    pub span: ByteSpan,
}

/// The types a [`NonNullType`] may wrap.
#[derive(Clone, Debug, PartialEq)]
pub enum NullableType {
    Named(NamedType),
    List(ListType),
}

#[inherent]
impl AstNode for NonNullType {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}

#[inherent]
impl AstNode for NullableType {
    pub fn span(&self) -> ByteSpan {
        match self {
            NullableType::Named(t) => t.span,
            NullableType::List(t) => t.span,
        }
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
