use crate::ast::AstNode;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A GraphQL name (identifier).
///
/// Names are used for type names, field names, argument names, directive
/// names, enum values, and more. Keywords such as `query` or `on` are plain
/// names at the lexical level; the parser decides from context whether a
/// name is acting as a keyword.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Name {
    pub value: String,
    pub span: ByteSpan,
}

impl Name {
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

#[inherent]
impl AstNode for Name {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
