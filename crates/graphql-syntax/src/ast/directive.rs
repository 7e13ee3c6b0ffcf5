use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Name;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A directive annotation: `@name(arg: value, ...)`.
///
/// Annotations on executable constructs may reference variables in their
/// arguments. Annotations on type-system constructs are parsed in the
/// constant context and never do.
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub span: ByteSpan,
}

#[inherent]
impl AstNode for Directive {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
