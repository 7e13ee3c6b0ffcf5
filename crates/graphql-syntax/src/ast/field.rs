use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::SelectionSet;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// A field selection: `alias: name(args) @directives { ... }`.
///
/// Whether a field needs a sub-selection depends on its type, which is a
/// validation concern; the parser accepts either form.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub alias: Option<Name>,
    pub name: Name,
    pub arguments: Vec<Argument>,
    pub directives: Vec<Directive>,
    pub selection_set: Option<SelectionSet>,
    pub span: ByteSpan,
}

impl Field {
    /// The key this field contributes to a response: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &str {
        self.alias.as_ref().unwrap_or(&self.name).as_str()
    }
}

#[inherent]
impl AstNode for Field {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
