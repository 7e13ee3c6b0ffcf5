use crate::ast::AstNode;
use crate::ast::Definition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ByteSpan;
use crate::Source;
use inherent::inherent;

/// Root AST node for any GraphQL document.
///
/// A document holds its definitions in source order. Executable
/// definitions (operations, fragments) and type-system definitions may be
/// freely mixed. An empty (or whitespace-only) document has no definitions
/// and the span `0..0`.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub span: ByteSpan,
}

impl Document {
    /// Iterates over the operation definitions, in source order.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Operation(op) => Some(op),
            _ => None,
        })
    }

    /// Iterates over the fragment definitions, in source order.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition> {
        self.definitions.iter().filter_map(|definition| match definition {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        })
    }
}

#[inherent]
impl AstNode for Document {
    pub fn span(&self) -> ByteSpan {
        self.span
    }

    pub fn source_text<'s>(&self, source: &'s Source) -> &'s str;
}
