use crate::ByteSpan;
use crate::Source;

/// Trait implemented by all AST node types.
///
/// All AST node types implement this trait via `#[inherent] impl AstNode`,
/// giving each node both inherent methods (no trait import needed) and a
/// trait bound for generic utilities such as span checkers and error
/// formatters.
pub trait AstNode {
    /// The byte range of this node in the normalized source.
    fn span(&self) -> ByteSpan;

    /// Returns the exact source text this node was parsed from.
    ///
    /// `source` must be the [`Source`] the node was parsed from; any other
    /// source yields unrelated text (or `""` if the span is out of range).
    fn source_text<'s>(&self, source: &'s Source) -> &'s str {
        source.slice(self.span())
    }
}
