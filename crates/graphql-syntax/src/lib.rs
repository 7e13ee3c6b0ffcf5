//! A GraphQL front-end: source handling, lexing, and parsing of documents
//! that may mix executable definitions (operations and fragments) with
//! type-system definitions.
//!
//! The pipeline is:
//!
//! 1. [`Source`] normalizes line endings and carries a display name.
//! 2. [`lex()`] reads exactly one [`GraphQLToken`](token::GraphQLToken) at a
//!    given byte offset. It is pure and can be called at any position.
//! 3. [`GraphQLParser`] pulls tokens on demand and builds an owned
//!    [`ast::Document`], stopping at the first error.
//!
//! Errors carry a byte offset into the normalized source. Line and column
//! are computed only when asked for, via [`Source::location()`] or
//! [`GraphQLParseError::format_detailed()`].
//!
//! ```
//! let doc = graphql_syntax::parse("{ hero { name } }").unwrap();
//! assert_eq!(doc.definitions.len(), 1);
//!
//! let err = graphql_syntax::parse("{ hero(").unwrap_err();
//! assert_eq!(err.message(), "Expected Name, found EOF");
//! ```

pub mod ast;
mod byte_span;
mod definition_keyword;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod lexer;
mod lexical_error_kind;
mod source;
mod source_location;
pub mod token;

pub use byte_span::ByteSpan;
pub use definition_keyword::DefinitionKeyword;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use lexer::GraphQLLexer;
pub use lexer::lex;
pub use lexical_error_kind::LexicalErrorKind;
pub use source::Source;
pub use source_location::SourceLocation;

/// Parses `text` as a document named [`Source::DEFAULT_NAME`].
///
/// Offsets in the returned AST and in any error refer to the text after
/// line-ending normalization. Use [`parse_source()`] when the caller needs
/// that normalized text to slice spans or resolve locations.
pub fn parse(text: &str) -> Result<ast::Document, GraphQLParseError> {
    parse_source(&Source::new(text))
}

/// Parses `text` as a document, naming it `name` in diagnostics.
pub fn parse_with_name(
    text: &str,
    name: &str,
) -> Result<ast::Document, GraphQLParseError> {
    parse_source(&Source::with_name(text, name))
}

/// Parses an already-built [`Source`].
pub fn parse_source(source: &Source) -> Result<ast::Document, GraphQLParseError> {
    tracing::debug!(source = source.name(), len = source.len(), "parsing document");
    let document = GraphQLParser::new(source)?.parse_document()?;
    tracing::debug!(
        source = source.name(),
        definitions = document.definitions.len(),
        "parsed document"
    );
    Ok(document)
}

#[cfg(test)]
mod tests;
