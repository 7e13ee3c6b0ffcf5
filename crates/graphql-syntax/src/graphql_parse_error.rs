use crate::GraphQLParseErrorKind;
use crate::LexicalErrorKind;
use crate::Source;
use crate::SourceLocation;

/// A lexical or syntax error, fatal to the parse that raised it.
///
/// Parsing stops at the first error, so there is never more than one per
/// parse and never a partial AST alongside it.
///
/// The error records the byte offset (into the normalized body) where the
/// problem was detected. Line and column are derived on demand with
/// [`location()`](Self::location), which needs the same [`Source`] that was
/// parsed.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{source_name} (offset {offset}): {message}")]
pub struct GraphQLParseError {
    /// Human-readable message, e.g. `Expected Name, found EOF` or
    /// `Unterminated string`.
    message: String,

    /// Diagnostic name of the [`Source`] that was being parsed.
    source_name: String,

    /// Byte offset of the offending token or character.
    offset: usize,

    /// Categorized error kind for programmatic handling.
    kind: GraphQLParseErrorKind,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        source_name: impl Into<String>,
        offset: usize,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            source_name: source_name.into(),
            offset,
            kind,
        }
    }

    /// Creates an error raised by the lexer.
    pub fn lexical(
        message: impl Into<String>,
        source: &Source,
        offset: usize,
        kind: LexicalErrorKind,
    ) -> Self {
        Self::new(
            message,
            source.name(),
            offset,
            GraphQLParseErrorKind::Lexical(kind),
        )
    }

    /// Returns the human-readable error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the diagnostic name of the source that failed to parse.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Returns the byte offset where the error was detected.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the error offset counted in UTF-16 code units, as indexed by
    /// hosts whose strings are UTF-16.
    ///
    /// `source` must be the same source the error came from.
    pub fn utf16_offset(&self, source: &Source) -> usize {
        source.utf16_offset(self.offset)
    }

    /// Returns the categorized error kind.
    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    /// Resolves the error offset to a line/column pair.
    ///
    /// `source` must be the same source the error came from.
    pub fn location(&self, source: &Source) -> SourceLocation {
        source.location(self.offset)
    }

    /// Formats this error as a single-line summary.
    ///
    /// Produces output like:
    /// ```text
    /// schema.graphql:5:12: error: Expected :, found Name "String"
    /// ```
    pub fn format_oneline(&self, source: &Source) -> String {
        let location = self.location(source);
        format!(
            "{}:{}:{}: error: {}",
            self.source_name,
            location.line(),
            location.column(),
            self.message,
        )
    }

    /// Formats this error as a diagnostic with a source snippet.
    ///
    /// Produces output like:
    /// ```text
    /// error: Expected :, found Name "String"
    ///   --> schema.graphql:5:12
    ///    |
    ///  5 |     userName String
    ///    |              ^
    /// ```
    pub fn format_detailed(&self, source: &Source) -> String {
        let location = self.location(source);
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');
        output.push_str(&format!(
            "  --> {}:{}:{}\n",
            self.source_name,
            location.line(),
            location.column(),
        ));

        if let Some(snippet) = Self::format_source_snippet(source, location) {
            output.push_str(&snippet);
        }

        output
    }

    fn format_source_snippet(source: &Source, location: SourceLocation) -> Option<String> {
        let line_content = source.body().split('\n').nth(location.line() - 1)?;
        let display_line_num = location.line();
        let line_num_width = display_line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{display_line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "{:>width$} | {:>padding$}^\n",
            "",
            "",
            width = line_num_width,
            padding = location.column() - 1,
        ));

        Some(output)
    }
}
