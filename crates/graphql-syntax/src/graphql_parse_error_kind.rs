use crate::LexicalErrorKind;

/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains minimal data needed for programmatic decisions.
/// The full human-readable message is in
/// [`GraphQLParseError::message()`](crate::GraphQLParseError::message).
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// A malformed token. See [`LexicalErrorKind`] for the categories.
    #[error("lexical error: {0}")]
    Lexical(LexicalErrorKind),

    /// A specific token kind was required but something else was found.
    ///
    /// # Example
    /// ```text
    /// type User { name String }
    ///                  ^^^^^^ Expected :, found Name "String"
    /// ```
    #[error("expected `{expected}`, found `{found}`")]
    UnexpectedToken {
        /// Description of the expected kind (e.g. `":"`, `"Name"`).
        expected: String,
        /// Display form of the token that was found.
        found: String,
    },

    /// A specific keyword was required but something else was found.
    ///
    /// # Example
    /// ```text
    /// fragment Foo In Bar { id }
    ///              ^^ Expected "on", found Name "In"
    /// ```
    #[error("expected keyword `{expected}`, found `{found}`")]
    UnexpectedKeyword {
        /// The required keyword.
        expected: String,
        /// Display form of the token that was found.
        found: String,
    },

    /// No production accepts the current token.
    ///
    /// # Example
    /// ```text
    /// input Foo { bar: Int = $x }
    ///                        ^ Unexpected $
    /// ```
    #[error("unexpected `{found}`")]
    Unexpected {
        /// Display form of the token that was found.
        found: String,
    },

    /// Values, selection sets or type references nested too deeply.
    #[error("maximum nesting depth exceeded")]
    MaxDepthExceeded,
}

impl GraphQLParseErrorKind {
    /// Returns `true` if the error was raised by the lexer.
    pub fn is_lexical(&self) -> bool {
        matches!(self, GraphQLParseErrorKind::Lexical(_))
    }

    /// Returns `true` if the error was raised by the parser.
    pub fn is_syntax(&self) -> bool {
        !self.is_lexical()
    }
}
