/// Categorizes lexical errors for programmatic handling.
///
/// The human-readable message (with the offending character quoted) lives
/// in [`GraphQLParseError::message()`](crate::GraphQLParseError::message).
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexicalErrorKind {
    /// A raw control character outside of a string literal.
    ///
    /// # Example
    /// ```text
    /// { a \u{7} }
    ///     ^ Invalid character "\u0007"
    /// ```
    #[error("invalid character")]
    InvalidCharacter,

    /// A character that cannot start any token, including a `.` that is not
    /// part of `...`.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A digit immediately following a leading `0` (e.g. `01`).
    #[error("unexpected digit after 0")]
    UnexpectedDigit,

    /// A digit run that starts with a non-digit (e.g. `1.`, `1e+`, `-x`).
    #[error("expected digit")]
    ExpectedDigit,

    /// A control character (other than tab) inside a string literal.
    #[error("invalid character within string")]
    InvalidStringCharacter,

    /// End of input or a line break before the closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// An unknown escape, a malformed `\u` escape, or an unpaired
    /// surrogate.
    #[error("invalid escape sequence")]
    InvalidEscapeSequence,
}
