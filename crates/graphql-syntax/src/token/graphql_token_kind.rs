use std::fmt;

/// The kind of a GraphQL token.
///
/// Kinds carry no payload. The text of value-carrying tokens (`Name`,
/// `Int`, `Float`, `String`) lives in [`GraphQLToken::value`], so kinds can
/// be compared with `==` and copied freely.
///
/// # Negative Numeric Literals
///
/// Negative numbers like `-123` are lexed as single tokens (one `Int` whose
/// value is `"-123"`), not as separate minus and number tokens.
///
/// [`GraphQLToken::value`]: crate::token::GraphQLToken::value
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphQLTokenKind {
    /// End of input. Always has an empty span.
    Eof,

    // =========================================================================
    // Punctuators
    // =========================================================================
    /// `!`
    Bang,
    /// `$`
    Dollar,
    /// `(`
    ParenOpen,
    /// `)`
    ParenClose,
    /// `...`
    Ellipsis,
    /// `:`
    Colon,
    /// `=`
    Equals,
    /// `@`
    At,
    /// `[`
    SquareBracketOpen,
    /// `]`
    SquareBracketClose,
    /// `{`
    CurlyBraceOpen,
    /// `|`
    Pipe,
    /// `}`
    CurlyBraceClose,

    // =========================================================================
    // Value-carrying tokens
    // =========================================================================
    /// A name matching `/[_A-Za-z][_0-9A-Za-z]*/`. Keywords such as `query`,
    /// `true` or `null` are ordinary names at this level.
    Name,
    /// An integer literal, including an optional leading `-`.
    Int,
    /// A float literal (has a fractional part, an exponent, or both).
    Float,
    /// A quoted string literal. The token value is the decoded content.
    String,
}

impl GraphQLTokenKind {
    /// Returns the short description used in diagnostics, e.g. `"{"`,
    /// `"Name"` or `"EOF"`.
    pub fn description(&self) -> &'static str {
        match self {
            GraphQLTokenKind::Eof => "EOF",
            GraphQLTokenKind::Bang => "!",
            GraphQLTokenKind::Dollar => "$",
            GraphQLTokenKind::ParenOpen => "(",
            GraphQLTokenKind::ParenClose => ")",
            GraphQLTokenKind::Ellipsis => "...",
            GraphQLTokenKind::Colon => ":",
            GraphQLTokenKind::Equals => "=",
            GraphQLTokenKind::At => "@",
            GraphQLTokenKind::SquareBracketOpen => "[",
            GraphQLTokenKind::SquareBracketClose => "]",
            GraphQLTokenKind::CurlyBraceOpen => "{",
            GraphQLTokenKind::Pipe => "|",
            GraphQLTokenKind::CurlyBraceClose => "}",
            GraphQLTokenKind::Name => "Name",
            GraphQLTokenKind::Int => "Int",
            GraphQLTokenKind::Float => "Float",
            GraphQLTokenKind::String => "String",
        }
    }

    /// Returns `true` for the fixed-text punctuation kinds.
    pub fn is_punctuator(&self) -> bool {
        match self {
            GraphQLTokenKind::Bang
            | GraphQLTokenKind::Dollar
            | GraphQLTokenKind::ParenOpen
            | GraphQLTokenKind::ParenClose
            | GraphQLTokenKind::Ellipsis
            | GraphQLTokenKind::Colon
            | GraphQLTokenKind::Equals
            | GraphQLTokenKind::At
            | GraphQLTokenKind::SquareBracketOpen
            | GraphQLTokenKind::SquareBracketClose
            | GraphQLTokenKind::CurlyBraceOpen
            | GraphQLTokenKind::Pipe
            | GraphQLTokenKind::CurlyBraceClose => true,

            GraphQLTokenKind::Eof
            | GraphQLTokenKind::Name
            | GraphQLTokenKind::Int
            | GraphQLTokenKind::Float
            | GraphQLTokenKind::String => false,
        }
    }

    /// Returns `true` for kinds whose token carries source-derived text.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            GraphQLTokenKind::Name
                | GraphQLTokenKind::Int
                | GraphQLTokenKind::Float
                | GraphQLTokenKind::String,
        )
    }
}

impl fmt::Display for GraphQLTokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
