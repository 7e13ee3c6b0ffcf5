//! The GraphQL lexer.
//!
//! [`lex()`] is a pure function from `(source, position)` to the next
//! token. It keeps no state between calls: the parser re-invokes it from the
//! end of the previous token every time it advances. [`GraphQLLexer`] wraps
//! it in an [`Iterator`] for callers that want the whole token stream.
//!
//! Token values borrow from the source text where possible. Only string
//! literals that contain escape sequences allocate, and they allocate a
//! fresh buffer per call, so concurrent lexing of the same [`Source`] is
//! safe.
//!
//! # Usage
//!
//! ```rust
//! use graphql_syntax::GraphQLLexer;
//! use graphql_syntax::Source;
//! use graphql_syntax::token::GraphQLTokenKind;
//!
//! let source = Source::new("{ name }");
//! let kinds: Vec<_> = GraphQLLexer::new(&source)
//!     .map(|token| token.map(|t| t.kind))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(kinds, vec![
//!     GraphQLTokenKind::CurlyBraceOpen,
//!     GraphQLTokenKind::Name,
//!     GraphQLTokenKind::CurlyBraceClose,
//!     GraphQLTokenKind::Eof,
//! ]);
//! ```

use crate::ByteSpan;
use crate::GraphQLParseError;
use crate::LexicalErrorKind;
use crate::Source;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// Lexes the next token of `source`, starting at byte offset `position`.
///
/// Insignificant characters (whitespace, commas, the byte-order mark, and
/// `#` comments) are skipped first. At end of input an `Eof` token with an
/// empty span is returned; calling again from its end returns another
/// `Eof`.
///
/// A `position` past the end of the body is treated as the end. A
/// `position` inside a multi-byte character is moved back to the start of
/// that character.
pub fn lex<'src>(
    source: &'src Source,
    position: usize,
) -> Result<GraphQLToken<'src>, GraphQLParseError> {
    let body = source.body();
    let mut position = position.min(body.len());
    while !body.is_char_boundary(position) {
        position -= 1;
    }

    Lexer {
        source,
        body,
        curr_byte_offset: position,
    }
    .next_token()
}

/// An [`Iterator`] over the tokens of a [`Source`].
///
/// Yields the `Eof` token once and then stops. After yielding an error it
/// also stops, since the lexer has no way to resynchronize.
pub struct GraphQLLexer<'src> {
    source: &'src Source,
    position: usize,
    finished: bool,
}

impl<'src> GraphQLLexer<'src> {
    pub fn new(source: &'src Source) -> Self {
        Self {
            source,
            position: 0,
            finished: false,
        }
    }
}

impl<'src> Iterator for GraphQLLexer<'src> {
    type Item = Result<GraphQLToken<'src>, GraphQLParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match lex(self.source, self.position) {
            Ok(token) => {
                self.position = token.span.end;
                if token.kind == GraphQLTokenKind::Eof {
                    self.finished = true;
                }
                Some(Ok(token))
            },
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            },
        }
    }
}

/// Single-use cursor behind [`lex()`]. Lives for exactly one token.
struct Lexer<'src> {
    source: &'src Source,

    /// The normalized body of `source`.
    body: &'src str,

    /// Current byte offset from the start of `body`.
    curr_byte_offset: usize,
}

impl<'src> Lexer<'src> {
    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    /// Returns the remaining source text to be lexed.
    fn remaining(&self) -> &'src str {
        &self.body[self.curr_byte_offset..]
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character.
    fn consume(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.curr_byte_offset += ch.len_utf8();
        Some(ch)
    }

    fn make_span(&self, start: usize) -> ByteSpan {
        ByteSpan::new(start, self.curr_byte_offset)
    }

    fn punctuator(
        &mut self,
        kind: GraphQLTokenKind,
        start: usize,
        len: usize,
    ) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        self.curr_byte_offset += len;
        Ok(GraphQLToken::punctuator(kind, self.make_span(start)))
    }

    fn error(
        &self,
        message: String,
        offset: usize,
        kind: LexicalErrorKind,
    ) -> GraphQLParseError {
        tracing::debug!(
            source = self.source.name(),
            offset,
            %message,
            "lexical error"
        );
        GraphQLParseError::lexical(message, self.source, offset, kind)
    }

    // =========================================================================
    // Lexer main dispatch
    // =========================================================================

    fn next_token(mut self) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        self.skip_ignored();

        let start = self.curr_byte_offset;
        match self.peek_char() {
            None => Ok(GraphQLToken::punctuator(
                GraphQLTokenKind::Eof,
                ByteSpan::empty_at(start),
            )),

            // Tab, LF and CR never get here: they are skipped above.
            Some(ch) if ch < '\u{0020}' => Err(self.error(
                format!("Invalid character \"{}\"", unicode_escape(ch)),
                start,
                LexicalErrorKind::InvalidCharacter,
            )),

            Some('!') => self.punctuator(GraphQLTokenKind::Bang, start, 1),
            Some('$') => self.punctuator(GraphQLTokenKind::Dollar, start, 1),
            Some('(') => self.punctuator(GraphQLTokenKind::ParenOpen, start, 1),
            Some(')') => self.punctuator(GraphQLTokenKind::ParenClose, start, 1),
            Some(':') => self.punctuator(GraphQLTokenKind::Colon, start, 1),
            Some('=') => self.punctuator(GraphQLTokenKind::Equals, start, 1),
            Some('@') => self.punctuator(GraphQLTokenKind::At, start, 1),
            Some('[') => self.punctuator(GraphQLTokenKind::SquareBracketOpen, start, 1),
            Some(']') => self.punctuator(GraphQLTokenKind::SquareBracketClose, start, 1),
            Some('{') => self.punctuator(GraphQLTokenKind::CurlyBraceOpen, start, 1),
            Some('|') => self.punctuator(GraphQLTokenKind::Pipe, start, 1),
            Some('}') => self.punctuator(GraphQLTokenKind::CurlyBraceClose, start, 1),

            // Only an adjacent `...` is a token. Any other dot sequence is
            // reported like any other stray character.
            Some('.') if self.remaining().starts_with("...") => {
                self.punctuator(GraphQLTokenKind::Ellipsis, start, 3)
            },

            Some('"') => self.lex_string(start),
            Some(ch) if is_name_start(ch) => Ok(self.lex_name(start)),
            Some(ch) if ch == '-' || ch.is_numeric() => self.lex_number(start),

            Some(ch) => Err(self.unexpected_character(ch, start)),
        }
    }

    // =========================================================================
    // Ignored tokens
    // =========================================================================

    /// Skips whitespace, commas, byte-order marks and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | '\n' | '\r' | ',' | '\u{FEFF}' => {
                    self.consume();
                },
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the next line break or
    /// the next control character other than tab.
    fn skip_comment(&mut self) {
        self.consume();
        while let Some(ch) = self.peek_char() {
            if ch == '\n' || ch == '\r' || (ch < '\u{0020}' && ch != '\t') {
                break;
            }
            self.consume();
        }
    }

    /// Builds the error for a character that cannot start a token.
    ///
    /// When the text at `start` spells a `\uXXXX` escape, the whole escape
    /// is quoted instead of the lone backslash.
    fn unexpected_character(&self, ch: char, start: usize) -> GraphQLParseError {
        let remaining = self.remaining();
        let quoted = match remaining.get(..6) {
            Some(escape)
                if escape.starts_with("\\u")
                    && escape[2..].bytes().all(|b| b.is_ascii_hexdigit()) =>
            {
                escape.to_string()
            },
            _ => ch.to_string(),
        };
        self.error(
            format!("Unexpected character \"{quoted}\""),
            start,
            LexicalErrorKind::UnexpectedCharacter,
        )
    }

    // =========================================================================
    // Name lexing
    // =========================================================================

    /// Lexes a name: a letter or `_`, then any run of letters, digits and
    /// `_`. Letters and digits are Unicode, not only ASCII.
    fn lex_name(&mut self, start: usize) -> GraphQLToken<'src> {
        self.consume();
        while let Some(ch) = self.peek_char() {
            if !is_name_continue(ch) {
                break;
            }
            self.consume();
        }

        let name = &self.body[start..self.curr_byte_offset];
        GraphQLToken::new(GraphQLTokenKind::Name, self.make_span(start), name)
    }

    // =========================================================================
    // Number lexing
    // =========================================================================

    /// Lexes an integer or float literal.
    ///
    /// Handles:
    /// - Optional negative sign: `-`
    /// - Integer part: `0` or `[1-9][0-9]*`
    /// - Optional fractional part: `.[0-9]+`
    /// - Optional exponent: `[eE][+-]?[0-9]+`
    ///
    /// Digit runs accept any Unicode numeric character. The leading-zero
    /// check only looks at ASCII digits.
    fn lex_number(&mut self, start: usize) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let mut is_float = false;

        if self.peek_char() == Some('-') {
            self.consume();
        }

        if self.peek_char() == Some('0') {
            self.consume();
            if let Some(digit) = self.peek_char()
                && digit.is_ascii_digit() {
                return Err(self.error(
                    format!("Invalid number, unexpected digit after 0: \"{digit}\""),
                    self.curr_byte_offset,
                    LexicalErrorKind::UnexpectedDigit,
                ));
            }
        } else {
            self.lex_digits()?;
        }

        if self.peek_char() == Some('.') {
            is_float = true;
            self.consume();
            self.lex_digits()?;
        }

        if let Some(ch) = self.peek_char()
            && (ch == 'e' || ch == 'E') {
            is_float = true;
            self.consume();
            if let Some(sign) = self.peek_char()
                && (sign == '+' || sign == '-') {
                self.consume();
            }
            self.lex_digits()?;
        }

        let kind = if is_float {
            GraphQLTokenKind::Float
        } else {
            GraphQLTokenKind::Int
        };
        let raw = &self.body[start..self.curr_byte_offset];
        Ok(GraphQLToken::new(kind, self.make_span(start), raw))
    }

    /// Consumes a run of one or more numeric characters.
    fn lex_digits(&mut self) -> Result<(), GraphQLParseError> {
        match self.peek_char() {
            Some(ch) if ch.is_numeric() => {},
            other => {
                let found = match other {
                    None => "<EOF>".to_string(),
                    Some(ch) => format!("\"{ch}\""),
                };
                return Err(self.error(
                    format!("Invalid number, expected digit but got: {found}"),
                    self.curr_byte_offset,
                    LexicalErrorKind::ExpectedDigit,
                ));
            },
        }

        while let Some(ch) = self.peek_char() {
            if !ch.is_numeric() {
                break;
            }
            self.consume();
        }
        Ok(())
    }

    // =========================================================================
    // String lexing
    // =========================================================================

    /// Lexes a quoted string literal and decodes its escape sequences.
    ///
    /// Literal runs between escapes are copied verbatim. If the literal has
    /// no escapes at all, the token value borrows the source text.
    fn lex_string(&mut self, start: usize) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        let body = self.body;
        self.consume();

        let mut chunk_start = self.curr_byte_offset;
        let mut decoded: Option<String> = None;

        loop {
            let offset = self.curr_byte_offset;
            match self.peek_char() {
                None | Some('\n') | Some('\r') => {
                    return Err(self.error(
                        "Unterminated string".to_string(),
                        offset,
                        LexicalErrorKind::UnterminatedString,
                    ));
                },

                Some('"') => {
                    let tail = &body[chunk_start..offset];
                    let value = match decoded {
                        None => Cow::Borrowed(tail),
                        Some(mut value) => {
                            value.push_str(tail);
                            Cow::Owned(value)
                        },
                    };
                    self.consume();
                    return Ok(GraphQLToken::new(
                        GraphQLTokenKind::String,
                        self.make_span(start),
                        value,
                    ));
                },

                Some(ch) if ch < '\u{0020}' && ch != '\t' => {
                    return Err(self.error(
                        format!("Invalid character within String: {}", unicode_escape(ch)),
                        offset,
                        LexicalErrorKind::InvalidStringCharacter,
                    ));
                },

                Some('\\') => {
                    let buffer = decoded.get_or_insert_with(String::new);
                    buffer.push_str(&body[chunk_start..offset]);
                    self.consume();
                    let ch = self.lex_escape(offset)?;
                    buffer.push(ch);
                    chunk_start = self.curr_byte_offset;
                },

                Some(_) => {
                    self.consume();
                },
            }
        }
    }

    /// Decodes the escape sequence whose backslash sits at `escape_start`.
    /// The backslash itself has already been consumed.
    fn lex_escape(&mut self, escape_start: usize) -> Result<char, GraphQLParseError> {
        let ch = match self.peek_char() {
            None | Some('\n') | Some('\r') => {
                return Err(self.error(
                    "Unterminated string".to_string(),
                    self.curr_byte_offset,
                    LexicalErrorKind::UnterminatedString,
                ));
            },
            Some(ch) => ch,
        };
        self.consume();

        match ch {
            '"' => Ok('"'),
            '/' => Ok('/'),
            '\\' => Ok('\\'),
            'b' => Ok('\u{0008}'),
            'f' => Ok('\u{000C}'),
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            'u' => self.lex_unicode_escape(escape_start),
            other => Err(self.invalid_escape(format!("\\{other}"), escape_start)),
        }
    }

    /// Decodes the four hex digits after `\u`.
    ///
    /// Each escape is one UTF-16 code unit. A high surrogate must be
    /// immediately followed by a `\u` low surrogate; the pair is combined
    /// into a single scalar value.
    fn lex_unicode_escape(&mut self, escape_start: usize) -> Result<char, GraphQLParseError> {
        let Some(unit) = self.peek_hex4() else {
            let seen: String = self
                .remaining()
                .chars()
                .take(4)
                .take_while(|ch| *ch != '"' && *ch != '\n')
                .collect();
            return Err(self.invalid_escape(format!("\\u{seen}"), escape_start));
        };
        self.curr_byte_offset += 4;

        let code_point = match unit {
            0xD800..=0xDBFF => {
                let low = self
                    .remaining()
                    .strip_prefix("\\u")
                    .and_then(parse_hex4)
                    .filter(|low| (0xDC00..=0xDFFF).contains(low));
                let Some(low) = low else {
                    return Err(self.invalid_escape(format!("\\u{unit:04X}"), escape_start));
                };
                self.curr_byte_offset += 6;
                0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
            },
            0xDC00..=0xDFFF => {
                return Err(self.invalid_escape(format!("\\u{unit:04X}"), escape_start));
            },
            _ => unit,
        };

        char::from_u32(code_point)
            .ok_or_else(|| self.invalid_escape(format!("\\u{unit:04X}"), escape_start))
    }

    /// Reads four hex digits at the current position without consuming
    /// them.
    fn peek_hex4(&self) -> Option<u32> {
        parse_hex4(self.remaining())
    }

    fn invalid_escape(&self, sequence: String, escape_start: usize) -> GraphQLParseError {
        self.error(
            format!("Invalid character escape sequence: {sequence}"),
            escape_start,
            LexicalErrorKind::InvalidEscapeSequence,
        )
    }
}

/// Parses the first four bytes of `text` as hex digits.
fn parse_hex4(text: &str) -> Option<u32> {
    let digits = text.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Renders a character as `\uXXXX` (upper-case hex, at least four digits).
fn unicode_escape(ch: char) -> String {
    format!("\\u{:04X}", ch as u32)
}

/// Returns `true` if `ch` can start a GraphQL name: `_` or any letter.
fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Returns `true` if `ch` can continue a GraphQL name: `_`, a letter or a
/// digit.
fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}
