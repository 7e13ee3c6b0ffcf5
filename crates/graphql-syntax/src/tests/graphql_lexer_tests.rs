//! Tests for [`crate::lex()`] and [`crate::GraphQLLexer`].
//!
//! Most tests lex a small input and compare token kinds, values and spans.
//! Error tests check the exact message and the byte offset it is
//! reported at.

use crate::ByteSpan;
use crate::GraphQLLexer;
use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::LexicalErrorKind;
use crate::Source;
use crate::lex;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::borrow::Cow;

/// Lexes the first token of `text`.
fn lex_one(text: &str) -> (GraphQLTokenKind, String, ByteSpan) {
    let source = Source::new(text);
    let token = lex(&source, 0).unwrap();
    (token.kind, token.value.into_owned(), token.span)
}

/// Lexes all tokens of `text` (including `Eof`) and returns their kinds.
fn lex_kinds(text: &str) -> Vec<GraphQLTokenKind> {
    let source = Source::new(text);
    GraphQLLexer::new(&source)
        .map(|token| token.map(|t| t.kind))
        .collect::<Result<_, _>>()
        .unwrap()
}

/// Lexes `text` from the start, expecting the first token to fail.
fn lex_error(text: &str) -> GraphQLParseError {
    let source = Source::new(text);
    match lex(&source, 0) {
        Ok(token) => panic!("expected a lexical error, got: {token:?}"),
        Err(err) => err,
    }
}

// =============================================================================
// Ignored tokens and EOF
// =============================================================================

/// Verifies that an empty source yields an empty-span `Eof`.
#[test]
fn lex_empty_source_is_eof() {
    let (kind, value, span) = lex_one("");
    assert_eq!(kind, GraphQLTokenKind::Eof);
    assert_eq!(value, "");
    assert_eq!(span, ByteSpan::new(0, 0));
}

/// Verifies that whitespace, commas, BOM and comments are all skipped and
/// the `Eof` sits at the very end.
#[test]
fn lex_skips_ignored_tokens() {
    let text = "\u{FEFF} \t,\n# comment\n  ,,";
    let (kind, _, span) = lex_one(text);
    assert_eq!(kind, GraphQLTokenKind::Eof);
    assert_eq!(span, ByteSpan::empty_at(text.len()));
}

/// Verifies that lexing again from the end of `Eof` yields `Eof` again.
#[test]
fn lex_repeated_eof() {
    let source = Source::new("a");
    let eof = lex(&source, 1).unwrap();
    assert_eq!(eof.kind, GraphQLTokenKind::Eof);
    let again = lex(&source, eof.span.end).unwrap();
    assert_eq!(again, eof);
}

/// Verifies that a comment ends at the line break and the next line is
/// lexed normally.
#[test]
fn lex_comment_then_token() {
    let (kind, value, span) = lex_one("# hello { world\nname");
    assert_eq!(kind, GraphQLTokenKind::Name);
    assert_eq!(value, "name");
    assert_eq!(span, ByteSpan::new(16, 20));
}

/// Verifies that a position past the end of the source is clamped.
#[test]
fn lex_position_past_end_clamps() {
    let source = Source::new("{}");
    let token = lex(&source, 99).unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::Eof);
    assert_eq!(token.span, ByteSpan::empty_at(2));
}

/// Verifies that `lex` can start at any token boundary, independent of
/// any earlier call.
#[test]
fn lex_is_position_independent() {
    let source = Source::new("query Foo { bar }");
    let token = lex(&source, 9).unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::CurlyBraceOpen);
    assert_eq!(token.span, ByteSpan::new(10, 11));
    let token = lex(&source, 6).unwrap();
    assert_eq!(token.value, "Foo");
}

// =============================================================================
// Punctuators
// =============================================================================

/// Verifies every punctuator kind and the final `Eof`.
#[test]
fn lex_all_punctuators() {
    assert_eq!(
        lex_kinds("! $ ( ) ... : = @ [ ] { | }"),
        vec![
            GraphQLTokenKind::Bang,
            GraphQLTokenKind::Dollar,
            GraphQLTokenKind::ParenOpen,
            GraphQLTokenKind::ParenClose,
            GraphQLTokenKind::Ellipsis,
            GraphQLTokenKind::Colon,
            GraphQLTokenKind::Equals,
            GraphQLTokenKind::At,
            GraphQLTokenKind::SquareBracketOpen,
            GraphQLTokenKind::SquareBracketClose,
            GraphQLTokenKind::CurlyBraceOpen,
            GraphQLTokenKind::Pipe,
            GraphQLTokenKind::CurlyBraceClose,
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that only the fixed-text kinds count as punctuators, and that
/// their description is their source text.
#[test]
fn lex_punctuator_classification() {
    let source = Source::new("! $ ( ) ... : = @ [ ] { | } name 1 1.5 \"s\"");
    let tokens: Vec<GraphQLToken> = GraphQLLexer::new(&source)
        .collect::<Result<_, _>>()
        .unwrap();
    let (punctuators, others): (Vec<_>, Vec<_>) =
        tokens.iter().partition(|token| token.kind.is_punctuator());
    assert_eq!(punctuators.len(), 13);
    for token in punctuators {
        assert_eq!(source.slice(token.span), token.kind.description());
        assert!(!token.kind.has_value());
    }
    let other_kinds: Vec<_> = others.iter().map(|token| token.kind).collect();
    assert_eq!(
        other_kinds,
        vec![
            GraphQLTokenKind::Name,
            GraphQLTokenKind::Int,
            GraphQLTokenKind::Float,
            GraphQLTokenKind::String,
            GraphQLTokenKind::Eof,
        ],
    );
}

/// Verifies that punctuators carry an empty value and a span of their
/// own width.
#[test]
fn lex_ellipsis_span() {
    let (kind, value, span) = lex_one("  ...");
    assert_eq!(kind, GraphQLTokenKind::Ellipsis);
    assert_eq!(value, "");
    assert_eq!(span, ByteSpan::new(2, 5));
}

/// Verifies that `..` (not three dots) is an unexpected character at the
/// first dot.
#[test]
fn lex_two_dots_is_error() {
    let err = lex_error("..");
    assert_eq!(err.message(), "Unexpected character \".\"");
    assert_eq!(err.offset(), 0);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::UnexpectedCharacter),
    );
}

/// Verifies that `. ..` separated by whitespace does not form an ellipsis.
#[test]
fn lex_spaced_dots_is_error() {
    let err = lex_error(". ..");
    assert_eq!(err.message(), "Unexpected character \".\"");
}

// =============================================================================
// Names
// =============================================================================

/// Verifies that names borrow their text from the source.
#[test]
fn lex_name_borrows() {
    let source = Source::new("  _fooBar42 ");
    let token = lex(&source, 0).unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert_eq!(token.span, ByteSpan::new(2, 11));
    assert!(matches!(token.value, Cow::Borrowed("_fooBar42")));
}

/// Verifies that keywords are ordinary names at the lexical level.
#[test]
fn lex_keywords_are_names() {
    let source = Source::new("query");
    let token = lex(&source, 0).unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::Name);
    assert!(token.is_keyword("query"));
    assert!(!token.is_keyword("mutation"));
}

/// Verifies that names may contain non-ASCII letters, and that the span
/// covers every byte of them.
#[test]
fn lex_non_ascii_name() {
    let (kind, value, span) = lex_one("café ");
    assert_eq!(kind, GraphQLTokenKind::Name);
    assert_eq!(value, "café");
    assert_eq!(span, ByteSpan::new(0, 5));

    let (kind, value, _) = lex_one("été_2");
    assert_eq!(kind, GraphQLTokenKind::Name);
    assert_eq!(value, "été_2");
}

/// Verifies that a non-ASCII name parses as a field.
#[test]
fn lex_non_ascii_name_in_selection() {
    let doc = crate::parse("{ café }").unwrap();
    let crate::ast::Definition::Operation(op) = &doc.definitions[0] else {
        panic!("expected an operation");
    };
    assert_eq!(crate::tests::utils::first_field(&op.selection_set).name.value, "café");
}

/// Verifies that non-ASCII numeric characters are accepted as digits.
#[test]
fn lex_non_ascii_digits() {
    // U+0663 ARABIC-INDIC DIGIT THREE.
    let (kind, value, span) = lex_one("1\u{0663}");
    assert_eq!(kind, GraphQLTokenKind::Int);
    assert_eq!(value, "1\u{0663}");
    assert_eq!(span, ByteSpan::new(0, 3));
}

/// Verifies that a symbol that is neither a letter nor a digit is still
/// rejected.
#[test]
fn lex_non_ascii_symbol_is_error() {
    let err = lex_error("€");
    assert_eq!(err.message(), "Unexpected character \"€\"");
    assert_eq!(err.offset(), 0);
}

// =============================================================================
// Numbers
// =============================================================================

/// Verifies integer literals, including `0` and negative values.
#[test]
fn lex_ints() {
    for text in ["0", "7", "123", "-0", "-42"] {
        let (kind, value, span) = lex_one(text);
        assert_eq!(kind, GraphQLTokenKind::Int, "{text}");
        assert_eq!(value, text);
        assert_eq!(span, ByteSpan::new(0, text.len()));
    }
}

/// Verifies float literals with fraction, exponent, or both.
#[test]
fn lex_floats() {
    for text in ["1.5", "-0.25", "1e10", "1E-3", "6.0221e+23", "0.0"] {
        let (kind, value, _) = lex_one(text);
        assert_eq!(kind, GraphQLTokenKind::Float, "{text}");
        assert_eq!(value, text);
    }
}

/// Verifies the leading-zero error is reported at the extra digit.
#[test]
fn lex_leading_zero_is_error() {
    let err = lex_error("0123");
    assert_eq!(err.message(), "Invalid number, unexpected digit after 0: \"1\"");
    assert_eq!(err.offset(), 1);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::UnexpectedDigit),
    );
}

/// Verifies the missing-digit error after a sign, a dot, and an exponent.
#[test]
fn lex_missing_digit_errors() {
    let err = lex_error("-x");
    assert_eq!(err.message(), "Invalid number, expected digit but got: \"x\"");
    assert_eq!(err.offset(), 1);

    let err = lex_error("1.");
    assert_eq!(err.message(), "Invalid number, expected digit but got: <EOF>");
    assert_eq!(err.offset(), 2);

    let err = lex_error("1.5e ");
    assert_eq!(err.message(), "Invalid number, expected digit but got: \" \"");
    assert_eq!(err.offset(), 4);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::ExpectedDigit),
    );
}

/// Verifies that a number immediately followed by a name lexes as two
/// separate tokens.
#[test]
fn lex_number_then_name() {
    assert_eq!(
        lex_kinds("123abc"),
        vec![GraphQLTokenKind::Int, GraphQLTokenKind::Name, GraphQLTokenKind::Eof],
    );
}

// =============================================================================
// Strings
// =============================================================================

/// Verifies that a string without escapes borrows the text between the
/// quotes, while its span includes the quotes.
#[test]
fn lex_simple_string() {
    let source = Source::new("\"hello world\"");
    let token = lex(&source, 0).unwrap();
    assert_eq!(token.kind, GraphQLTokenKind::String);
    assert_eq!(token.span, ByteSpan::new(0, 13));
    assert!(matches!(token.value, Cow::Borrowed("hello world")));
}

/// Verifies the empty string.
#[test]
fn lex_empty_string() {
    let (kind, value, span) = lex_one("\"\"");
    assert_eq!(kind, GraphQLTokenKind::String);
    assert_eq!(value, "");
    assert_eq!(span, ByteSpan::new(0, 2));
}

/// Verifies every simple escape sequence.
#[test]
fn lex_string_simple_escapes() {
    let (_, value, _) = lex_one(r#""\" \\ \/ \b \f \n \r \t""#);
    assert_eq!(value, "\" \\ / \u{8} \u{c} \n \r \t");
}

/// Verifies that a string with escapes owns its decoded value and keeps
/// the literal text around the escapes.
#[test]
fn lex_string_with_escape_is_owned() {
    let source = Source::new(r#""a\nb""#);
    let token = lex(&source, 0).unwrap();
    assert!(matches!(&token.value, Cow::Owned(s) if s == "a\nb"));
}

/// Verifies `\u` escapes, including a surrogate pair combined into one
/// supplementary-plane character.
#[test]
fn lex_string_unicode_escapes() {
    let (_, value, _) = lex_one(r#""\u0041\u00e9\uD83D\uDE00""#);
    assert_eq!(value, "Aé😀");
}

/// Verifies that non-ASCII text passes through strings unchanged.
#[test]
fn lex_string_with_unicode_text() {
    let (_, value, span) = lex_one("\"héllo 😀\"");
    assert_eq!(value, "héllo 😀");
    assert_eq!(span.len(), "\"héllo 😀\"".len());
}

/// Verifies that a line break inside a string is reported as unterminated
/// at the line break.
#[test]
fn lex_string_unterminated_at_newline() {
    let err = lex_error("\"abc\ndef\"");
    assert_eq!(err.message(), "Unterminated string");
    assert_eq!(err.offset(), 4);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::UnterminatedString),
    );
}

/// Verifies that a string running to end of input is unterminated at the
/// end offset.
#[test]
fn lex_string_unterminated_at_eof() {
    let err = lex_error("\"abc");
    assert_eq!(err.message(), "Unterminated string");
    assert_eq!(err.offset(), 4);
}

/// Verifies that a control character inside a string is rejected.
#[test]
fn lex_string_control_character() {
    let err = lex_error("\"a\u{0001}b\"");
    assert_eq!(err.message(), "Invalid character within String: \\u0001");
    assert_eq!(err.offset(), 2);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::InvalidStringCharacter),
    );
}

/// Verifies that a tab inside a string is allowed.
#[test]
fn lex_string_allows_tab() {
    let (_, value, _) = lex_one("\"a\tb\"");
    assert_eq!(value, "a\tb");
}

/// Verifies an unknown escape is reported at its backslash.
#[test]
fn lex_string_unknown_escape() {
    let err = lex_error(r#""ab\x""#);
    assert_eq!(err.message(), "Invalid character escape sequence: \\x");
    assert_eq!(err.offset(), 3);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::InvalidEscapeSequence),
    );
}

/// Verifies a `\u` escape with too few hex digits.
#[test]
fn lex_string_short_unicode_escape() {
    let err = lex_error(r#""\u12""#);
    assert_eq!(err.message(), "Invalid character escape sequence: \\u12");
    assert_eq!(err.offset(), 1);
}

/// Verifies that a lone high or low surrogate is rejected.
#[test]
fn lex_string_lone_surrogates() {
    let err = lex_error(r#""\uD83D""#);
    assert_eq!(err.message(), "Invalid character escape sequence: \\uD83D");

    let err = lex_error(r#""\uDE00x""#);
    assert_eq!(err.message(), "Invalid character escape sequence: \\uDE00");
    assert_eq!(err.offset(), 1);
}

// =============================================================================
// Invalid characters
// =============================================================================

/// Verifies that a control character outside a string is rejected with
/// its code rendered as `\uXXXX`.
#[test]
fn lex_invalid_control_character() {
    let err = lex_error("  \u{0007}");
    assert_eq!(err.message(), "Invalid character \"\\u0007\"");
    assert_eq!(err.offset(), 2);
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::Lexical(LexicalErrorKind::InvalidCharacter),
    );
}

/// Verifies ordinary unexpected characters.
#[test]
fn lex_unexpected_characters() {
    for ch in ["?", "%", "&", "*", "+"] {
        let err = lex_error(ch);
        assert_eq!(err.message(), format!("Unexpected character \"{ch}\""));
        assert_eq!(err.offset(), 0);
    }
}

/// Verifies that a stray `\u` escape outside a string is quoted whole.
#[test]
fn lex_unexpected_unicode_escape_text() {
    let err = lex_error(r"\u00E9");
    assert_eq!(err.message(), "Unexpected character \"\\u00E9\"");
}

/// Verifies that errors name the source they came from.
#[test]
fn lex_error_carries_source_name() {
    let source = Source::with_name("?", "ops.graphql");
    let err = lex(&source, 0).unwrap_err();
    assert_eq!(err.source_name(), "ops.graphql");
}

// =============================================================================
// GraphQLLexer
// =============================================================================

/// Verifies that the iterator ends after `Eof`.
#[test]
fn lexer_iterator_stops_after_eof() {
    let source = Source::new("a");
    let tokens: Vec<_> = GraphQLLexer::new(&source).collect();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(
        tokens.last(),
        Some(Ok(GraphQLToken { kind: GraphQLTokenKind::Eof, .. })),
    ));
}

/// Verifies that the iterator ends after the first error.
#[test]
fn lexer_iterator_stops_after_error() {
    let source = Source::new("a ? b");
    let tokens: Vec<_> = GraphQLLexer::new(&source).collect();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_ok());
    assert!(tokens[1].is_err());
}

/// Verifies the token stream of a small query, with values.
#[test]
fn lexer_small_query_values() {
    let source = Source::new("query Q($id: ID = 4) { node(id: $id) { name } }");
    let values: Vec<String> = GraphQLLexer::new(&source)
        .map(|token| token.unwrap().to_string())
        .collect();
    assert_eq!(
        values,
        vec![
            "Name \"query\"", "Name \"Q\"", "(", "$", "Name \"id\"", ":",
            "Name \"ID\"", "=", "Int \"4\"", ")", "{", "Name \"node\"", "(",
            "Name \"id\"", ":", "$", "Name \"id\"", ")", "{", "Name \"name\"",
            "}", "}", "EOF",
        ],
    );
}

/// Verifies that tokens never overlap and appear in increasing order.
#[test]
fn lexer_spans_are_monotonic() {
    let source = Source::new("{ a(b: [1, 2.5, \"c\"]) @d ...e }");
    let mut last_end = 0;
    for token in GraphQLLexer::new(&source) {
        let token = token.unwrap();
        assert!(token.span.start >= last_end);
        assert!(token.span.end >= token.span.start);
        last_end = token.span.end;
    }
    assert_eq!(last_end, source.len());
}
