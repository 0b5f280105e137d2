//! Unit tests for error types and the diagnostic formatting contract.

use crate::errors::errors::{Error, LexError, LexErrorKind, ParseError, ParseErrorKind};
use crate::lexer::tokens::{Token, TokenKind};
use crate::MK_TOKEN;

#[test]
fn test_lex_error_format() {
    let error = LexError::new(
        LexErrorKind::UnrecognizedCharacter { character: '@' },
        3,
        14,
    );

    assert_eq!(error.format(), "unrecognized character `@` at line 3 column 14");
}

#[test]
fn test_lex_error_unterminated_string_format() {
    let error = LexError::new(LexErrorKind::UnterminatedString, 1, 9);

    assert_eq!(error.format(), "unterminated string literal at line 1 column 9");
}

#[test]
fn test_parse_error_format_uses_token_position() {
    let token = MK_TOKEN!(TokenKind::Semicolon, String::from(";"), 7, 2);
    let error = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            token: String::from(";"),
        },
        token,
    );

    assert_eq!(error.format(), "unexpected token `;` at line 7 column 2");
}

#[test]
fn test_parse_error_end_of_file_format() {
    let token = MK_TOKEN!(TokenKind::Eof, String::from("EOF"), 4, 1);
    let error = ParseError::new(ParseErrorKind::UnexpectedEndOfFile, token);

    assert_eq!(error.format(), "unexpected end of file at line 4 column 1");
}

#[test]
fn test_malformed_number_format() {
    let token = MK_TOKEN!(TokenKind::Number, String::from("99999999999999999999"), 2, 5);
    let error = ParseError::new(
        ParseErrorKind::MalformedNumber {
            literal: String::from("99999999999999999999"),
        },
        token,
    );

    assert_eq!(
        error.format(),
        "malformed number literal `99999999999999999999` at line 2 column 5"
    );
}

#[test]
fn test_combined_error_formats_transparently() {
    let lex: Error = LexError::new(LexErrorKind::UnterminatedString, 2, 3).into();
    let parse: Error = ParseError::new(
        ParseErrorKind::UnexpectedToken {
            token: String::from(")"),
        },
        MK_TOKEN!(TokenKind::CloseParen, String::from(")"), 1, 8),
    )
    .into();

    assert_eq!(lex.format(), "unterminated string literal at line 2 column 3");
    assert_eq!(parse.format(), "unexpected token `)` at line 1 column 8");
}

#[test]
fn test_errors_display_like_format() {
    let error = LexError::new(LexErrorKind::UnterminatedCharacter, 5, 5);

    assert_eq!(error.to_string(), error.format());
}
