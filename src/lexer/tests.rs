//! Unit tests for the lexer module.
//!
//! Covers tokenization of keywords, identifiers, literals of every
//! category, operators, positions, and error cases.

use crate::errors::errors::LexErrorKind;

use super::{lexer::tokenize, tokens::TokenKind};

#[test]
fn test_tokenize_keywords() {
    let source = "import include as def class struct enum static public private ref if elif else while do for in break continue return";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Import);
    assert_eq!(tokens[1].kind, TokenKind::Include);
    assert_eq!(tokens[2].kind, TokenKind::As);
    assert_eq!(tokens[3].kind, TokenKind::Def);
    assert_eq!(tokens[4].kind, TokenKind::Class);
    assert_eq!(tokens[5].kind, TokenKind::Struct);
    assert_eq!(tokens[6].kind, TokenKind::Enum);
    assert_eq!(tokens[7].kind, TokenKind::Static);
    assert_eq!(tokens[8].kind, TokenKind::Public);
    assert_eq!(tokens[9].kind, TokenKind::Private);
    assert_eq!(tokens[10].kind, TokenKind::Ref);
    assert_eq!(tokens[11].kind, TokenKind::If);
    assert_eq!(tokens[12].kind, TokenKind::Elif);
    assert_eq!(tokens[13].kind, TokenKind::Else);
    assert_eq!(tokens[14].kind, TokenKind::While);
    assert_eq!(tokens[15].kind, TokenKind::Do);
    assert_eq!(tokens[16].kind, TokenKind::For);
    assert_eq!(tokens[17].kind, TokenKind::In);
    assert_eq!(tokens[18].kind, TokenKind::Break);
    assert_eq!(tokens[19].kind, TokenKind::Continue);
    assert_eq!(tokens[20].kind, TokenKind::Return);
    assert_eq!(tokens[21].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_identifiers() {
    let source = "foo bar_123 _underscore CamelCase classes";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "bar_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    // A keyword prefix does not make an identifier a keyword
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[4].value, "classes");
}

#[test]
fn test_tokenize_numbers() {
    let source = "42 3.14 0 100.5 1e9 2.5e-3";
    let tokens = tokenize(source).unwrap();

    for token in &tokens[..6] {
        assert_eq!(token.kind, TokenKind::Number);
    }
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[4].value, "1e9");
    assert_eq!(tokens[5].value, "2.5e-3");
}

#[test]
fn test_tokenize_prefixed_and_suffixed_numbers() {
    let source = "0xff 0o17 0b1010 42u 3.5f 2i 0xFFu";
    let tokens = tokenize(source).unwrap();

    // Raw spellings survive; the parser decodes them
    assert_eq!(tokens[0].value, "0xff");
    assert_eq!(tokens[1].value, "0o17");
    assert_eq!(tokens[2].value, "0b1010");
    assert_eq!(tokens[3].value, "42u");
    assert_eq!(tokens[4].value, "3.5f");
    assert_eq!(tokens[5].value, "2i");
    assert_eq!(tokens[6].value, "0xFFu");
    for token in &tokens[..7] {
        assert_eq!(token.kind, TokenKind::Number);
    }
}

#[test]
fn test_tokenize_strings() {
    let source = r#""hello" "multiple words""#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].kind, TokenKind::Str);
    assert_eq!(tokens[1].value, "multiple words");
}

#[test]
fn test_tokenize_string_escapes() {
    let source = r#""hello\nworld" "tab\there" "backslash\\" "hex\x41" "quote\"q""#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].value, "hello\nworld");
    assert_eq!(tokens[1].value, "tab\there");
    assert_eq!(tokens[2].value, "backslash\\");
    assert_eq!(tokens[3].value, "hexA");
    assert_eq!(tokens[4].value, "quote\"q");
}

#[test]
fn test_tokenize_character_literal() {
    let source = r"'a' '\n' '\''";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Character);
    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "\n");
    assert_eq!(tokens[2].value, "'");
}

#[test]
fn test_tokenize_buffer_literal() {
    let source = r#"b"bytes\x00here""#;
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Buffer);
    assert_eq!(tokens[0].value, "bytes\0here");
}

#[test]
fn test_tokenize_operators() {
    let source = "+ - * / % ^ = == != < <= > >= && || ! & | ~ << >> += -= *= /= %= ^= -> ? :";
    let tokens = tokenize(source).unwrap();

    let expected = [
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::Caret,
        TokenKind::Assignment,
        TokenKind::Equals,
        TokenKind::NotEquals,
        TokenKind::Less,
        TokenKind::LessEquals,
        TokenKind::Greater,
        TokenKind::GreaterEquals,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::Ampersand,
        TokenKind::Pipe,
        TokenKind::Tilde,
        TokenKind::ShiftLeft,
        TokenKind::ShiftRight,
        TokenKind::PlusEquals,
        TokenKind::MinusEquals,
        TokenKind::StarEquals,
        TokenKind::SlashEquals,
        TokenKind::PercentEquals,
        TokenKind::CaretEquals,
        TokenKind::Arrow,
        TokenKind::Question,
        TokenKind::Colon,
    ];
    for (token, kind) in tokens.iter().zip(expected.iter()) {
        assert_eq!(token.kind, *kind);
    }
    assert_eq!(tokens[expected.len()].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_delimiters() {
    let source = "( ) [ ] { } . , ;";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::OpenParen);
    assert_eq!(tokens[1].kind, TokenKind::CloseParen);
    assert_eq!(tokens[2].kind, TokenKind::OpenBracket);
    assert_eq!(tokens[3].kind, TokenKind::CloseBracket);
    assert_eq!(tokens[4].kind, TokenKind::OpenCurly);
    assert_eq!(tokens[5].kind, TokenKind::CloseCurly);
    assert_eq!(tokens[6].kind, TokenKind::Dot);
    assert_eq!(tokens[7].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::Semicolon);
}

#[test]
fn test_tokenize_comments_skipped() {
    let source = "a // comment with + - stuff\nb";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[0].value, "a");
    assert_eq!(tokens[1].value, "b");
    assert_eq!(tokens[2].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_positions() {
    let source = "one two\n  three";
    let tokens = tokenize(source).unwrap();

    assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    assert_eq!((tokens[1].line, tokens[1].column), (1, 5));
    assert_eq!((tokens[2].line, tokens[2].column), (2, 3));
}

#[test]
fn test_tokenize_eof_position() {
    let source = "a\nbc";
    let tokens = tokenize(source).unwrap();

    let eof = tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!((eof.line, eof.column), (2, 3));
}

#[test]
fn test_tokenize_empty_source() {
    let tokens = tokenize("").unwrap();

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn test_tokenize_unrecognized_character() {
    let error = tokenize("let @ = 1").unwrap_err();

    assert_eq!(
        error.kind,
        LexErrorKind::UnrecognizedCharacter { character: '@' }
    );
    assert_eq!((error.line, error.column), (1, 5));
}

#[test]
fn test_tokenize_unterminated_string() {
    let error = tokenize("x = \"oops").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnterminatedString);
    assert_eq!((error.line, error.column), (1, 5));
}

#[test]
fn test_tokenize_unterminated_character() {
    let error = tokenize("'a").unwrap_err();

    assert_eq!(error.kind, LexErrorKind::UnterminatedCharacter);
    assert_eq!((error.line, error.column), (1, 1));
}

#[test]
fn test_shift_right_is_one_token() {
    let tokens = tokenize("a >> b > > c").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::ShiftRight);
    assert_eq!(tokens[3].kind, TokenKind::Greater);
    assert_eq!(tokens[4].kind, TokenKind::Greater);
}
