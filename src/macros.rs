//! Helper macros for the lexer.
//!
//! - `MK_TOKEN!` - creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - creates a lexer handler for fixed-text tokens

/// Creates a Token instance at the given position.
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr, $column:expr) => {
        Token {
            kind: $kind,
            value: $value,
            line: $line,
            column: $column,
        }
    };
}

/// Creates a lexer handler for a fixed-text token such as an operator or
/// delimiter. The generated handler pushes a token at the current position
/// and advances past the matched text.
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                lexer.line,
                lexer.column
            ));
            lexer.advance_text($value);
            Ok(())
        }
    };
}
