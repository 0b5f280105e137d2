//! Lexical analysis: converts source text into a stream of positioned
//! tokens for the parser.
//!
//! - regex-pattern tokenization with per-pattern handlers
//! - keywords, identifiers, literals, operators, delimiters
//! - 1-based line/column tracking for diagnostics
//! - comment and whitespace skipping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
