use std::collections::HashMap;

use crate::{ast::expressions::Expr, errors::errors::ParseError, lexer::tokens::TokenKind};

use super::{expr::*, parser::Parser};

/// Binding strength tiers, loosest to tightest. The ternary conditional
/// binds looser than every binary operator; unary prefix operators bind
/// tighter than every binary operator; postfix call/subscript/scope are
/// tightest of all.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Ternary,
    Assignment,
    LogicalOr,
    LogicalAnd,
    Comparison,
    BitOr,
    BitAnd,
    Shift,
    Additive,
    Multiplicative,
    Exponent,
    Unary,
    Call,
    Member,
    Primary,
}

impl BindingPower {
    /// The tier just below. Right-associative operators parse their right
    /// operand here so equal-strength operators nest to the right.
    pub fn lower(self) -> BindingPower {
        match self {
            BindingPower::Default => BindingPower::Default,
            BindingPower::Ternary => BindingPower::Default,
            BindingPower::Assignment => BindingPower::Ternary,
            BindingPower::LogicalOr => BindingPower::Assignment,
            BindingPower::LogicalAnd => BindingPower::LogicalOr,
            BindingPower::Comparison => BindingPower::LogicalAnd,
            BindingPower::BitOr => BindingPower::Comparison,
            BindingPower::BitAnd => BindingPower::BitOr,
            BindingPower::Shift => BindingPower::BitAnd,
            BindingPower::Additive => BindingPower::Shift,
            BindingPower::Multiplicative => BindingPower::Additive,
            BindingPower::Exponent => BindingPower::Multiplicative,
            BindingPower::Unary => BindingPower::Exponent,
            BindingPower::Call => BindingPower::Unary,
            BindingPower::Member => BindingPower::Call,
            BindingPower::Primary => BindingPower::Member,
        }
    }
}

/// Operator associativity, recorded in the binding power table.
#[derive(PartialEq, Clone, Copy, Debug)]
pub enum Assoc {
    Left,
    Right,
}

pub type NUDHandler = fn(&mut Parser) -> Result<Expr, ParseError>;
pub type LEDHandler = fn(&mut Parser, Expr, BindingPower, Assoc) -> Result<Expr, ParseError>;

pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, (BindingPower, Assoc)>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Ternary, looser than everything binary
    parser.led(TokenKind::Question, BindingPower::Ternary, Assoc::Right, parse_ternary_expr);

    // Assignment family, right-associative
    parser.led(TokenKind::Assignment, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::PlusEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::MinusEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::StarEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::SlashEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::PercentEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);
    parser.led(TokenKind::CaretEquals, BindingPower::Assignment, Assoc::Right, parse_binary_expr);

    // Logical
    parser.led(TokenKind::Or, BindingPower::LogicalOr, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::And, BindingPower::LogicalAnd, Assoc::Left, parse_binary_expr);

    // Comparison
    parser.led(TokenKind::Equals, BindingPower::Comparison, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::NotEquals, BindingPower::Comparison, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Less, BindingPower::Comparison, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::LessEquals, BindingPower::Comparison, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Greater, BindingPower::Comparison, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::GreaterEquals, BindingPower::Comparison, Assoc::Left, parse_binary_expr);

    // Bitwise and shifts
    parser.led(TokenKind::Pipe, BindingPower::BitOr, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Ampersand, BindingPower::BitAnd, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::ShiftLeft, BindingPower::Shift, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::ShiftRight, BindingPower::Shift, Assoc::Left, parse_binary_expr);

    // Arithmetic
    parser.led(TokenKind::Plus, BindingPower::Additive, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Dash, BindingPower::Additive, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Star, BindingPower::Multiplicative, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Slash, BindingPower::Multiplicative, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Percent, BindingPower::Multiplicative, Assoc::Left, parse_binary_expr);
    parser.led(TokenKind::Caret, BindingPower::Exponent, Assoc::Left, parse_binary_expr);

    // Postfix forms, tightest, chained left-to-right by the pratt loop
    parser.led(TokenKind::OpenParen, BindingPower::Call, Assoc::Left, parse_call_expr);
    parser.led(TokenKind::OpenBracket, BindingPower::Call, Assoc::Left, parse_subscript_expr);
    parser.led(TokenKind::Dot, BindingPower::Member, Assoc::Left, parse_scope_expr);

    // Literals and symbols
    parser.nud(TokenKind::Number, parse_primary_expr);
    parser.nud(TokenKind::Character, parse_primary_expr);
    parser.nud(TokenKind::Str, parse_primary_expr);
    parser.nud(TokenKind::Buffer, parse_primary_expr);
    parser.nud(TokenKind::Identifier, parse_primary_expr);

    // Unary prefixes and grouping
    parser.nud(TokenKind::Plus, parse_prefix_expr);
    parser.nud(TokenKind::Dash, parse_prefix_expr);
    parser.nud(TokenKind::Not, parse_prefix_expr);
    parser.nud(TokenKind::Tilde, parse_prefix_expr);
    parser.nud(TokenKind::OpenParen, parse_grouping_expr);
}
