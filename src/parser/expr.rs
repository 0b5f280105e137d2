use crate::{
    ast::expressions::{
        BinaryExpr, CallExpr, ConstExpr, ConstValue, Expr, IdentifierExpr, ScopeExpr,
        SubscriptExpr, TernaryExpr, TupleExpr, UnaryExpr,
    },
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{Assoc, BindingPower},
    parser::Parser,
};

/// Precedence-climbing expression parse: one NUD for the leading form,
/// then LEDs while the next token binds tighter than `bp`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParseError> {
    let token = parser.current_token().clone();
    if token.kind == TokenKind::Eof {
        return Err(ParseError::new(ParseErrorKind::UnexpectedEndOfFile, token));
    }

    let nud_fn = match parser.get_nud_lookup().get(&token.kind) {
        Some(nud_fn) => *nud_fn,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    token: token.value.clone(),
                },
                token,
            ))
        }
    };

    let mut left = nud_fn(parser)?;

    loop {
        let kind = parser.current_token_kind();
        let (token_bp, assoc) = match parser.get_bp_lookup().get(&kind) {
            Some(entry) => *entry,
            None => break,
        };
        if token_bp <= bp {
            break;
        }

        let led_fn = match parser.get_led_lookup().get(&kind) {
            Some(led_fn) => *led_fn,
            None => {
                let token = parser.current_token().clone();
                return Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token,
                ));
            }
        };

        left = led_fn(parser, left, token_bp, assoc)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let index = parser.position();

    match parser.current_token_kind() {
        TokenKind::Number => {
            let token = parser.advance().clone();
            let value = decode_number(&token)?;
            Ok(Expr::Constant(ConstExpr { index, value }))
        }
        TokenKind::Character => {
            let token = parser.advance().clone();
            let character = match token.value.chars().next() {
                Some(character) => character,
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedTokenDetailed {
                            token: token.value.clone(),
                            message: String::from("empty character literal"),
                        },
                        token,
                    ))
                }
            };
            Ok(Expr::Constant(ConstExpr {
                index,
                value: ConstValue::Character(character),
            }))
        }
        TokenKind::Str => {
            let token = parser.advance().clone();
            Ok(Expr::Constant(ConstExpr {
                index,
                value: ConstValue::String(token.value),
            }))
        }
        TokenKind::Buffer => {
            let token = parser.advance().clone();
            Ok(Expr::Constant(ConstExpr {
                index,
                value: ConstValue::Buffer(token.value.into_bytes()),
            }))
        }
        TokenKind::Identifier => {
            let token = parser.advance().clone();
            Ok(Expr::Identifier(IdentifierExpr {
                index,
                identifiers: vec![token.value],
                generics: vec![],
            }))
        }
        _ => Err(parser.unexpected("expecting an expression")),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let index = parser.position();
    let operator_token = parser.advance().clone();

    let operation = match operator_token.kind.unary_operator() {
        Some(operation) => operation,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token,
            ))
        }
    };

    // Unary operands bind at the unary tier: `-a + b` is `(-a) + b`,
    // while `-a.b` is `-(a.b)`.
    let rvalue = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary(UnaryExpr {
        index,
        operation,
        rvalue: Box::new(rvalue),
    }))
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
    assoc: Assoc,
) -> Result<Expr, ParseError> {
    let operator_token = parser.advance().clone();

    let operation = match operator_token.kind.operator() {
        Some(operation) => operation,
        None => {
            return Err(ParseError::new(
                ParseErrorKind::UnexpectedToken {
                    token: operator_token.value.clone(),
                },
                operator_token,
            ))
        }
    };

    let rhs_bp = match assoc {
        Assoc::Left => bp,
        Assoc::Right => bp.lower(),
    };
    let right = parse_expr(parser, rhs_bp)?;

    Ok(Expr::Binary(BinaryExpr {
        index: left.index(),
        operation,
        lvalue: Box::new(left),
        rvalue: Box::new(right),
    }))
}

pub fn parse_ternary_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
    _assoc: Assoc,
) -> Result<Expr, ParseError> {
    parser.advance();

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Colon)?;
    let otherwise = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Ternary(TernaryExpr {
        index: left.index(),
        condition: Box::new(left),
        value: Box::new(value),
        otherwise: Box::new(otherwise),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let index = parser.position();
    parser.advance();

    if parser.current_token_kind() == TokenKind::CloseParen {
        parser.advance();
        return Ok(Expr::Tuple(TupleExpr {
            index,
            elements: vec![],
        }));
    }

    let first = parse_expr(parser, BindingPower::Default)?;

    if parser.current_token_kind() != TokenKind::Comma {
        parser.expect(TokenKind::CloseParen)?;
        return Ok(first);
    }

    let mut elements = vec![first];
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        if parser.current_token_kind() == TokenKind::CloseParen {
            break;
        }
        elements.push(parse_expr(parser, BindingPower::Default)?);
    }
    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Tuple(TupleExpr { index, elements }))
}

pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
    _assoc: Assoc,
) -> Result<Expr, ParseError> {
    parser.advance();
    let arguments = parse_expr_list(parser, TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr {
        index: left.index(),
        expression: Box::new(left),
        arguments,
    }))
}

pub fn parse_subscript_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
    _assoc: Assoc,
) -> Result<Expr, ParseError> {
    parser.advance();
    let arguments = parse_expr_list(parser, TokenKind::CloseBracket)?;

    Ok(Expr::Subscript(SubscriptExpr {
        index: left.index(),
        expression: Box::new(left),
        arguments,
    }))
}

pub fn parse_scope_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
    _assoc: Assoc,
) -> Result<Expr, ParseError> {
    let mut identifiers = vec![];

    loop {
        parser.advance();
        let name = parser.expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a member name after `.`")),
        )?;
        identifiers.push(name.value);

        if parser.current_token_kind() != TokenKind::Dot {
            break;
        }
    }

    Ok(Expr::Scope(ScopeExpr {
        index: left.index(),
        expression: Box::new(left),
        identifiers,
    }))
}

/// Comma-separated expressions up to (and through) `closer`.
fn parse_expr_list(parser: &mut Parser, closer: TokenKind) -> Result<Vec<Expr>, ParseError> {
    let mut items = vec![];

    if parser.current_token_kind() != closer {
        loop {
            items.push(parse_expr(parser, BindingPower::Default)?);
            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }
    parser.expect(closer)?;

    Ok(items)
}

/// Decodes a numeric literal from its raw spelling.
///
/// Prefixes `0x`/`0o`/`0b` select the radix and produce unsigned payloads;
/// suffixes pick the payload for decimal spellings: `u` unsigned, `f`
/// float, `i` imaginary. Out-of-range values are parse errors, never
/// silently wrapped.
pub fn decode_number(token: &Token) -> Result<ConstValue, ParseError> {
    let text = token.value.as_str();
    let malformed = || {
        ParseError::new(
            ParseErrorKind::MalformedNumber {
                literal: String::from(text),
            },
            token.clone(),
        )
    };

    let lowered = text.to_ascii_lowercase();
    if let Some(radix) = match lowered.get(..2) {
        Some("0x") => Some(16),
        Some("0o") => Some(8),
        Some("0b") => Some(2),
        _ => None,
    } {
        let digits = lowered[2..].trim_end_matches('u');
        let value = u64::from_str_radix(digits, radix).map_err(|_| malformed())?;
        return Ok(ConstValue::UInteger(value));
    }

    if let Some(rest) = text.strip_suffix('i') {
        let imag = rest.parse::<f64>().map_err(|_| malformed())?;
        return Ok(ConstValue::Complex { real: 0.0, imag });
    }
    if let Some(rest) = text.strip_suffix('f') {
        let value = rest.parse::<f64>().map_err(|_| malformed())?;
        return Ok(ConstValue::Floating(value));
    }
    if let Some(rest) = text.strip_suffix('u') {
        let value = rest.parse::<u64>().map_err(|_| malformed())?;
        return Ok(ConstValue::UInteger(value));
    }
    if text.contains('.') || text.contains('e') || text.contains('E') {
        let value = text.parse::<f64>().map_err(|_| malformed())?;
        return Ok(ConstValue::Floating(value));
    }

    let value = text.parse::<i64>().map_err(|_| malformed())?;
    Ok(ConstValue::Integer(value))
}
