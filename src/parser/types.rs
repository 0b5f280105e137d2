//! Type-position parsing: identifier-expressions with generic arguments,
//! fixed array sizes, and variable declarations.
//!
//! Declarations are the one place the grammar is not strict LL(1): a
//! statement that begins with an identifier may be a typed declaration
//! (`Foo x = 1`) or a plain expression (`foo(1)`). The typed form is
//! speculatively parsed under [`Parser::try_parse`], which rolls the cursor
//! back on failure so the expression reparse starts clean.

use crate::{
    ast::expressions::{ConstValue, DeclarationExpr, GenericArg, IdentifierExpr},
    errors::errors::{ParseError, ParseErrorKind},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{decode_number, parse_expr},
    lookups::BindingPower,
    parser::Parser,
};

/// Parses a dotted identifier path with an optional generic argument list,
/// e.g. `collections.map<str, int>` or `array<float, 16>`.
pub fn parse_identifier_expr(parser: &mut Parser) -> Result<IdentifierExpr, ParseError> {
    let index = parser.position();

    let first = parser.expect(TokenKind::Identifier)?;
    let mut identifiers = vec![first.value];

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        identifiers.push(parser.expect(TokenKind::Identifier)?.value);
    }

    let mut generics = vec![];
    if parser.current_token_kind() == TokenKind::Less {
        parser.advance();

        loop {
            match parser.current_token_kind() {
                TokenKind::Identifier => {
                    generics.push(GenericArg::Type(parse_identifier_expr(parser)?));
                }
                TokenKind::Number => {
                    let token = parser.advance().clone();
                    generics.push(GenericArg::ArraySize(vec![decode_uint(&token)?]));
                }
                _ => return Err(parser.unexpected("expecting a generic argument")),
            }

            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }

        match parser.current_token_kind() {
            TokenKind::Greater => {
                parser.advance();
            }
            // `list<list<int>>` lexes the closing pair as one `>>` token
            TokenKind::ShiftRight => parser.split_shift_right(),
            _ => return Err(parser.unexpected("expecting `>` to close the generic arguments")),
        }
    }

    Ok(IdentifierExpr {
        index,
        identifiers,
        generics,
    })
}

/// Parses trailing fixed-array dimensions: `[3]`, `[3][4]`, ...
pub fn parse_array_dims(parser: &mut Parser) -> Result<Vec<u64>, ParseError> {
    let mut dims = vec![];

    while parser.current_token_kind() == TokenKind::OpenBracket {
        parser.advance();
        let token = parser.expect(TokenKind::Number)?;
        dims.push(decode_uint(&token)?);
        parser.expect(TokenKind::CloseBracket)?;
    }

    Ok(dims)
}

/// Parses a variable declaration.
///
/// `[static] [public|private] [ref] Type[N]* name [= expr]`, or the
/// inferred `name = expr` form. The inferred form is only reachable once a
/// specifier keyword or an argument context (`allow_untyped`) has committed
/// the parse to a declaration; a declaration with neither type nor
/// initializer is rejected.
pub fn parse_declaration(
    parser: &mut Parser,
    allow_static: bool,
    allow_untyped: bool,
) -> Result<DeclarationExpr, ParseError> {
    let index = parser.position();

    let mut is_static = false;
    let mut is_public = true;
    let mut saw_specifier = false;

    loop {
        match parser.current_token_kind() {
            TokenKind::Static => {
                if !allow_static {
                    return Err(parser.unexpected("the `static` keyword is not allowed here"));
                }
                is_static = true;
                saw_specifier = true;
                parser.advance();
            }
            TokenKind::Public => {
                is_public = true;
                saw_specifier = true;
                parser.advance();
            }
            TokenKind::Private => {
                is_public = false;
                saw_specifier = true;
                parser.advance();
            }
            _ => break,
        }
    }

    let mut is_ref = false;
    if parser.current_token_kind() == TokenKind::Ref {
        is_ref = true;
        saw_specifier = true;
        parser.advance();
    }

    let typed = parser.try_parse(|parser| {
        let var_type = parse_identifier_expr(parser)?;
        let var_array = parse_array_dims(parser)?;
        let name = parser.expect(TokenKind::Identifier)?;
        Ok((var_type, var_array, name.value))
    });

    if let Some((var_type, var_array, var_name)) = typed {
        let expression = if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            Some(Box::new(parse_expr(parser, BindingPower::Default)?))
        } else {
            None
        };

        return Ok(DeclarationExpr {
            index,
            var_type: Some(var_type),
            var_array,
            var_name,
            expression,
            is_ref,
            is_static,
            is_public,
        });
    }

    if !allow_untyped && !saw_specifier {
        return Err(parser.unexpected("expecting a declaration"));
    }

    let var_name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a variable name")),
        )?
        .value;

    if parser.current_token_kind() != TokenKind::Assignment {
        let token = parser.current_token().clone();
        return Err(ParseError::new(
            ParseErrorKind::MissingTypeOrInitializer,
            token,
        ));
    }
    parser.advance();
    let expression = parse_expr(parser, BindingPower::Default)?;

    Ok(DeclarationExpr {
        index,
        var_type: None,
        var_array: vec![],
        var_name,
        expression: Some(Box::new(expression)),
        is_ref,
        is_static,
        is_public,
    })
}

/// Decodes a numeric literal that must be an unsigned integer (array
/// dimensions, enum member values).
pub fn decode_uint(token: &Token) -> Result<u64, ParseError> {
    match decode_number(token)? {
        ConstValue::UInteger(value) => Ok(value),
        ConstValue::Integer(value) if value >= 0 => Ok(value as u64),
        _ => Err(ParseError::new(
            ParseErrorKind::MalformedNumber {
                literal: token.value.clone(),
            },
            token.clone(),
        )),
    }
}
