use crate::{
    ast::{
        ast::{ClassDecl, EnumDecl, Import, Module, StructDecl},
        expressions::{Expr, FunctionExpr, TupleExpr},
        statements::{Body, DoWhile, For, If, JumpKind, Statement, While},
    },
    errors::errors::ParseError,
    lexer::tokens::TokenKind,
};

use super::{
    expr::parse_expr,
    lookups::BindingPower,
    parser::Parser,
    types::{decode_uint, parse_array_dims, parse_declaration, parse_identifier_expr},
};

/// The module-level loop: dispatches on the leading keyword and appends
/// each construct to the matching `Module` sequence until end of stream.
pub fn parse_module(parser: &mut Parser) -> Result<Module, ParseError> {
    let mut module = Module::default();

    while parser.has_tokens() {
        match parser.current_token_kind() {
            TokenKind::Import | TokenKind::Include => {
                module.imports.push(parse_import(parser)?);
            }
            TokenKind::Class => {
                module.classes.push(parse_class(parser)?);
            }
            TokenKind::Struct => {
                module.structs.push(parse_struct(parser)?);
            }
            TokenKind::Enum => {
                module.enums.push(parse_enum(parser)?);
            }
            TokenKind::Def => {
                module.functions.push(parse_function(parser)?);
            }
            TokenKind::Static
            | TokenKind::Public
            | TokenKind::Private
            | TokenKind::Ref
            | TokenKind::Identifier => {
                module.variables.push(parse_declaration(parser, true, false)?);
                parser.expect(TokenKind::Semicolon)?;
            }
            _ => return Err(parser.unexpected("expecting a top-level declaration")),
        }
    }

    Ok(module)
}

fn parse_import(parser: &mut Parser) -> Result<Import, ParseError> {
    let index = parser.position();
    let is_include = parser.current_token_kind() == TokenKind::Include;
    parser.advance();

    let first = parser.expect_error(
        TokenKind::Identifier,
        Some(parser.unexpected("expecting something to import")),
    )?;
    let mut path = vec![first.value];

    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        let next = parser.expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting another identifier after `.`")),
        )?;
        path.push(next.value);
    }

    let alias = if parser.current_token_kind() == TokenKind::As {
        parser.advance();
        let name = parser.expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting an identifier to alias the import as")),
        )?;
        Some(name.value)
    } else {
        None
    };

    parser.expect(TokenKind::Semicolon)?;

    Ok(Import {
        index,
        path,
        is_include,
        alias,
    })
}

fn parse_class(parser: &mut Parser) -> Result<ClassDecl, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::Class)?;

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a name for the class")),
        )?
        .value;

    let generics = parse_generic_params(parser)?;

    let base = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_identifier_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];
    let mut methods = vec![];

    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.unexpected("expecting a member declaration"));
        }

        if parser.current_token_kind() == TokenKind::Def {
            methods.push(parse_function(parser)?);
        } else if method_ahead(parser) {
            methods.push(parse_method(parser)?);
        } else {
            members.push(parse_declaration(parser, true, false)?);
            parser.expect(TokenKind::Semicolon)?;
        }
    }
    parser.advance();

    Ok(ClassDecl {
        index,
        name,
        base,
        generics,
        members,
        methods,
    })
}

fn parse_struct(parser: &mut Parser) -> Result<StructDecl, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::Struct)?;

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a name for the struct")),
        )?
        .value;

    let base = if parser.current_token_kind() == TokenKind::Colon {
        parser.advance();
        Some(parse_identifier_expr(parser)?)
    } else {
        None
    };

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.unexpected("expecting a member declaration"));
        }
        members.push(parse_declaration(parser, true, false)?);
        parser.expect(TokenKind::Semicolon)?;
    }
    parser.advance();

    Ok(StructDecl {
        index,
        name,
        base,
        members,
    })
}

fn parse_enum(parser: &mut Parser) -> Result<EnumDecl, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::Enum)?;

    let name = parser
        .expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a name for the enum")),
        )?
        .value;

    parser.expect(TokenKind::OpenCurly)?;

    let mut members = vec![];
    let mut values = vec![];
    // Unvalued members count up from 0, or from the last explicit value
    let mut next_value: Option<u64> = Some(0);

    loop {
        let member = parser.expect_error(
            TokenKind::Identifier,
            Some(parser.unexpected("expecting a member name")),
        )?;

        if parser.current_token_kind() == TokenKind::Assignment {
            parser.advance();
            let token = parser.expect(TokenKind::Number)?;
            next_value = Some(decode_uint(&token)?);
        }

        let value = match next_value {
            Some(value) => value,
            None => return Err(parser.unexpected("enum value overflowed")),
        };
        members.push(member.value);
        values.push(value);
        next_value = value.checked_add(1);

        if parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            if parser.current_token_kind() == TokenKind::CloseCurly {
                break;
            }
        } else {
            break;
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    Ok(EnumDecl::new(index, name, members, values))
}

/// `def`-form function definition, used at module level and for `def`
/// methods. The name may be a dotted path (`def List.push(...)`).
fn parse_function(parser: &mut Parser) -> Result<FunctionExpr, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::Def)?;

    let (is_static, is_public) = parse_function_specifiers(parser);

    let first = parser.expect_error(
        TokenKind::Identifier,
        Some(parser.unexpected("expecting a name for the function")),
    )?;
    let mut identifiers = vec![first.value];
    while parser.current_token_kind() == TokenKind::Dot {
        parser.advance();
        identifiers.push(parser.expect(TokenKind::Identifier)?.value);
    }

    finish_function(parser, index, identifiers, is_static, is_public)
}

/// Bare-form method inside a class body: `name[<T, U>](args...)`.
fn parse_method(parser: &mut Parser) -> Result<FunctionExpr, ParseError> {
    let index = parser.position();
    let (is_static, is_public) = parse_function_specifiers(parser);
    let name = parser.expect(TokenKind::Identifier)?;

    finish_function(parser, index, vec![name.value], is_static, is_public)
}

fn parse_function_specifiers(parser: &mut Parser) -> (bool, bool) {
    let mut is_static = false;
    let mut is_public = true;

    loop {
        match parser.current_token_kind() {
            TokenKind::Static => {
                is_static = true;
                parser.advance();
            }
            TokenKind::Public => {
                is_public = true;
                parser.advance();
            }
            TokenKind::Private => {
                is_public = false;
                parser.advance();
            }
            _ => return (is_static, is_public),
        }
    }
}

/// Shared tail of both function forms: generic parameters, argument list,
/// optional return clause, then a block body or a bodiless `;` forward
/// declaration.
fn finish_function(
    parser: &mut Parser,
    index: usize,
    identifiers: Vec<String>,
    is_static: bool,
    is_public: bool,
) -> Result<FunctionExpr, ParseError> {
    let generics = parse_generic_params(parser)?;

    parser.expect(TokenKind::OpenParen)?;
    let mut arguments = vec![];
    if parser.current_token_kind() != TokenKind::CloseParen {
        loop {
            arguments.push(parse_declaration(parser, false, true)?);
            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
    }
    parser.expect(TokenKind::CloseParen)?;

    let mut return_type = None;
    let mut return_array = vec![];
    let mut is_return_ref = false;
    if parser.current_token_kind() == TokenKind::Arrow {
        parser.advance();
        if parser.current_token_kind() == TokenKind::Ref {
            is_return_ref = true;
            parser.advance();
        }
        return_type = Some(parse_identifier_expr(parser)?);
        return_array = parse_array_dims(parser)?;
    }

    let body = if parser.current_token_kind() == TokenKind::Semicolon {
        parser.advance();
        vec![]
    } else {
        parse_block(parser)?
    };

    Ok(FunctionExpr {
        index,
        identifiers,
        generics,
        return_type,
        return_array,
        is_return_ref,
        arguments,
        body,
        is_static,
        is_public,
    })
}

/// `<T, U, ...>` - plain generic parameter names, no nesting.
fn parse_generic_params(parser: &mut Parser) -> Result<Vec<String>, ParseError> {
    let mut generics = vec![];

    if parser.current_token_kind() == TokenKind::Less {
        parser.advance();
        loop {
            let name = parser.expect_error(
                TokenKind::Identifier,
                Some(parser.unexpected("expecting a generic parameter name")),
            )?;
            generics.push(name.value);
            if parser.current_token_kind() == TokenKind::Comma {
                parser.advance();
            } else {
                break;
            }
        }
        parser.expect(TokenKind::Greater)?;
    }

    Ok(generics)
}

/// Bounded lookahead deciding field vs. bare method in a class body: past
/// the specifiers, a name and an optional generic parameter list, a method
/// shows its `(`. The cursor is always restored.
fn method_ahead(parser: &mut Parser) -> bool {
    let saved = parser.position();

    let looked = (|| -> Result<bool, ParseError> {
        loop {
            match parser.current_token_kind() {
                TokenKind::Static | TokenKind::Public | TokenKind::Private => {
                    parser.advance();
                }
                _ => break,
            }
        }
        parser.expect(TokenKind::Identifier)?;

        if parser.current_token_kind() == TokenKind::Less {
            parser.advance();
            loop {
                parser.expect(TokenKind::Identifier)?;
                if parser.current_token_kind() == TokenKind::Comma {
                    parser.advance();
                } else {
                    break;
                }
            }
            parser.expect(TokenKind::Greater)?;
        }

        Ok(parser.current_token_kind() == TokenKind::OpenParen)
    })();

    parser.set_position(saved);
    matches!(looked, Ok(true))
}

/// A brace-delimited statement block.
pub fn parse_block(parser: &mut Parser) -> Result<Vec<Body>, ParseError> {
    parser.expect(TokenKind::OpenCurly)?;

    let mut block = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if parser.current_token_kind() == TokenKind::Eof {
            return Err(parser.unexpected("expecting a statement, met with a dead end"));
        }
        block.push(parse_body(parser)?);
    }
    parser.advance();

    Ok(block)
}

/// One statement inside a block, dispatched on the leading keyword.
pub fn parse_body(parser: &mut Parser) -> Result<Body, ParseError> {
    match parser.current_token_kind() {
        TokenKind::If => parse_if(parser),
        TokenKind::While => parse_while(parser),
        TokenKind::Do => parse_do_while(parser),
        TokenKind::For => parse_for(parser),
        TokenKind::Break => {
            let index = parser.position();
            parser.advance();
            parser.expect(TokenKind::Semicolon)?;
            Ok(Body::Statement(Statement::new(index, JumpKind::Break, None)))
        }
        TokenKind::Continue => {
            let index = parser.position();
            parser.advance();
            parser.expect(TokenKind::Semicolon)?;
            Ok(Body::Statement(Statement::new(
                index,
                JumpKind::Continue,
                None,
            )))
        }
        TokenKind::Return => {
            let index = parser.position();
            parser.advance();
            let expression = if parser.current_token_kind() != TokenKind::Semicolon {
                Some(parse_expr(parser, BindingPower::Default)?)
            } else {
                None
            };
            parser.expect(TokenKind::Semicolon)?;
            Ok(Body::Statement(Statement::new(
                index,
                JumpKind::Return,
                expression,
            )))
        }
        _ => {
            let expression = parse_expression_or_declaration(parser)?;
            parser.expect(TokenKind::Semicolon)?;
            Ok(Body::Expression(expression))
        }
    }
}

/// A statement that is either a declaration or a plain expression.
///
/// A leading specifier keyword commits to a declaration. A leading
/// identifier is ambiguous, so the declaration parse runs speculatively
/// and `foo(1)`-style statements fall back to a clean expression parse.
pub fn parse_expression_or_declaration(parser: &mut Parser) -> Result<Expr, ParseError> {
    match parser.current_token_kind() {
        TokenKind::Static | TokenKind::Public | TokenKind::Private | TokenKind::Ref => {
            Ok(Expr::Declaration(parse_declaration(parser, true, false)?))
        }
        TokenKind::Identifier => {
            if let Some(declaration) = parser.try_parse(|p| parse_declaration(p, false, false)) {
                Ok(Expr::Declaration(declaration))
            } else {
                parse_expr(parser, BindingPower::Default)
            }
        }
        _ => parse_expr(parser, BindingPower::Default),
    }
}

fn parse_if(parser: &mut Parser) -> Result<Body, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::If)?;

    let mut conditions = vec![parse_expr(parser, BindingPower::Default)?];
    let mut bodies = vec![parse_block(parser)?];

    while parser.current_token_kind() == TokenKind::Elif {
        parser.advance();
        conditions.push(parse_expr(parser, BindingPower::Default)?);
        bodies.push(parse_block(parser)?);
    }

    let else_body = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_block(parser)?
    } else {
        vec![]
    };

    Ok(Body::If(If::new(index, conditions, bodies, else_body)))
}

fn parse_while(parser: &mut Parser) -> Result<Body, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::While)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Body::While(While {
        index,
        condition,
        body,
    }))
}

fn parse_do_while(parser: &mut Parser) -> Result<Body, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::Do)?;

    let body = parse_block(parser)?;
    parser.expect_error(
        TokenKind::While,
        Some(parser.unexpected("expecting a `while` keyword")),
    )?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Body::DoWhile(DoWhile {
        index,
        condition,
        body,
    }))
}

fn parse_for(parser: &mut Parser) -> Result<Body, ParseError> {
    let index = parser.position();
    parser.expect(TokenKind::For)?;

    let target_index = parser.position();
    let mut target = parse_expr(parser, BindingPower::Default)?;

    // `for a, b in pairs` binds a tuple target
    if parser.current_token_kind() == TokenKind::Comma {
        let mut elements = vec![target];
        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            elements.push(parse_expr(parser, BindingPower::Default)?);
        }
        target = Expr::Tuple(TupleExpr {
            index: target_index,
            elements,
        });
    }

    parser.expect_error(
        TokenKind::In,
        Some(parser.unexpected("expecting an `in` keyword")),
    )?;
    let iterator = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Body::For(For {
        index,
        target,
        iterator,
        body,
    }))
}
