//! Integration tests for the whole front end.
//!
//! These drive the complete pipeline from source text through tokenization
//! and parsing, and check the contracts a caller relies on: both
//! construction paths, fail-fast behavior, and diagnostic formatting.

use frontend::{
    ast::{expressions::Expr, statements::Body},
    errors::errors::Error,
    lexer::lexer::tokenize,
    parser::parser::Parser,
};

const SAMPLE: &str = "
include core.io;
import core.collections as collections;

enum Level { Debug, Info, Warning = 10, Error }

struct Vec2 { float x; float y; }

class Logger : Writer {
    static int instances;
    private str prefix;

    def log(Level level, str message) {
        if level == Level.Warning {
            count += 1;
        } elif level == Level.Error {
            flush();
        } else {
            buffer(message);
        }
    }

    flush() -> int {
        int written = 0;
        while written < pending {
            written += write_one();
        }
        return written;
    }
}

def static make_logger(str prefix = \"app\") -> ref Logger;

def main() -> int {
    list<list<int>> table;
    Logger log = make_logger();
    for i, row in enumerate(table) {
        do {
            row = row ? transform(row) : row;
        } while unstable(row);
    }
    return 0;
}

int version = 3;
";

#[test]
fn test_parse_complete_module() {
    let mut parser = Parser::from_source(SAMPLE);
    let module = parser.parse().expect("the sample module should parse");

    assert_eq!(module.imports.len(), 2);
    assert!(module.imports[0].is_include);
    assert_eq!(module.imports[1].alias.as_deref(), Some("collections"));

    assert_eq!(module.enums.len(), 1);
    assert_eq!(module.enums[0].values, [0, 1, 10, 11]);

    assert_eq!(module.structs.len(), 1);
    assert_eq!(module.structs[0].members.len(), 2);

    assert_eq!(module.classes.len(), 1);
    let class = &module.classes[0];
    assert_eq!(class.members.len(), 2);
    assert_eq!(class.methods.len(), 2);

    assert_eq!(module.functions.len(), 2);
    assert!(module.functions[0].body.is_empty()); // forward declaration
    assert!(module.functions[0].is_static);
    assert!(module.functions[0].is_return_ref);

    assert_eq!(module.variables.len(), 1);
    assert_eq!(module.variables[0].var_name, "version");
}

#[test]
fn test_pre_lexed_and_raw_text_paths_agree() {
    let tokens = tokenize(SAMPLE).expect("the sample module should tokenize");

    let mut pre_lexed = Parser::new(tokens);
    let mut raw_text = Parser::from_source(SAMPLE);

    let from_tokens = pre_lexed.parse().expect("pre-lexed parse should succeed");
    let from_source = raw_text.parse().expect("raw-text parse should succeed");

    // Same tokens in, same shape out
    assert_eq!(format!("{:?}", from_tokens), format!("{:?}", from_source));
}

#[test]
fn test_parsers_are_independent() {
    // Two instances share no state; interleaved use is fine
    let mut first = Parser::from_source("int a = 1;");
    let mut second = Parser::from_source("int b = 2;");

    let module_b = second.parse().unwrap();
    let module_a = first.parse().unwrap();

    assert_eq!(module_a.variables[0].var_name, "a");
    assert_eq!(module_b.variables[0].var_name, "b");
}

#[test]
fn test_fail_fast_reports_first_error_only() {
    // Both statements are malformed; only the first is ever reported
    let mut parser = Parser::from_source("int x = ;\nint y = = 2;");
    let error = parser.parse().expect_err("parse should fail");

    let Error::Parse(error) = error else {
        panic!("expected a parse error")
    };
    assert_eq!(error.format(), "unexpected token `;` at line 1 column 9");
}

#[test]
fn test_lex_failure_surfaces_from_parse() {
    let mut parser = Parser::from_source("def f() {\n    int x = 1 $ 2;\n}");
    let error = parser.parse().expect_err("parse should fail");

    let Error::Lex(error) = error else {
        panic!("expected a lex error")
    };
    assert_eq!(error.format(), "unrecognized character `$` at line 2 column 15");
}

#[test]
fn test_single_construct_lands_in_matching_sequence() {
    let cases = [
        "import a;",
        "class C { }",
        "struct S { }",
        "enum E { A }",
        "def f() { }",
        "int x = 1;",
    ];

    for (position, source) in cases.iter().enumerate() {
        let mut parser = Parser::from_source(source);
        let module = parser.parse().expect("each single construct should parse");

        let counts = [
            module.imports.len(),
            module.classes.len(),
            module.structs.len(),
            module.enums.len(),
            module.functions.len(),
            module.variables.len(),
        ];
        for (sequence, count) in counts.iter().enumerate() {
            let expected = usize::from(sequence == position);
            assert_eq!(
                *count, expected,
                "source {:?} filled the wrong sequence",
                source
            );
        }
    }
}

#[test]
fn test_method_bodies_parse_to_nested_control_flow() {
    let mut parser = Parser::from_source(
        "class Machine {
            step() {
                while running {
                    if halted { break; } else { tick(); }
                }
            }
        }",
    );
    let module = parser.parse().unwrap();

    let method = &module.classes[0].methods[0];
    let Body::While(outer) = &method.body[0] else {
        panic!("expected a while body")
    };
    let Body::If(inner) = &outer.body[0] else {
        panic!("expected an if inside the while")
    };
    assert_eq!(inner.conditions.len(), inner.bodies.len());
    assert!(matches!(inner.bodies[0][0], Body::Statement(_)));
    assert!(matches!(
        inner.else_body[0],
        Body::Expression(Expr::Call(_))
    ));
}
