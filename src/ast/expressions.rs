use crate::lexer::tokens::Operator;

use super::statements::Body;

/// Every syntactic expression form. Consumers must match exhaustively;
/// adding a variant is a compile-time-checked update everywhere.
#[derive(Debug, Clone)]
pub enum Expr {
    Identifier(IdentifierExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    Subscript(SubscriptExpr),
    Call(CallExpr),
    Declaration(DeclarationExpr),
    Function(FunctionExpr),
    Scope(ScopeExpr),
    Constant(ConstExpr),
    Tuple(TupleExpr),
}

impl Expr {
    /// Token offset of the node, for diagnostics only.
    pub fn index(&self) -> usize {
        match self {
            Expr::Identifier(e) => e.index,
            Expr::Unary(e) => e.index,
            Expr::Binary(e) => e.index,
            Expr::Ternary(e) => e.index,
            Expr::Subscript(e) => e.index,
            Expr::Call(e) => e.index,
            Expr::Declaration(e) => e.index,
            Expr::Function(e) => e.index,
            Expr::Scope(e) => e.index,
            Expr::Constant(e) => e.index,
            Expr::Tuple(e) => e.index,
        }
    }
}

/// One generic argument slot of an identifier-expression: a nested type or
/// a fixed array-size binding.
#[derive(Debug, Clone)]
pub enum GenericArg {
    Type(IdentifierExpr),
    ArraySize(Vec<u64>),
}

/// A dotted identifier path with optional generic arguments, e.g.
/// `collections.list<int>`.
#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub index: usize,
    pub identifiers: Vec<String>,
    pub generics: Vec<GenericArg>,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub index: usize,
    pub operation: Operator,
    pub rvalue: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub index: usize,
    pub operation: Operator,
    pub lvalue: Box<Expr>,
    pub rvalue: Box<Expr>,
}

/// `condition ? value : otherwise` - all three operands required.
#[derive(Debug, Clone)]
pub struct TernaryExpr {
    pub index: usize,
    pub condition: Box<Expr>,
    pub value: Box<Expr>,
    pub otherwise: Box<Expr>,
}

#[derive(Debug, Clone)]
pub struct SubscriptExpr {
    pub index: usize,
    pub expression: Box<Expr>,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct CallExpr {
    pub index: usize,
    pub expression: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// A variable declaration: in statement position, as a class/struct field,
/// or as a function argument. A declaration with neither a type nor an
/// initializer is rejected at parse time.
#[derive(Debug, Clone)]
pub struct DeclarationExpr {
    pub index: usize,
    pub var_type: Option<IdentifierExpr>,
    pub var_array: Vec<u64>,
    pub var_name: String,
    pub expression: Option<Box<Expr>>,
    pub is_ref: bool,
    pub is_static: bool,
    pub is_public: bool,
}

/// A function definition. `identifiers` is the dotted name path, which
/// allows qualified method definitions such as `def List.push(...)`.
/// An empty `body` with a bodiless source form is a forward declaration.
#[derive(Debug, Clone)]
pub struct FunctionExpr {
    pub index: usize,
    pub identifiers: Vec<String>,
    pub generics: Vec<String>,
    pub return_type: Option<IdentifierExpr>,
    pub return_array: Vec<u64>,
    pub is_return_ref: bool,
    pub arguments: Vec<DeclarationExpr>,
    pub body: Vec<Body>,
    pub is_static: bool,
    pub is_public: bool,
}

/// Member access suffix on an arbitrary base expression, e.g. the `.y` in
/// `f(x)[0].y`.
#[derive(Debug, Clone)]
pub struct ScopeExpr {
    pub index: usize,
    pub expression: Box<Expr>,
    pub identifiers: Vec<String>,
}

/// A literal payload. Exactly one representation is active, selected by
/// the variant - never more than one at a time.
#[derive(Debug, Clone)]
pub enum ConstValue {
    Character(char),
    UInteger(u64),
    Integer(i64),
    Floating(f64),
    Complex { real: f64, imag: f64 },
    Buffer(Vec<u8>),
    String(String),
}

#[derive(Debug, Clone)]
pub struct ConstExpr {
    pub index: usize,
    pub value: ConstValue,
}

#[derive(Debug, Clone)]
pub struct TupleExpr {
    pub index: usize,
    pub elements: Vec<Expr>,
}
