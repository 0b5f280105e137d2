use super::expressions::Expr;

/// Everything that can appear inside a function body.
#[derive(Debug, Clone)]
pub enum Body {
    Expression(Expr),
    If(If),
    While(While),
    DoWhile(DoWhile),
    For(For),
    Statement(Statement),
}

impl Body {
    /// Token offset of the node, for diagnostics only.
    pub fn index(&self) -> usize {
        match self {
            Body::Expression(e) => e.index(),
            Body::If(b) => b.index,
            Body::While(b) => b.index,
            Body::DoWhile(b) => b.index,
            Body::For(b) => b.index,
            Body::Statement(b) => b.index,
        }
    }
}

/// A whole `if`/`elif`/`else` chain, flattened: condition `i` guards
/// `bodies[i]`, and the sequences stay the same length.
#[derive(Debug, Clone)]
pub struct If {
    pub index: usize,
    pub conditions: Vec<Expr>,
    pub bodies: Vec<Vec<Body>>,
    pub else_body: Vec<Body>,
}

impl If {
    pub fn new(
        index: usize,
        conditions: Vec<Expr>,
        bodies: Vec<Vec<Body>>,
        else_body: Vec<Body>,
    ) -> Self {
        assert_eq!(
            conditions.len(),
            bodies.len(),
            "if conditions and bodies must stay parallel"
        );
        If {
            index,
            conditions,
            bodies,
            else_body,
        }
    }
}

#[derive(Debug, Clone)]
pub struct While {
    pub index: usize,
    pub condition: Expr,
    pub body: Vec<Body>,
}

#[derive(Debug, Clone)]
pub struct DoWhile {
    pub index: usize,
    pub condition: Expr,
    pub body: Vec<Body>,
}

/// `for target in iterator { ... }` - `target` is the binding pattern,
/// possibly a tuple.
#[derive(Debug, Clone)]
pub struct For {
    pub index: usize,
    pub target: Expr,
    pub iterator: Expr,
    pub body: Vec<Body>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Continue,
    Break,
    Return,
}

/// A jump statement. Only `return` may carry an expression.
#[derive(Debug, Clone)]
pub struct Statement {
    pub index: usize,
    pub statement: JumpKind,
    pub expression: Option<Expr>,
}

impl Statement {
    pub fn new(index: usize, statement: JumpKind, expression: Option<Expr>) -> Self {
        assert!(
            expression.is_none() || statement == JumpKind::Return,
            "only return statements carry an expression"
        );
        Statement {
            index,
            statement,
            expression,
        }
    }
}
