use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("import", TokenKind::Import);
        map.insert("include", TokenKind::Include);
        map.insert("as", TokenKind::As);
        map.insert("def", TokenKind::Def);
        map.insert("class", TokenKind::Class);
        map.insert("struct", TokenKind::Struct);
        map.insert("enum", TokenKind::Enum);
        map.insert("static", TokenKind::Static);
        map.insert("public", TokenKind::Public);
        map.insert("private", TokenKind::Private);
        map.insert("ref", TokenKind::Ref);
        map.insert("if", TokenKind::If);
        map.insert("elif", TokenKind::Elif);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("do", TokenKind::Do);
        map.insert("for", TokenKind::For);
        map.insert("in", TokenKind::In);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Eof,
    Identifier,
    Number,
    Character,
    Str,
    Buffer,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,
    And,

    Pipe,
    Ampersand,
    Tilde,
    ShiftLeft,
    ShiftRight,

    Dot,
    Semicolon,
    Colon,
    Question,
    Comma,
    Arrow,

    PlusEquals,
    MinusEquals,
    StarEquals,
    SlashEquals,
    PercentEquals,
    CaretEquals,

    Plus,
    Dash,
    Star,
    Slash,
    Percent,
    Caret,

    // Reserved
    Import,
    Include,
    As,
    Def,
    Class,
    Struct,
    Enum,
    Static,
    Public,
    Private,
    Ref,
    If,
    Elif,
    Else,
    While,
    Do,
    For,
    In,
    Break,
    Continue,
    Return,
}

/// Operator tags carried by unary and binary AST nodes.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    Assign,
    IpAdd,
    IpSub,
    IpMul,
    IpDiv,
    IpMod,
    IpPow,

    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    And,
    Or,
    Not,

    BitAnd,
    BitOr,
    BitNot,
    Shl,
    Shr,

    Positive,
    Negative,
}

impl TokenKind {
    /// The binary operator tag for this token, if it is one.
    pub fn operator(self) -> Option<Operator> {
        match self {
            TokenKind::Plus => Some(Operator::Add),
            TokenKind::Dash => Some(Operator::Sub),
            TokenKind::Star => Some(Operator::Mul),
            TokenKind::Slash => Some(Operator::Div),
            TokenKind::Percent => Some(Operator::Mod),
            TokenKind::Caret => Some(Operator::Pow),
            TokenKind::Assignment => Some(Operator::Assign),
            TokenKind::PlusEquals => Some(Operator::IpAdd),
            TokenKind::MinusEquals => Some(Operator::IpSub),
            TokenKind::StarEquals => Some(Operator::IpMul),
            TokenKind::SlashEquals => Some(Operator::IpDiv),
            TokenKind::PercentEquals => Some(Operator::IpMod),
            TokenKind::CaretEquals => Some(Operator::IpPow),
            TokenKind::Equals => Some(Operator::Equal),
            TokenKind::NotEquals => Some(Operator::NotEqual),
            TokenKind::Less => Some(Operator::Less),
            TokenKind::Greater => Some(Operator::Greater),
            TokenKind::LessEquals => Some(Operator::LessEqual),
            TokenKind::GreaterEquals => Some(Operator::GreaterEqual),
            TokenKind::And => Some(Operator::And),
            TokenKind::Or => Some(Operator::Or),
            TokenKind::Ampersand => Some(Operator::BitAnd),
            TokenKind::Pipe => Some(Operator::BitOr),
            TokenKind::ShiftLeft => Some(Operator::Shl),
            TokenKind::ShiftRight => Some(Operator::Shr),
            _ => None,
        }
    }

    /// The prefix operator tag for this token, if it can open a unary
    /// expression.
    pub fn unary_operator(self) -> Option<Operator> {
        match self {
            TokenKind::Plus => Some(Operator::Positive),
            TokenKind::Dash => Some(Operator::Negative),
            TokenKind::Not => Some(Operator::Not),
            TokenKind::Tilde => Some(Operator::BitNot),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A categorized, positioned lexical unit.
///
/// `value` holds the decoded payload where one exists: the identifier text,
/// the raw spelling of a numeric literal, or the escape-decoded contents of
/// a string/character/buffer literal. `line` and `column` are 1-based.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{ kind: {}, value: {} }}", self.kind, self.value)
    }
}
