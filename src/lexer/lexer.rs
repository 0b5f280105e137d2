use regex::Regex;

use crate::{
    errors::errors::{LexError, LexErrorKind},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex) -> Result<(), LexError>;

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    pub line: u32,
    pub column: u32,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("b\"(\\\\.|[^\"\\\\\\n])*\"").unwrap(), handler: buffer_handler },
                RegexPattern { regex: Regex::new("[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
                RegexPattern { regex: Regex::new("0[xX][0-9a-fA-F]+u?|0[oO][0-7]+u?|0[bB][01]+u?|[0-9]+\\.[0-9]+([eE][+-]?[0-9]+)?[if]?|[0-9]+([eE][+-]?[0-9]+)?[uif]?").unwrap(), handler: number_handler },
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("//.*").unwrap(), handler: skip_handler },
                RegexPattern { regex: Regex::new("\"(\\\\.|[^\"\\\\\\n])*\"").unwrap(), handler: string_handler },
                RegexPattern { regex: Regex::new("'(\\\\.|[^'\\\\\\n])'").unwrap(), handler: character_handler },
                RegexPattern { regex: Regex::new("\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
                RegexPattern { regex: Regex::new("\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
                RegexPattern { regex: Regex::new("\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly, "{") },
                RegexPattern { regex: Regex::new("\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly, "}") },
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
                RegexPattern { regex: Regex::new("!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
                RegexPattern { regex: Regex::new("!").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Not, "!") },
                RegexPattern { regex: Regex::new("<<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftLeft, "<<") },
                RegexPattern { regex: Regex::new(">>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::ShiftRight, ">>") },
                RegexPattern { regex: Regex::new("<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
                RegexPattern { regex: Regex::new("<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
                RegexPattern { regex: Regex::new(">=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
                RegexPattern { regex: Regex::new(">").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
                RegexPattern { regex: Regex::new("\\|\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Or, "||") },
                RegexPattern { regex: Regex::new("&&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&") },
                RegexPattern { regex: Regex::new("\\|").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Pipe, "|") },
                RegexPattern { regex: Regex::new("&").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Ampersand, "&") },
                RegexPattern { regex: Regex::new("~").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Tilde, "~") },
                RegexPattern { regex: Regex::new("\\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
                RegexPattern { regex: Regex::new(";").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
                RegexPattern { regex: Regex::new(":").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
                RegexPattern { regex: Regex::new("\\?").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Question, "?") },
                RegexPattern { regex: Regex::new(",").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
                RegexPattern { regex: Regex::new("->").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "->") },
                RegexPattern { regex: Regex::new("\\+=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PlusEquals, "+=") },
                RegexPattern { regex: Regex::new("-=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MinusEquals, "-=") },
                RegexPattern { regex: Regex::new("\\*=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarEquals, "*=") },
                RegexPattern { regex: Regex::new("/=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::SlashEquals, "/=") },
                RegexPattern { regex: Regex::new("%=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::PercentEquals, "%=") },
                RegexPattern { regex: Regex::new("\\^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CaretEquals, "^=") },
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%") },
                RegexPattern { regex: Regex::new("\\^").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Caret, "^") },
            ],
            source: String::from(source),
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Advances past `text`, keeping the line/column counters in step.
    pub fn advance_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.pos += text.len();
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    // The raw spelling is kept; the parser decodes prefixes and suffixes.
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched.clone(),
        lexer.line,
        lexer.column
    ));
    lexer.advance_text(&matched);
    Ok(())
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_text(&matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let kind = match RESERVED_LOOKUP.get(matched.as_str()) {
        Some(kind) => *kind,
        None => TokenKind::Identifier,
    };

    lexer.push(MK_TOKEN!(kind, matched.clone(), lexer.line, lexer.column));
    lexer.advance_text(&matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let decoded = decode_escapes(&matched[1..matched.len() - 1])
        .map_err(|kind| LexError::new(kind, lexer.line, lexer.column))?;

    lexer.push(MK_TOKEN!(
        TokenKind::Str,
        decoded,
        lexer.line,
        lexer.column
    ));
    lexer.advance_text(&matched);
    Ok(())
}

fn buffer_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let decoded = decode_escapes(&matched[2..matched.len() - 1])
        .map_err(|kind| LexError::new(kind, lexer.line, lexer.column))?;

    lexer.push(MK_TOKEN!(
        TokenKind::Buffer,
        decoded,
        lexer.line,
        lexer.column
    ));
    lexer.advance_text(&matched);
    Ok(())
}

fn character_handler(lexer: &mut Lexer, regex: Regex) -> Result<(), LexError> {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    let decoded = decode_escapes(&matched[1..matched.len() - 1])
        .map_err(|kind| LexError::new(kind, lexer.line, lexer.column))?;

    lexer.push(MK_TOKEN!(
        TokenKind::Character,
        decoded,
        lexer.line,
        lexer.column
    ));
    lexer.advance_text(&matched);
    Ok(())
}

/// Decodes backslash escapes in a string/character/buffer literal body.
fn decode_escapes(raw: &str) -> Result<String, LexErrorKind> {
    let mut result = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            result.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('\\') => result.push('\\'),
            Some('"') => result.push('"'),
            Some('\'') => result.push('\''),
            Some('0') => result.push('\0'),
            Some('x') => {
                let mut hex = String::new();
                for _ in 0..2 {
                    match chars.peek() {
                        Some(c) if c.is_ascii_hexdigit() => {
                            hex.push(*c);
                            chars.next();
                        }
                        _ => break,
                    }
                }

                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) => result.push(byte as char),
                    Err(_) => return Err(LexErrorKind::InvalidEscape { escape: hex }),
                }
            }
            Some(other) => {
                return Err(LexErrorKind::InvalidEscape {
                    escape: other.to_string(),
                })
            }
            None => {
                return Err(LexErrorKind::InvalidEscape {
                    escape: String::new(),
                })
            }
        }
    }

    Ok(result)
}

/// Tokenizes an entire source text.
///
/// The returned sequence always ends with an `Eof` token carrying the final
/// source position, so the parser can report premature-end errors there.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lex = Lexer::new(source);

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.patterns.clone().iter() {
            let match_here = pattern.regex.find(lex.remainder());

            if let Some(found) = match_here {
                if found.start() == 0 {
                    (pattern.handler)(&mut lex, pattern.regex.clone())?;
                    matched = true;
                    break;
                }
            }
        }

        if !matched {
            let kind = match lex.at() {
                '"' => LexErrorKind::UnterminatedString,
                '\'' => LexErrorKind::UnterminatedCharacter,
                other => LexErrorKind::UnrecognizedCharacter { character: other },
            };
            return Err(LexError::new(kind, lex.line, lex.column));
        }
    }

    lex.push(MK_TOKEN!(
        TokenKind::Eof,
        String::from("EOF"),
        lex.line,
        lex.column
    ));
    Ok(lex.tokens)
}
