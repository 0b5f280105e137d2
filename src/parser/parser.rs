//! Parser state and entry point.
//!
//! The parser is a cursor over a token sequence plus the lookup tables that
//! drive Pratt expression parsing:
//!
//! - NUD (null denotation) handlers for prefix/primary forms
//! - LED (left denotation) handlers for infix and postfix forms
//! - binding powers with associativity for operator precedence
//!
//! Statements dispatch by keyword instead; see the `stmt` module.

use std::collections::HashMap;

use crate::{
    ast::ast::Module,
    errors::errors::{Error, ParseError, ParseErrorKind},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    MK_TOKEN,
};

use super::{
    lookups::{create_token_lookups, Assoc, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup},
    stmt::parse_module,
};

/// The main parser structure.
///
/// Each instance exclusively owns its cursor position and token sequence,
/// so independent instances may parse separate modules concurrently with no
/// coordination. Parsing is fail-fast: the first grammar violation aborts
/// and no partial tree is returned.
pub struct Parser {
    /// The token sequence being parsed
    tokens: Vec<Token>,
    /// Source text not yet tokenized (raw-text construction path)
    source: Option<String>,
    /// Current position in the token stream
    pos: usize,
    /// `>>` tokens split in two while closing nested generic argument
    /// lists, kept so backtracking can restore them
    splits: Vec<(usize, Token)>,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for binding power and associativity per operator token
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over an already-produced token sequence.
    ///
    /// This is the path used by the self-hosting pipeline and by tests. The
    /// sequence is normalized to always end with an `Eof` token so cursor
    /// reads past the end stay well-defined.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::Eof) {
            let (line, column) = match tokens.last() {
                Some(token) => (token.line, token.column),
                None => (1, 1),
            };
            tokens.push(MK_TOKEN!(TokenKind::Eof, String::from("EOF"), line, column));
        }

        Parser {
            tokens,
            source: None,
            pos: 0,
            splits: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Creates a parser over raw source text. Tokenization happens inside
    /// [`Parser::parse`], so lexer failures surface there as [`Error::Lex`].
    pub fn from_source(source: &str) -> Self {
        Parser {
            tokens: vec![],
            source: Some(String::from(source)),
            pos: 0,
            splits: vec![],
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        }
    }

    /// Parses one whole module.
    ///
    /// The first detected error aborts the parse; no partial tree is
    /// returned and no recovery is attempted.
    pub fn parse(&mut self) -> Result<Module, Error> {
        if let Some(source) = self.source.take() {
            self.tokens = tokenize(&source)?;
            self.pos = 0;
        }

        create_token_lookups(self);

        Ok(parse_module(self)?)
    }

    /// Returns the current token without advancing. Reads past the end
    /// keep returning the trailing `Eof` token.
    pub fn current_token(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the token just passed.
    pub fn advance(&mut self) -> &Token {
        let at = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[at]
    }

    /// Expects a token of the given kind, with an optional custom error.
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<ParseError>,
    ) -> Result<Token, ParseError> {
        let token = self.current_token().clone();
        if token.kind != expected_kind {
            match error {
                Some(error) => Err(error),
                None if token.kind == TokenKind::Eof => Err(ParseError::new(
                    ParseErrorKind::UnexpectedEndOfFile,
                    token,
                )),
                None => Err(ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        token: token.value.clone(),
                    },
                    token,
                )),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    /// Expects a token of the given kind with the default error.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, ParseError> {
        self.expect_error(expected_kind, None)
    }

    /// A ParseError flagging the current token as unexpected, with a hint
    /// on what the grammar wanted instead.
    pub fn unexpected(&self, message: &str) -> ParseError {
        let token = self.current_token().clone();
        if token.kind == TokenKind::Eof {
            ParseError::new(ParseErrorKind::UnexpectedEndOfFile, token)
        } else {
            ParseError::new(
                ParseErrorKind::UnexpectedTokenDetailed {
                    token: token.value.clone(),
                    message: String::from(message),
                },
                token,
            )
        }
    }

    /// Checks whether tokens remain before the end of the stream.
    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len() && self.current_token_kind() != TokenKind::Eof
    }

    /// Current cursor position (a token offset, usable as a node index).
    pub fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn set_position(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Runs a speculative sub-parse. On failure the cursor is restored to
    /// the exact pre-attempt position, any `>>` tokens split during the
    /// attempt are restored, and no diagnostics or nodes survive - the
    /// rolled-back path has no observable side effects.
    pub fn try_parse<T>(
        &mut self,
        attempt: impl FnOnce(&mut Parser) -> Result<T, ParseError>,
    ) -> Option<T> {
        let saved_pos = self.pos;
        let saved_splits = self.splits.len();

        match attempt(self) {
            Ok(value) => Some(value),
            Err(_) => {
                while self.splits.len() > saved_splits {
                    if let Some((pos, token)) = self.splits.pop() {
                        self.tokens[pos] = token;
                    }
                }
                self.pos = saved_pos;
                None
            }
        }
    }

    /// Consumes one `>` out of a `>>` token, leaving a `>` for the outer
    /// generic argument list. The original token is logged so
    /// [`Parser::try_parse`] can restore it on rollback.
    pub fn split_shift_right(&mut self) {
        let token = self.current_token().clone();
        self.splits.push((self.pos, token.clone()));
        self.tokens[self.pos] = MK_TOKEN!(
            TokenKind::Greater,
            String::from(">"),
            token.line,
            token.column + 1
        );
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix/postfix) handler for a token.
    pub fn led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        assoc: Assoc,
        led_fn: LEDHandler,
    ) {
        self.binding_power_lookup.insert(kind, (binding_power, assoc));
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix/primary) handler for a token.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert((BindingPower::Primary, Assoc::Left));
        self.nud_lookup.insert(kind, nud_fn);
    }
}
