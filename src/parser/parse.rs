//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, lookahead helpers, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a Pratt (operator-precedence) parser with the following organization:
//! - This module: Parser struct, token window, error recording and recovery
//! - `statements`: Parsing `var`, `return`, assignment and expression statements
//! - `expressions`: Prefix/infix rule tables and expression parsing
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.
//!
//! # Error recovery
//!
//! Parsing never stops at the first problem. Each failure is recorded as a
//! [`ParseError`], the offending statement is dropped, and tokens are skipped
//! up to the next statement boundary before parsing resumes.

use crate::parser::ast::*;
use crate::parser::lexer::Lexer;
use crate::parser::token::{Token, TokenKind};
use rustc_hash::FxHashMap;
use std::fmt;

/// Parser error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token kind was required next
    UnexpectedToken { expected: TokenKind, found: Token },

    /// The current token cannot start an expression
    NoPrefixRule { found: Token },

    /// Input ended inside an unfinished construct
    UnexpectedEof { context: &'static str },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead",
                expected, found
            ),
            ParseError::NoPrefixRule { found } => {
                write!(f, "no prefix parse rule for {}", found)
            }
            ParseError::UnexpectedEof { context } => {
                write!(f, "unexpected end of input in {}", context)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Binding power of operators, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // !x -x
    Call,        // f(x)
}

impl Precedence {
    /// Infix binding power of a token kind; `Lowest` for non-operators.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Eq | TokenKind::NotEq => Precedence::Equals,
            TokenKind::Lt | TokenKind::Gt => Precedence::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Precedence::Sum,
            TokenKind::Asterisk | TokenKind::FSlash => Precedence::Product,
            TokenKind::LParen => Precedence::Call,
            _ => Precedence::Lowest,
        }
    }
}

pub(crate) type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;
pub(crate) type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

/// Pratt parser over a [`Lexer`]
pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) current: Token,
    pub(crate) peek: Token,
    pub(crate) errors: Vec<ParseError>,
    pub(crate) prefix_parse_fns: FxHashMap<TokenKind, PrefixParseFn<'a>>,
    pub(crate) infix_parse_fns: FxHashMap<TokenKind, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        let mut parser = Self {
            lexer,
            current: Token::eof(),
            peek: Token::eof(),
            errors: Vec::new(),
            prefix_parse_fns: FxHashMap::default(),
            infix_parse_fns: FxHashMap::default(),
        };
        parser.register_rules();

        // Fill both `current` and `peek`
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Shorthand for `Parser::new(Lexer::new(source))`
    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }

    /// Parse statements until end of input.
    ///
    /// Always returns a [`Program`]; statements that failed to parse are left
    /// out and described in [`Parser::errors`].
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();

        while !self.current_is(TokenKind::Eof) {
            match self.parse_statement() {
                Some(statement) => program.statements.push(statement),
                None => self.synchronize(),
            }
            self.next_token();
        }

        program
    }

    /// Errors recorded so far, in source order
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    // ===== Helper methods =====

    pub(crate) fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = std::mem::replace(&mut self.peek, next);
    }

    pub(crate) fn current_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    pub(crate) fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    pub(crate) fn current_precedence(&self) -> Precedence {
        Precedence::of(self.current.kind)
    }

    pub(crate) fn peek_precedence(&self) -> Precedence {
        Precedence::of(self.peek.kind)
    }

    /// Advance if the next token is `kind`, otherwise record the mismatch.
    pub(crate) fn expect_peek(&mut self, kind: TokenKind) -> Option<()> {
        if self.peek_is(kind) {
            self.next_token();
            Some(())
        } else {
            self.errors.push(ParseError::UnexpectedToken {
                expected: kind,
                found: self.peek.clone(),
            });
            None
        }
    }

    /// Like [`Parser::expect_peek`], but reports running out of input as an
    /// unterminated `context`.
    pub(crate) fn expect_peek_within(
        &mut self,
        kind: TokenKind,
        context: &'static str,
    ) -> Option<()> {
        if self.peek_is(TokenKind::Eof) {
            self.errors.push(ParseError::UnexpectedEof { context });
            return None;
        }
        self.expect_peek(kind)
    }

    pub(crate) fn skip_optional_semicolon(&mut self) {
        if self.peek_is(TokenKind::Semicolon) {
            self.next_token();
        }
    }

    /// Discard tokens up to the next statement boundary.
    ///
    /// Stops on a `;`, on a `}` already under the cursor, or just before a
    /// `}` so an enclosing block still sees its closing brace. Blocks opened
    /// while skipping are skipped whole.
    pub(crate) fn synchronize(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Eof => return,
                TokenKind::LBrace => depth += 1,
                TokenKind::RBrace if depth > 0 => depth -= 1,
                TokenKind::RBrace | TokenKind::Semicolon if depth == 0 => return,
                _ => {}
            }

            if depth == 0 && (self.peek_is(TokenKind::RBrace) || self.peek_is(TokenKind::Eof)) {
                return;
            }
            self.next_token();
        }
    }
}
