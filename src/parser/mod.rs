//! ksm source code parser
//!
//! This module transforms ksm source text into an Abstract Syntax Tree (AST):
//! - [`token`]: Token vocabulary (kinds and literal text)
//! - [`lexer`]: Tokenization (source text → tokens, one at a time)
//! - [`parse`]: The [`Parser`] struct, errors and recovery
//! - [`ast`]: AST node definitions
//!
//! # Language
//!
//! - Statements: `var` declarations, `return`, re-binding (`x = ...`),
//!   expression statements; semicolons are optional
//! - Expressions: identifiers, numbers, booleans, unary `!`/`-`, binary
//!   `== != < > + - * /`, grouping, `if`/`else`, `func` literals, calls
//!
//! # Parser Implementation
//!
//! Hand-written Pratt parser with one token of lookahead. Errors are collected
//! rather than returned, so a single pass reports every malformed statement.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parse;
pub mod token;

mod expressions;
mod statements;

pub use lexer::Lexer;
pub use parse::{ParseError, Parser, Precedence};
pub use token::{Token, TokenKind};
