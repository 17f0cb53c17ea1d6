//! # Introduction
//!
//! ksm is the front end of a small scripting language: a byte-level lexer and
//! a Pratt parser that turn source text into an abstract syntax tree, plus a
//! line-oriented REPL that prints what it parsed.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → REPL renderer
//! ```
//!
//! 1. [`parser`] — tokenises the source on demand and builds an AST,
//!    collecting [`parser::ParseError`]s instead of stopping at the first one.
//! 2. [`repl`] — reads a line at a time, parses it with a fresh parser and
//!    renders each statement; stops at the first line with errors.
//!
//! ## Example
//!
//! ```
//! use ksm::parser::{ast::Statement, Parser};
//!
//! let mut parser = Parser::from_source("var five = 5;");
//! let program = parser.parse_program();
//!
//! assert!(parser.errors().is_empty());
//! assert!(matches!(&program.statements[..], [Statement::Var(v)] if v.name.value == "five"));
//! ```
//!
//! Evaluation is out of scope: number literals stay as source text.

pub mod parser;
pub mod repl;
