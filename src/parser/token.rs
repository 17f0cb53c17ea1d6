//! Token vocabulary shared by the lexer, the parser and the AST.

use std::fmt;

/// Every lexical category the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    // Identifiers and literals
    Identifier,
    Number,

    // Operators
    Assign,   // =
    Plus,     // +
    Minus,    // -
    Bang,     // !
    Asterisk, // *
    FSlash,   // /
    Lt,       // <
    Gt,       // >
    Eq,       // ==
    NotEq,    // !=

    // Delimiters
    Comma,     // ,
    Semicolon, // ;
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }

    // Keywords
    Function,
    Var,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// Upper-case name used in diagnostics, e.g. `NOT_EQ`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Bang => "BANG",
            TokenKind::Asterisk => "ASTERISK",
            TokenKind::FSlash => "FSLASH",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Eq => "EQ",
            TokenKind::NotEq => "NOT_EQ",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Function => "FUNCTION",
            TokenKind::Var => "VAR",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token: its category and the exact source text it covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The zero-length end-of-input token.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, "")
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            kind => write!(f, "{} '{}'", kind, self.literal),
        }
    }
}

/// Map an identifier-shaped word to its keyword kind, or `Identifier`.
pub fn lookup_ident(ident: &str) -> TokenKind {
    match ident {
        "func" => TokenKind::Function,
        "var" => TokenKind::Var,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "return" => TokenKind::Return,
        _ => TokenKind::Identifier,
    }
}
