//! Lexer (tokenizer) for ksm source code
//!
//! Scans the source one byte at a time and hands out a [`Token`] per call to
//! [`Lexer::next_token`]. Nothing is buffered: the parser pulls tokens as it
//! needs them. The lexer never fails; characters it does not recognise come
//! back as [`TokenKind::Illegal`] tokens and the parser decides what to do.

use super::token::{lookup_ident, Token, TokenKind};

/// Value of [`Lexer::ch`] once the cursor has run off the end of the input.
pub const EOF_CHAR: u8 = 0;

/// Cursor over a borrowed source string.
///
/// `read_position` is always `position + 1` while there is input left; at the
/// end both sit at `input.len()` and `ch` is [`EOF_CHAR`].
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    read_position: usize,
    ch: u8,
}

impl<'a> Lexer<'a> {
    /// Create a lexer primed on the first character of `input`.
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input,
            position: 0,
            read_position: 0,
            ch: EOF_CHAR,
        };
        lexer.read_char();
        lexer
    }

    /// Scan and return the next token.
    ///
    /// Once the input is exhausted every call returns an `EOF` token with an
    /// empty literal and leaves the cursor where it is.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_at_end() {
            return Token::eof();
        }

        let token = match self.ch {
            b'=' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::Eq, "==")
                } else {
                    Token::new(TokenKind::Assign, "=")
                }
            }
            b'!' => {
                if self.peek_char() == b'=' {
                    self.read_char();
                    Token::new(TokenKind::NotEq, "!=")
                } else {
                    Token::new(TokenKind::Bang, "!")
                }
            }
            b'+' => self.single(TokenKind::Plus),
            b'-' => self.single(TokenKind::Minus),
            b'*' => self.single(TokenKind::Asterisk),
            b'/' => self.single(TokenKind::FSlash),
            b'<' => self.single(TokenKind::Lt),
            b'>' => self.single(TokenKind::Gt),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),
            b';' => self.single(TokenKind::Semicolon),

            // Runs leave the cursor on the first byte past the run
            ch if is_letter(ch) => {
                let ident = self.read_identifier();
                return Token::new(lookup_ident(ident), ident);
            }
            ch if is_digit(ch) => {
                let number = self.read_number();
                return Token::new(TokenKind::Number, number);
            }

            _ => return self.read_illegal(),
        };

        self.read_char();
        token
    }

    /// Byte offset of the character under the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Byte offset of the next character to be read.
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// The character under the cursor, or [`EOF_CHAR`] at the end.
    pub fn ch(&self) -> u8 {
        self.ch
    }

    /// Move the cursor one byte forward.
    fn read_char(&mut self) {
        let bytes = self.input.as_bytes();
        if self.read_position >= bytes.len() {
            self.ch = EOF_CHAR;
            self.position = bytes.len();
            self.read_position = bytes.len();
        } else {
            self.ch = bytes[self.read_position];
            self.position = self.read_position;
            self.read_position += 1;
        }
    }

    /// Look at the next byte without consuming it.
    fn peek_char(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    // A NUL byte inside the text is not the sentinel; only the position decides.
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn single(&self, kind: TokenKind) -> Token {
        Token::new(kind, (self.ch as char).to_string())
    }

    fn read_identifier(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while is_letter(self.ch) || is_digit(self.ch) {
            self.read_char();
        }
        &input[start..self.position]
    }

    fn read_number(&mut self) -> &'a str {
        let input = self.input;
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        &input[start..self.position]
    }

    /// Consume one whole character (possibly multi-byte) as an ILLEGAL token.
    fn read_illegal(&mut self) -> Token {
        let Some(ch) = self.input[self.position..].chars().next() else {
            return Token::eof();
        };
        for _ in 0..ch.len_utf8() {
            self.read_char();
        }
        Token::new(TokenKind::Illegal, ch.to_string())
    }
}

/// Yields every token up to, but not including, `EOF`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is(TokenKind::Eof)).then_some(token)
    }
}

/// `A`-`Z`, `a`-`z` and `_`.
pub fn is_letter(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

/// `0`-`9`.
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
