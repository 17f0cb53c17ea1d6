//! Expression parsing implementation
//!
//! This module handles parsing of ksm expressions with a Pratt parser: every
//! token kind that can start an expression has a prefix rule, and every
//! operator token has an infix rule plus a [`Precedence`].
//!
//! # Supported Expressions
//!
//! - Identifiers, number literals (kept as text), `true` / `false`
//! - Unary operators: `!`, `-`
//! - Binary operators: `==` `!=` `<` `>` `+` `-` `*` `/`
//! - Grouping: `( ... )`
//! - `if (cond) { ... } else { ... }`
//! - Function literals: `func(x, y) { ... }`
//! - Calls: `add(1, 2)`
//!
//! # Precedence
//!
//! [`Parser::parse_expression`] keeps folding infix operators into the left
//! operand while the upcoming operator binds tighter than the threshold it was
//! called with. The right operand is parsed with the operator's own
//! precedence as threshold, so operators of equal precedence associate left.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::*;
use crate::parser::parse::{InfixParseFn, ParseError, Parser, PrefixParseFn, Precedence};
use crate::parser::token::TokenKind;

impl<'a> Parser<'a> {
    /// Fill the prefix and infix rule tables
    pub(crate) fn register_rules(&mut self) {
        self.register_prefix(TokenKind::Identifier, Self::parse_identifier);
        self.register_prefix(TokenKind::Number, Self::parse_number_literal);
        self.register_prefix(TokenKind::True, Self::parse_boolean);
        self.register_prefix(TokenKind::False, Self::parse_boolean);
        self.register_prefix(TokenKind::Bang, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::Minus, Self::parse_prefix_expression);
        self.register_prefix(TokenKind::LParen, Self::parse_grouped_expression);
        self.register_prefix(TokenKind::If, Self::parse_if_expression);
        self.register_prefix(TokenKind::Function, Self::parse_function_literal);

        for kind in [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Asterisk,
            TokenKind::FSlash,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::NotEq,
        ] {
            self.register_infix(kind, Self::parse_binary_expression);
        }
        self.register_infix(TokenKind::LParen, Self::parse_call_expression);
    }

    fn register_prefix(&mut self, kind: TokenKind, rule: PrefixParseFn<'a>) {
        self.prefix_parse_fns.insert(kind, rule);
    }

    fn register_infix(&mut self, kind: TokenKind, rule: InfixParseFn<'a>) {
        self.infix_parse_fns.insert(kind, rule);
    }

    /// Parse an expression whose operators all bind tighter than `precedence`
    pub(crate) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expression> {
        let Some(prefix) = self.prefix_parse_fns.get(&self.current.kind).copied() else {
            self.no_prefix_rule_error();
            return None;
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_precedence() {
            let Some(infix) = self.infix_parse_fns.get(&self.peek.kind).copied() else {
                return Some(left);
            };
            self.next_token();
            left = infix(self, left)?;
        }

        Some(left)
    }

    fn no_prefix_rule_error(&mut self) {
        let error = if self.current_is(TokenKind::Eof) {
            ParseError::UnexpectedEof {
                context: "expression",
            }
        } else {
            ParseError::NoPrefixRule {
                found: self.current.clone(),
            }
        };
        self.errors.push(error);
    }

    fn parse_identifier(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }))
    }

    // Digits stay text; conversion belongs to whatever consumes the tree
    fn parse_number_literal(&mut self) -> Option<Expression> {
        Some(Expression::Number(NumberLiteral {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        }))
    }

    fn parse_boolean(&mut self) -> Option<Expression> {
        Some(Expression::Boolean(BooleanLiteral {
            token: self.current.clone(),
            value: self.current_is(TokenKind::True),
        }))
    }

    fn parse_prefix_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();

        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_binary_expression(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let operator = token.literal.clone();
        let precedence = self.current_precedence();

        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expression::Binary(BinaryExpression {
            token,
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<Expression> {
        if self.peek_is(TokenKind::Eof) {
            self.errors.push(ParseError::UnexpectedEof {
                context: "grouped expression",
            });
            return None;
        }
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek_within(TokenKind::RParen, "grouped expression")?;

        Some(expression)
    }

    fn parse_if_expression(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek_within(TokenKind::LParen, "if condition")?;
        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;
        self.expect_peek_within(TokenKind::RParen, "if condition")?;

        self.expect_peek_within(TokenKind::LBrace, "if expression")?;
        let consequence = self.parse_block_statement()?;

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next_token();
            self.expect_peek_within(TokenKind::LBrace, "else branch")?;
            Some(self.parse_block_statement()?)
        } else {
            None
        };

        Some(Expression::If(IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current.clone();

        self.expect_peek_within(TokenKind::LParen, "function parameter list")?;
        let parameters = self.parse_function_parameters()?;

        self.expect_peek_within(TokenKind::LBrace, "function literal")?;
        let body = self.parse_block_statement()?;

        Some(Expression::Function(FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    /// `(a, b, c)`, entered with `current` on the `(`
    fn parse_function_parameters(&mut self) -> Option<Vec<Identifier>> {
        const CONTEXT: &str = "function parameter list";
        let mut parameters = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(parameters);
        }

        loop {
            self.expect_peek_within(TokenKind::Identifier, CONTEXT)?;
            parameters.push(Identifier {
                token: self.current.clone(),
                value: self.current.literal.clone(),
            });

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        self.expect_peek_within(TokenKind::RParen, CONTEXT)?;
        Some(parameters)
    }

    fn parse_call_expression(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current.clone();
        let arguments = self.parse_call_arguments()?;

        Some(Expression::Call(CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    /// `(x, y + 1)`, entered with `current` on the `(`
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        const CONTEXT: &str = "call arguments";
        let mut arguments = Vec::new();

        if self.peek_is(TokenKind::RParen) {
            self.next_token();
            return Some(arguments);
        }

        loop {
            if self.peek_is(TokenKind::Eof) {
                self.errors.push(ParseError::UnexpectedEof { context: CONTEXT });
                return None;
            }
            self.next_token();
            arguments.push(self.parse_expression(Precedence::Lowest)?);

            if !self.peek_is(TokenKind::Comma) {
                break;
            }
            self.next_token();
        }

        self.expect_peek_within(TokenKind::RParen, CONTEXT)?;
        Some(arguments)
    }
}
