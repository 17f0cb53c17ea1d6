//! Statement parsing implementation
//!
//! This module handles parsing of all ksm statement types:
//!
//! - Variable declarations: `var x = 42;`
//! - Return: `return x;`, bare `return;`
//! - Re-binding: `x = x + 1;`
//! - Expression statements: `add(1, 2);`
//! - Blocks: `{ ... }` bodies of `if` and function literals
//!
//! # Grammar
//!
//! ```text
//! statement ::= var_stmt | return_stmt | assign_stmt | expr_stmt
//! var_stmt    ::= "var" IDENTIFIER "=" expression [";"]
//! return_stmt ::= "return" [expression] [";"]
//! assign_stmt ::= IDENTIFIER "=" expression [";"]
//! expr_stmt   ::= expression [";"]
//! block       ::= "{" statement* "}"
//! ```
//!
//! Every method is entered with `current` on the statement's first token and
//! leaves `current` on its last token (the `;` when present).

use crate::parser::ast::*;
use crate::parser::parse::{ParseError, Parser, Precedence};
use crate::parser::token::TokenKind;

impl Parser<'_> {
    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Statement> {
        match self.current.kind {
            TokenKind::Var => self.parse_var_statement(),
            TokenKind::Return => self.parse_return_statement(),
            TokenKind::Identifier if self.peek_is(TokenKind::Assign) => {
                self.parse_assignment_statement()
            }
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_var_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        self.expect_peek(TokenKind::Identifier)?;
        let name = Identifier {
            token: self.current.clone(),
            value: self.current.literal.clone(),
        };

        self.expect_peek(TokenKind::Assign)?;
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Var(VarStatement { token, name, value }))
    }

    fn parse_return_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();

        let value = if self.peek_is(TokenKind::Semicolon)
            || self.peek_is(TokenKind::RBrace)
            || self.peek_is(TokenKind::Eof)
        {
            None
        } else {
            self.next_token();
            Some(self.parse_expression(Precedence::Lowest)?)
        };
        self.skip_optional_semicolon();

        Some(Statement::Return(ReturnStatement { token, value }))
    }

    fn parse_assignment_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let name = token.literal.clone();

        // Skip the name and the `=`
        self.next_token();
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Assignment(AssignmentStatement { token, name, value }))
    }

    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let token = self.current.clone();
        let expression = self.parse_expression(Precedence::Lowest)?;
        self.skip_optional_semicolon();

        Some(Statement::Expression(ExpressionStatement { token, expression }))
    }

    /// Parse `{ ... }`, entered with `current` on the `{`.
    pub(crate) fn parse_block_statement(&mut self) -> Option<BlockStatement> {
        let token = self.current.clone();
        let mut statements = Vec::new();

        self.next_token();
        while !self.current_is(TokenKind::RBrace) {
            if self.current_is(TokenKind::Eof) {
                self.errors.push(ParseError::UnexpectedEof { context: "block" });
                return None;
            }

            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None => {
                    self.synchronize();
                    // The failed statement ran onto this block's closing brace
                    if self.current_is(TokenKind::RBrace) {
                        continue;
                    }
                }
            }
            self.next_token();
        }

        Some(BlockStatement { token, statements })
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::{ParseError, Parser};
    use crate::parser::token::TokenKind;

    fn parse_ok(source: &str) -> Program {
        let mut parser = Parser::from_source(source);
        let program = parser.parse_program();
        assert!(
            parser.errors().is_empty(),
            "unexpected errors for {:?}: {:?}",
            source,
            parser.error_messages()
        );
        program
    }

    #[test]
    fn test_var_statements() {
        let program = parse_ok("var x = 5;\nvar y = true;\nvar foobar = y;");
        let expected = [("x", "5"), ("y", "true"), ("foobar", "y")];

        assert_eq!(program.statements.len(), expected.len());
        for (statement, (name, value)) in program.statements.iter().zip(expected) {
            match statement {
                Statement::Var(stmt) => {
                    assert_eq!(stmt.name.value, name);
                    assert_eq!(stmt.name.token_literal(), name);
                    assert_eq!(stmt.value.token_literal(), value);
                }
                other => panic!("Expected var statement, got {}", other.kind()),
            }
        }
    }

    #[test]
    fn test_semicolon_is_optional() {
        let program = parse_ok("var a = 1 var b = 2");
        assert_eq!(program.statements.len(), 2);
    }

    #[test]
    fn test_return_statements() {
        let program = parse_ok("return 5; return x; return;");
        assert_eq!(program.statements.len(), 3);

        let values: Vec<Option<&str>> = program
            .statements
            .iter()
            .map(|statement| match statement {
                Statement::Return(stmt) => stmt.value.as_ref().map(Expression::token_literal),
                other => panic!("Expected return statement, got {}", other.kind()),
            })
            .collect();
        assert_eq!(values, vec![Some("5"), Some("x"), None]);
    }

    #[test]
    fn test_bare_return_at_end_of_input() {
        let program = parse_ok("return");
        match &program.statements[..] {
            [Statement::Return(stmt)] => assert!(stmt.value.is_none()),
            _ => panic!("Expected a single bare return"),
        }
    }

    #[test]
    fn test_assignment_statement() {
        let program = parse_ok("x = y + 1;");
        match &program.statements[..] {
            [Statement::Assignment(stmt)] => {
                assert_eq!(stmt.name, "x");
                assert_eq!(stmt.token.kind, TokenKind::Identifier);
                assert!(matches!(stmt.value, Expression::Binary(ref b) if b.operator == "+"));
            }
            _ => panic!("Expected a single assignment statement"),
        }
    }

    #[test]
    fn test_comparison_is_not_assignment() {
        let program = parse_ok("x == 1;");
        assert!(matches!(
            &program.statements[..],
            [Statement::Expression(ExpressionStatement {
                expression: Expression::Binary(_),
                ..
            })]
        ));
    }

    #[test]
    fn test_expression_statement_keeps_first_token() {
        let program = parse_ok("foobar;");
        match &program.statements[..] {
            [Statement::Expression(stmt)] => {
                assert_eq!(stmt.token.literal, "foobar");
                assert!(matches!(stmt.expression, Expression::Identifier(ref i) if i.value == "foobar"));
            }
            _ => panic!("Expected a single expression statement"),
        }
    }

    #[test]
    fn test_var_without_assign() {
        let mut parser = Parser::from_source("var x 5;");
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert_eq!(
            parser.error_messages(),
            vec!["expected next token to be ASSIGN, got NUMBER '5' instead".to_string()]
        );
    }

    #[test]
    fn test_error_inside_block_keeps_closing_brace() {
        let mut parser = Parser::from_source("func() { var = 1; x } ; var ok = 2;");
        let program = parser.parse_program();

        assert_eq!(parser.errors().len(), 1, "{:?}", parser.error_messages());
        assert_eq!(program.statements.len(), 2);
        match &program.statements[0] {
            Statement::Expression(ExpressionStatement {
                expression: Expression::Function(func),
                ..
            }) => assert_eq!(func.body.statements.len(), 1),
            other => panic!("Expected function literal, got {}", other.kind()),
        }
    }

    #[test]
    fn test_failure_on_closing_brace_keeps_block() {
        let mut parser = Parser::from_source("var f = func() { x + }; var g = 1; var h = 2;");
        let program = parser.parse_program();

        assert_eq!(
            parser.error_messages(),
            vec!["no prefix parse rule for RBRACE '}'".to_string()]
        );
        let names: Vec<&str> = program
            .statements
            .iter()
            .map(|statement| match statement {
                Statement::Var(stmt) => stmt.name.value.as_str(),
                other => panic!("Expected var statement, got {}", other.kind()),
            })
            .collect();
        assert_eq!(names, vec!["f", "g", "h"]);
    }

    #[test]
    fn test_failure_on_if_brace_keeps_following_statement() {
        let mut parser = Parser::from_source("if (a) { y; x + } var z = 1;");
        let program = parser.parse_program();

        assert_eq!(parser.errors().len(), 1, "{:?}", parser.error_messages());
        match &program.statements[..] {
            [Statement::Expression(ExpressionStatement {
                expression: Expression::If(expr),
                ..
            }), Statement::Var(var)] => {
                assert_eq!(expr.consequence.statements.len(), 1);
                assert_eq!(var.name.value, "z");
            }
            _ => panic!("Expected the if expression and `var z`"),
        }
    }

    #[test]
    fn test_unterminated_block() {
        let mut parser = Parser::from_source("if (x) { var y = 1;");
        let program = parser.parse_program();

        assert!(program.statements.is_empty());
        assert_eq!(
            parser.errors(),
            &[ParseError::UnexpectedEof { context: "block" }]
        );
    }
}
