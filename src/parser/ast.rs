// AST (Abstract Syntax Tree) definitions for ksm

use super::token::Token;

/// Top-level program structure
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new() -> Self {
        Program::default()
    }

    /// Literal of the first statement's token, or `""` for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(Statement::token_literal)
            .unwrap_or("")
    }
}

/// Statements: constructs that produce no value
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Var(VarStatement),
    Return(ReturnStatement),
    Assignment(AssignmentStatement),
    Expression(ExpressionStatement),
}

impl Statement {
    /// The token that introduced this statement
    pub fn token(&self) -> &Token {
        match self {
            Statement::Var(s) => &s.token,
            Statement::Return(s) => &s.token,
            Statement::Assignment(s) => &s.token,
            Statement::Expression(s) => &s.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Var(_) => "VarStatement",
            Statement::Return(_) => "ReturnStatement",
            Statement::Assignment(_) => "AssignmentStatement",
            Statement::Expression(_) => "ExpressionStatement",
        }
    }
}

/// `var <name> = <value>;`
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    pub token: Token, // VAR
    pub name: Identifier,
    pub value: Expression,
}

/// `return [<value>];`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token, // RETURN
    pub value: Option<Expression>, // None for a bare `return`
}

/// `<name> = <value>;` re-binding an existing name
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentStatement {
    pub token: Token, // IDENTIFIER
    pub name: String,
    pub value: Expression,
}

/// An expression used in statement position
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token, // first token of the expression
    pub expression: Expression,
}

/// `{ ... }` body of an `if` branch or a function literal
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token, // LBRACE
    pub statements: Vec<Statement>,
}

/// Expressions: constructs that yield a value
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Number(NumberLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Binary(BinaryExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    /// The token that introduced this expression
    pub fn token(&self) -> &Token {
        match self {
            Expression::Identifier(e) => &e.token,
            Expression::Number(e) => &e.token,
            Expression::Boolean(e) => &e.token,
            Expression::Prefix(e) => &e.token,
            Expression::Binary(e) => &e.token,
            Expression::If(e) => &e.token,
            Expression::Function(e) => &e.token,
            Expression::Call(e) => &e.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(ident) => ident.token_literal(),
            other => &other.token().literal,
        }
    }

    /// Variant name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Expression::Identifier(_) => "Identifier",
            Expression::Number(_) => "NumberLiteral",
            Expression::Boolean(_) => "BooleanLiteral",
            Expression::Prefix(_) => "PrefixExpression",
            Expression::Binary(_) => "BinaryExpression",
            Expression::If(_) => "IfExpression",
            Expression::Function(_) => "FunctionLiteral",
            Expression::Call(_) => "CallExpression",
        }
    }
}

/// A name reference
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token, // IDENTIFIER
    pub value: String,
}

impl Identifier {
    pub fn token_literal(&self) -> &str {
        if self.token.literal.is_empty() {
            "nil"
        } else {
            &self.token.literal
        }
    }
}

/// Decimal digits kept as source text; nothing here converts them to a number.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub token: Token, // NUMBER
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token, // TRUE or FALSE
    pub value: bool,
}

/// `!x`, `-x`
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpression {
    pub token: Token, // BANG or MINUS
    pub operator: String,
    pub right: Box<Expression>,
}

/// `left <operator> right`
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub token: Token, // operator token
    pub left: Box<Expression>,
    pub operator: String,
    pub right: Box<Expression>,
}

/// `if (<condition>) { ... } [else { ... }]`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub token: Token, // IF
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

/// `func(<parameters>) { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    pub token: Token, // FUNCTION
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

/// `<function>(<arguments>)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub token: Token, // LPAREN
    pub function: Box<Expression>,
    pub arguments: Vec<Expression>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::token::TokenKind;

    fn ident(name: &str) -> Identifier {
        Identifier {
            token: Token::new(TokenKind::Identifier, name),
            value: name.to_string(),
        }
    }

    #[test]
    fn test_empty_program_literal() {
        assert_eq!(Program::new().token_literal(), "");
    }

    #[test]
    fn test_program_literal_is_first_statement() {
        let program = Program {
            statements: vec![
                Statement::Var(VarStatement {
                    token: Token::new(TokenKind::Var, "var"),
                    name: ident("x"),
                    value: Expression::Identifier(ident("y")),
                }),
                Statement::Return(ReturnStatement {
                    token: Token::new(TokenKind::Return, "return"),
                    value: None,
                }),
            ],
        };

        assert_eq!(program.token_literal(), "var");
        assert_eq!(program.statements[0].kind(), "VarStatement");
        assert_eq!(program.statements[1].kind(), "ReturnStatement");
    }

    #[test]
    fn test_identifier_without_text_reports_nil() {
        let empty = Identifier {
            token: Token::new(TokenKind::Identifier, ""),
            value: String::new(),
        };
        assert_eq!(empty.token_literal(), "nil");
        assert_eq!(Expression::Identifier(empty).token_literal(), "nil");
        assert_eq!(ident("five").token_literal(), "five");
    }

    #[test]
    fn test_binary_expression_reports_operator_token() {
        let expr = Expression::Binary(BinaryExpression {
            token: Token::new(TokenKind::Plus, "+"),
            left: Box::new(Expression::Identifier(ident("a"))),
            operator: "+".to_string(),
            right: Box::new(Expression::Identifier(ident("b"))),
        });
        assert_eq!(expr.token_literal(), "+");
        assert_eq!(expr.kind(), "BinaryExpression");
    }
}
