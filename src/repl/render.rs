//! Human-readable rendering of parsed statements
//!
//! Statements are printed as a label plus their identifying fields, e.g.
//! `VarStatement - Identifier/Name : five, value: 5`. Expressions are printed
//! fully parenthesized, so `5 < 10 > 5` renders as `((5 < 10) > 5)` and the
//! grouping chosen by the parser is visible.

use crossterm::style::{style, Color, Stylize};

use super::theme::{Theme, DEFAULT_THEME};
use crate::parser::ast::*;

/// Renders statements with optional terminal colors
pub struct Renderer {
    theme: &'static Theme,
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self {
            theme: &DEFAULT_THEME,
            color,
        }
    }

    /// Renderer that never emits escape sequences
    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn statement(&self, statement: &Statement) -> String {
        match statement {
            Statement::Var(stmt) => format!(
                "{} {}, {} {}",
                self.label("VarStatement - Identifier/Name :"),
                stmt.name.value,
                self.label("value:"),
                render_expression(&stmt.value)
            ),
            Statement::Return(stmt) => format!(
                "{} {}",
                self.label("ReturnStatement - Value:"),
                stmt.value
                    .as_ref()
                    .map(render_expression)
                    .unwrap_or_else(|| "<none>".to_string())
            ),
            Statement::Assignment(stmt) => format!(
                "{} {}, {} {}",
                self.label("AssignmentStatement - Name:"),
                stmt.name,
                self.label("value:"),
                render_expression(&stmt.value)
            ),
            Statement::Expression(stmt) => format!(
                "{} {}",
                self.label("ExpressionStatement:"),
                render_expression(&stmt.expression)
            ),
        }
    }

    pub fn prompt(&self, text: &str) -> String {
        self.paint(text, self.theme.prompt)
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, self.theme.error)
    }

    fn label(&self, text: &str) -> String {
        self.paint(text, self.theme.label)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Labelled, uncolored rendering of a statement
pub fn render_statement(statement: &Statement) -> String {
    Renderer::plain().statement(statement)
}

/// Fully parenthesized source form of an expression
pub fn render_expression(expression: &Expression) -> String {
    match expression {
        Expression::Identifier(ident) => ident.value.clone(),
        Expression::Number(number) => number.value.clone(),
        Expression::Boolean(boolean) => boolean.value.to_string(),
        Expression::Prefix(prefix) => {
            format!("({}{})", prefix.operator, render_expression(&prefix.right))
        }
        Expression::Binary(binary) => format!(
            "({} {} {})",
            render_expression(&binary.left),
            binary.operator,
            render_expression(&binary.right)
        ),
        Expression::If(expr) => {
            let mut out = format!(
                "if {} {}",
                render_expression(&expr.condition),
                render_block(&expr.consequence)
            );
            if let Some(alternative) = &expr.alternative {
                out.push_str(" else ");
                out.push_str(&render_block(alternative));
            }
            out
        }
        Expression::Function(func) => {
            let parameters: Vec<&str> = func.parameters.iter().map(|p| p.value.as_str()).collect();
            format!("func({}) {}", parameters.join(", "), render_block(&func.body))
        }
        Expression::Call(call) => {
            let arguments: Vec<String> = call.arguments.iter().map(render_expression).collect();
            format!("{}({})", render_expression(&call.function), arguments.join(", "))
        }
    }
}

fn render_block(block: &BlockStatement) -> String {
    if block.statements.is_empty() {
        return "{ }".to_string();
    }
    let statements: Vec<String> = block.statements.iter().map(render_source).collect();
    format!("{{ {} }}", statements.join(" "))
}

/// Source form of a statement inside a block
fn render_source(statement: &Statement) -> String {
    match statement {
        Statement::Var(stmt) => {
            format!("var {} = {};", stmt.name.value, render_expression(&stmt.value))
        }
        Statement::Return(stmt) => match &stmt.value {
            Some(value) => format!("return {};", render_expression(value)),
            None => "return;".to_string(),
        },
        Statement::Assignment(stmt) => {
            format!("{} = {};", stmt.name, render_expression(&stmt.value))
        }
        Statement::Expression(stmt) => format!("{};", render_expression(&stmt.expression)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;

    fn render_first(source: &str) -> String {
        let mut parser = Parser::from_source(source);
        let program = parser.parse_program();
        assert!(parser.errors().is_empty(), "{:?}", parser.error_messages());
        render_statement(&program.statements[0])
    }

    #[test]
    fn test_statement_labels() {
        assert_eq!(
            render_first("var five = 5;"),
            "VarStatement - Identifier/Name : five, value: 5"
        );
        assert_eq!(render_first("return x;"), "ReturnStatement - Value: x");
        assert_eq!(render_first("return;"), "ReturnStatement - Value: <none>");
        assert_eq!(
            render_first("x = x + 1;"),
            "AssignmentStatement - Name: x, value: (x + 1)"
        );
        assert_eq!(render_first("a * b"), "ExpressionStatement: (a * b)");
    }

    #[test]
    fn test_compound_expressions() {
        assert_eq!(
            render_first("if (a < b) { return a; } else { b }"),
            "ExpressionStatement: if (a < b) { return a; } else { b; }"
        );
        assert_eq!(
            render_first("var add = func(x, y) { x + y; };"),
            "VarStatement - Identifier/Name : add, value: func(x, y) { (x + y); }"
        );
        assert_eq!(
            render_first("add(1, -2, f())"),
            "ExpressionStatement: add(1, (-2), f())"
        );
        assert_eq!(render_first("func() {}"), "ExpressionStatement: func() { }");
    }

    #[test]
    fn test_colored_labels_contain_text() {
        let mut parser = Parser::from_source("var a = b;");
        let program = parser.parse_program();
        let colored = Renderer::new(true).statement(&program.statements[0]);
        let plain = Renderer::plain().statement(&program.statements[0]);

        assert!(colored.contains("VarStatement - Identifier/Name :"));
        assert!(!plain.contains('\u{1b}'));
        // crossterm itself honours NO_COLOR
        if std::env::var_os("NO_COLOR").is_none() {
            assert!(colored.contains('\u{1b}'));
        }
    }
}
