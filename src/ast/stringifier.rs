//! A visitor that renders the AST as a parenthesized prefix/infix textual
//! form, used for debug output. Grounded on the original `ExpressionToString`
//! visitor, extended to the statement kinds that visitor never covered
//! (`Block`, `IfElse`, `WhileLoop`) in the same style.

use crate::lexer::LiteralValue;

use super::{Expression, Statement};

fn literal_to_string(value: &LiteralValue) -> String {
    match value {
        LiteralValue::Bool(b) => b.to_string(),
        // Mirrors the original `operator<<(ostream&, Token::Literal&)`,
        // which formats via `std::to_string` (six fixed decimals, no
        // trimming) rather than the evaluator's trimmed coercion — see
        // the worked example in the stringifier test below.
        LiteralValue::Number(n) => format!("{n:.6}"),
        LiteralValue::String(s) => s.clone(),
        LiteralValue::Null => "nullptr".to_owned(),
    }
}

fn expression_to_string(expression: &Expression) -> String {
    match expression {
        Expression::Literal(value) => literal_to_string(value),
        Expression::Grouping(inner) => format!("({})", expression_to_string(inner)),
        Expression::Unary(op, right) => {
            format!("({} {})", op.lexeme, expression_to_string(right))
        }
        Expression::Binary(left, op, right) => format!(
            "({} {} {})",
            expression_to_string(left),
            op.lexeme,
            expression_to_string(right)
        ),
        Expression::Variable(name) => name.lexeme.clone(),
        Expression::Assignment(name, value) => {
            format!("({} = {})", name.lexeme, expression_to_string(value))
        }
    }
}

fn statement_to_string(statement: &Statement) -> String {
    match statement {
        Statement::Expression(expression) => expression_to_string(expression),
        Statement::Print(_, expression) => format!("(print {})", expression_to_string(expression)),
        Statement::VariableDeclaration(name, initializer) => match initializer {
            Some(value) => format!("(var {} = {})", name.lexeme, expression_to_string(value)),
            None => format!("(var {})", name.lexeme),
        },
        Statement::Block(statements) => {
            let body: Vec<String> = statements.iter().map(statement_to_string).collect();
            format!("{{{}}}", body.join(" "))
        }
        Statement::IfElse {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            let then_str = statement_to_string(then_branch);
            match else_branch {
                Some(else_stmt) => format!(
                    "(if {} then {} else {})",
                    expression_to_string(condition),
                    then_str,
                    statement_to_string(else_stmt)
                ),
                None => format!("(if {} then {})", expression_to_string(condition), then_str),
            }
        }
        Statement::WhileLoop {
            condition, body, ..
        } => format!(
            "(while {} do {})",
            expression_to_string(condition),
            statement_to_string(body)
        ),
    }
}

/// Renders a statement tree as its textual form, per the rules in the
/// stringifier specification.
pub fn to_string(statement: &Statement) -> String {
    statement_to_string(statement)
}
