//! Tree-walking evaluator. Grounded on `Interpreter::Impl`'s visitor
//! methods, generalized to add `and`/`or` short-circuiting, `while`, and an
//! explicit division-by-zero fault (left as a TODO in the source this is
//! grounded on).

pub mod environment;

use crate::ast::{Expression, Statement};
use crate::error::RuntimeError;
use crate::lexer::{LiteralValue, Token, TokenType};

use environment::{Environment, ScopeGuard};

pub struct Evaluator {
    environment: Environment,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    pub fn interpret(&mut self, statements: &[Statement]) -> Result<(), RuntimeError> {
        for statement in statements {
            execute(&mut self.environment, statement)?;
        }
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn execute(environment: &mut Environment, statement: &Statement) -> Result<(), RuntimeError> {
    match statement {
        Statement::Expression(expression) => {
            evaluate(environment, expression)?;
            Ok(())
        }
        Statement::Print(keyword, expression) => {
            let value = evaluate(environment, expression)?;
            let text = require_string(value, keyword, "operand must be a string")?;
            print!("{text}");
            Ok(())
        }
        Statement::VariableDeclaration(name, initializer) => {
            let value = match initializer {
                Some(expression) => evaluate(environment, expression)?,
                None => LiteralValue::Null,
            };
            environment.define(&name.lexeme, value, name.position)
        }
        Statement::Block(statements) => {
            let mut guard = ScopeGuard::enter(environment);
            for statement in statements {
                execute(guard.environment(), statement)?;
            }
            Ok(())
        }
        Statement::IfElse {
            if_keyword,
            condition,
            then_branch,
            else_branch,
        } => {
            let value = evaluate(environment, condition)?;
            let condition = require_bool(value, if_keyword, "condition must evaluate to a boolean")?;
            if condition {
                execute(environment, then_branch)
            } else if let Some(else_branch) = else_branch {
                execute(environment, else_branch)
            } else {
                Ok(())
            }
        }
        Statement::WhileLoop {
            keyword,
            condition,
            body,
        } => loop {
            let value = evaluate(environment, condition)?;
            let condition = require_bool(value, keyword, "condition must evaluate to a boolean")?;
            if !condition {
                return Ok(());
            }
            execute(environment, body)?;
        },
    }
}

fn evaluate(environment: &mut Environment, expression: &Expression) -> Result<LiteralValue, RuntimeError> {
    match expression {
        Expression::Literal(value) => Ok(value.clone()),
        Expression::Grouping(inner) => evaluate(environment, inner),
        Expression::Unary(op, right) => {
            let value = evaluate(environment, right)?;
            evaluate_unary(op, value)
        }
        Expression::Binary(left, op, right) => evaluate_binary(environment, left, op, right),
        Expression::Variable(name) => environment.get(&name.lexeme, name.position),
        Expression::Assignment(name, value) => {
            let value = evaluate(environment, value)?;
            environment.assign(&name.lexeme, value.clone(), name.position)?;
            Ok(value)
        }
    }
}

fn evaluate_binary(
    environment: &mut Environment,
    left: &Expression,
    op: &Token,
    right: &Expression,
) -> Result<LiteralValue, RuntimeError> {
    if op.kind == TokenType::And || op.kind == TokenType::Or {
        return evaluate_logical(environment, left, op, right);
    }

    let left = evaluate(environment, left)?;
    let right = evaluate(environment, right)?;
    evaluate_binary_operator(op, left, right)
}

/// `and`/`or` evaluate their right operand only when the left one doesn't
/// already decide the result.
fn evaluate_logical(
    environment: &mut Environment,
    left: &Expression,
    op: &Token,
    right: &Expression,
) -> Result<LiteralValue, RuntimeError> {
    let left_value = evaluate(environment, left)?;
    let left_bool = require_bool(left_value.clone(), op, "operand must be a boolean")?;

    if op.kind == TokenType::Or && left_bool {
        return Ok(left_value);
    }
    if op.kind == TokenType::And && !left_bool {
        return Ok(left_value);
    }

    let right_value = evaluate(environment, right)?;
    require_bool(right_value.clone(), op, "operand must be a boolean")?;
    Ok(right_value)
}

fn evaluate_unary(op: &Token, value: LiteralValue) -> Result<LiteralValue, RuntimeError> {
    match op.kind {
        TokenType::Minus => {
            let n = require_number(value, op, "operand must be a number")?;
            Ok(LiteralValue::Number(-n))
        }
        TokenType::Bang => {
            let b = require_bool(value, op, "operand must be a boolean")?;
            Ok(LiteralValue::Bool(!b))
        }
        _ => unreachable!("unhandled unary operator {op:?}"),
    }
}

fn evaluate_binary_operator(op: &Token, left: LiteralValue, right: LiteralValue) -> Result<LiteralValue, RuntimeError> {
    match op.kind {
        TokenType::Minus => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Number(l - r))
        }
        TokenType::Slash => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            if r == 0.0 {
                return Err(fault(op, "division by zero"));
            }
            Ok(LiteralValue::Number(l / r))
        }
        TokenType::Star => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Number(l * r))
        }
        TokenType::Plus => evaluate_plus(op, left, right),
        TokenType::Greater => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Bool(l > r))
        }
        TokenType::GreaterEqual => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Bool(l >= r))
        }
        TokenType::Less => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Bool(l < r))
        }
        TokenType::LessEqual => {
            let l = require_number(left, op, "left operand must be a number")?;
            let r = require_number(right, op, "right operand must be a number")?;
            Ok(LiteralValue::Bool(l <= r))
        }
        TokenType::BangEqual => Ok(LiteralValue::Bool(left != right)),
        TokenType::EqualEqual => Ok(LiteralValue::Bool(left == right)),
        _ => unreachable!("unhandled binary operator {op:?}"),
    }
}

/// `+` rejects null operands and booleans on both sides, concatenates if
/// either side is a string (coercing the other side to its trimmed textual
/// form), and otherwise adds two numbers.
fn evaluate_plus(op: &Token, left: LiteralValue, right: LiteralValue) -> Result<LiteralValue, RuntimeError> {
    if matches!(left, LiteralValue::Null) {
        return Err(fault(op, "left operand must not be null"));
    }
    if matches!(right, LiteralValue::Null) {
        return Err(fault(op, "right operand must not be null"));
    }
    if matches!(left, LiteralValue::Bool(_)) && matches!(right, LiteralValue::Bool(_)) {
        return Err(fault(op, "cannot add two booleans"));
    }

    let is_concatenation = matches!(left, LiteralValue::String(_)) || matches!(right, LiteralValue::String(_));
    if is_concatenation {
        Ok(LiteralValue::String(format!(
            "{}{}",
            coerce_to_string(left),
            coerce_to_string(right)
        )))
    } else {
        let l = require_number(left, op, "left operand must be a number")?;
        let r = require_number(right, op, "right operand must be a number")?;
        Ok(LiteralValue::Number(l + r))
    }
}

/// The evaluator's own number/bool-to-string coercion, distinct from the
/// Stringifier's rendering: numbers are trimmed of trailing zeros and a
/// trailing decimal point rather than kept at six fixed decimals.
fn coerce_to_string(value: LiteralValue) -> String {
    match value {
        LiteralValue::String(s) => s,
        LiteralValue::Number(n) => {
            let mut formatted = format!("{n:.6}");
            if formatted.contains('.') {
                while formatted.ends_with('0') {
                    formatted.pop();
                }
                if formatted.ends_with('.') {
                    formatted.pop();
                }
            }
            formatted
        }
        LiteralValue::Bool(b) => b.to_string(),
        LiteralValue::Null => unreachable!("null is rejected before coercion"),
    }
}

fn require_number(value: LiteralValue, op: &Token, message: &str) -> Result<f64, RuntimeError> {
    match value {
        LiteralValue::Number(n) => Ok(n),
        _ => Err(fault(op, message)),
    }
}

fn require_bool(value: LiteralValue, op: &Token, message: &str) -> Result<bool, RuntimeError> {
    match value {
        LiteralValue::Bool(b) => Ok(b),
        _ => Err(fault(op, message)),
    }
}

fn require_string(value: LiteralValue, op: &Token, message: &str) -> Result<String, RuntimeError> {
    match value {
        LiteralValue::String(s) => Ok(s),
        _ => Err(fault(op, message)),
    }
}

fn fault(op: &Token, message: &str) -> RuntimeError {
    RuntimeError {
        message: message.to_owned(),
        position: op.position,
    }
}
