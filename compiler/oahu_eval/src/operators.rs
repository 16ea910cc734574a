//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch over the fixed value set. Short-circuiting of
//! `and`/`or` happens in the interpreter; by the time a pair reaches
//! [`evaluate_binary`] both sides have been evaluated.

use oahu_ir::ast::BinaryOp;

use crate::Value;

/// The operand a binary operator rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Left,
    Right,
}

/// Evaluate a binary operation on two values.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, Operand> {
    match op {
        BinaryOp::Equal => Ok(Value::Bool(left == right)),
        BinaryOp::NotEqual => Ok(Value::Bool(left != right)),
        BinaryOp::Or | BinaryOp::And => eval_logic(left, right, op),
        BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
            eval_comparison(left, right, op)
        }
        BinaryOp::Add => eval_add(left, right),
        BinaryOp::Multiply => eval_multiply(left, right),
        BinaryOp::Subtract | BinaryOp::Divide | BinaryOp::Modulus => eval_arithmetic(left, right, op),
    }
}

fn eval_logic(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, Operand> {
    let Value::Bool(a) = left else {
        return Err(Operand::Left);
    };
    let Value::Bool(b) = right else {
        return Err(Operand::Right);
    };
    Ok(Value::Bool(if op == BinaryOp::Or { *a || *b } else { *a && *b }))
}

fn eval_comparison(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, Operand> {
    let ordering = match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(_) | Value::String(_), _) => return Err(Operand::Right),
        _ => return Err(Operand::Left),
    };

    // NaN compares false under every operator.
    let result = ordering.is_some_and(|ordering| match op {
        BinaryOp::Less => ordering.is_lt(),
        BinaryOp::LessEqual => ordering.is_le(),
        BinaryOp::Greater => ordering.is_gt(),
        _ => ordering.is_ge(),
    });
    Ok(Value::Bool(result))
}

fn eval_add(left: &Value, right: &Value) -> Result<Value, Operand> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::String(_), Value::String(_) | Value::Number(_))
        | (Value::Number(_), Value::String(_)) => Ok(Value::string(format!("{left}{right}"))),
        (Value::Number(_) | Value::String(_), _) => Err(Operand::Right),
        _ => Err(Operand::Left),
    }
}

fn eval_multiply(left: &Value, right: &Value) -> Result<Value, Operand> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
        (Value::String(s), Value::Number(n)) => repeat_string(s, *n),
        (Value::Number(_) | Value::String(_), _) => Err(Operand::Right),
        _ => Err(Operand::Left),
    }
}

fn eval_arithmetic(left: &Value, right: &Value, op: BinaryOp) -> Result<Value, Operand> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(match op {
            BinaryOp::Subtract => a - b,
            BinaryOp::Divide => a / b,
            _ => a % b,
        })),
        (Value::Number(_), _) => Err(Operand::Right),
        _ => Err(Operand::Left),
    }
}

/// Longest string, in bytes, that `string * n` may build.
const MAX_REPEAT_BYTES: usize = 1 << 28;

/// `string * n`. A result past [`MAX_REPEAT_BYTES`] rejects the count.
fn repeat_string(s: &str, n: f64) -> Result<Value, Operand> {
    let count = repeat_count(n);
    match s.len().checked_mul(count) {
        Some(len) if len <= MAX_REPEAT_BYTES => Ok(Value::string(s.repeat(count))),
        _ => Err(Operand::Right),
    }
}

/// Repetition count for `string * n`: truncated, never negative.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the saturating cast is the intended truncation; NaN repeats zero times"
)]
fn repeat_count(n: f64) -> usize {
    n.trunc() as usize
}

#[cfg(test)]
mod tests;
