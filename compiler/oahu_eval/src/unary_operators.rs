//! Unary operator implementations for the evaluator.

use oahu_ir::ast::UnaryOp;

use crate::Value;

/// Evaluate a unary operation. `None` means the operand is invalid for `op`.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Option<Value> {
    match (value, op) {
        (Value::Number(n), UnaryOp::Negative) => Some(Value::Number(-n)),
        (Value::String(s), UnaryOp::Negative) => Some(Value::string(s.chars().rev().collect::<String>())),

        (Value::Bool(b), UnaryOp::Not) => Some(Value::Bool(!b)),

        (Value::String(s), UnaryOp::Size) => Some(Value::from_size(s.chars().count())),
        (Value::List(table), UnaryOp::Size) => Some(Value::from_size(table.len())),

        (_, UnaryOp::Spread) => value.spread().map(Value::list),

        _ => None,
    }
}
