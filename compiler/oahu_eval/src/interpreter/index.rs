//! Indexing: `list[i]`, `list["key"]`, `string[i]`.

use oahu_ir::ast::{Arg, Expr};
use oahu_ir::Span;

use super::Interpreter;
use crate::errors::{index_out_of_bounds, invalid_index, negative_index, not_indexable, EvalError};
use crate::{EvalResult, Value};

impl Interpreter {
    /// `target[a, b]` indexes by `a`, then the result by `b`.
    pub(super) fn eval_index(&mut self, target: &Expr, args: &[Arg], span: Span) -> EvalResult {
        let mut value = self.eval_expr(target)?;
        for index in self.eval_spread_args(args)? {
            value = index_value(&value, &index, span)?;
        }
        Ok(value)
    }
}

/// `n` as an index, if it is a whole non-negative number.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "checked whole and non-negative; huge values fail the bounds check"
)]
pub(crate) fn whole_index(n: f64) -> Option<usize> {
    (n >= 0.0 && n.fract() == 0.0).then_some(n as usize)
}

/// Validate `index` against a sequence of `len` elements.
pub(crate) fn element_position(index: &Value, len: usize, span: Span) -> Result<usize, EvalError> {
    let Value::Number(n) = index else {
        return Err(invalid_index(index, span));
    };
    if *n < 0.0 {
        return Err(negative_index(span));
    }
    let position = whole_index(*n).ok_or_else(|| invalid_index(index, span))?;
    if position >= len {
        return Err(index_out_of_bounds(index, len, span));
    }
    Ok(position)
}

/// Index one value by another.
pub(crate) fn index_value(target: &Value, index: &Value, span: Span) -> Result<Value, EvalError> {
    match target {
        Value::List(table) => match index {
            Value::String(key) => Ok(table.key(key).unwrap_or(Value::Null)),
            _ => {
                let position = element_position(index, table.len(), span)?;
                Ok(table.get(position).unwrap_or(Value::Null))
            }
        },
        Value::String(s) => {
            let position = element_position(index, s.chars().count(), span)?;
            Ok(s.chars()
                .nth(position)
                .map_or(Value::Null, |c| Value::string(c.to_string())))
        }
        _ => Err(not_indexable(target, span)),
    }
}

#[cfg(test)]
mod tests;
