//! Runtime values.
//!
//! Primitives (unit, null, booleans, numbers, strings) are held inline.
//! Lists, functions, classes and instances are reference-counted, so a
//! clone of a [`Value`] shares the underlying object.

mod callable;
mod instance;
mod number;
mod table;

pub use callable::{ClassValue, FunctionValue};
pub use instance::{Instance, InstanceLink};
pub use number::{format_number, format_truncated};
pub use table::Table;

use std::fmt;
use std::rc::Rc;

use oahu_ir::Literal;

/// A runtime value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Unit,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    List(Table),
    Function(Rc<FunctionValue>),
    Class(Rc<ClassValue>),
    Instance(Instance),
}

impl Value {
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Table::from_list(items))
    }

    /// A count or length as a number.
    #[expect(
        clippy::cast_precision_loss,
        reason = "sizes beyond 2^53 elements are not reachable"
    )]
    pub fn from_size(n: usize) -> Self {
        Value::Number(n as f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }

    /// Items of a spreadable value: the one-character strings of a string,
    /// or the elements of a list.
    pub fn spread(&self) -> Option<Vec<Value>> {
        match self {
            Value::String(s) => Some(s.chars().map(|c| Value::string(c.to_string())).collect()),
            Value::List(table) => Some(table.items()),
            _ => None,
        }
    }
}

impl From<&Literal> for Value {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::Bool(b) => Value::Bool(*b),
            Literal::Number(n) => Value::Number(*n),
            Literal::String(s) => Value::string(s.as_str()),
            Literal::Null => Value::Null,
            Literal::Unit => Value::Unit,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Unit, Value::Unit) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Class(a), Value::Class(b)) => Rc::ptr_eq(a, b),
            (Value::Instance(a), Value::Instance(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => write!(f, "unit"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::String(s) => write!(f, "{s}"),
            Value::List(table) => write!(f, "{table}"),
            Value::Function(function) => write!(f, "{function}"),
            Value::Class(class) => write!(f, "{class}"),
            Value::Instance(instance) => write!(f, "{instance}"),
        }
    }
}

#[cfg(test)]
mod tests;
