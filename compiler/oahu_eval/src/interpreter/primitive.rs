//! Wrapping primitives in instances of their prelude classes.

use oahu_ir::Span;
use tracing::trace;

use super::Interpreter;
use crate::value::Instance;
use crate::{EvalResult, Value};

/// Prelude class that wraps `value`, if it has one.
fn wrapper_class(value: &Value) -> Option<&'static str> {
    match value {
        Value::Bool(_) => Some("Boolean"),
        Value::Number(_) => Some("Number"),
        Value::String(_) => Some("String"),
        Value::List(_) => Some("List"),
        _ => None,
    }
}

impl Interpreter {
    /// The wrapper instance for a primitive value.
    ///
    /// Wrappers are built once per value and cached. Returns `None` when the
    /// value has no wrapper class or the class is not defined, as happens
    /// before the core prelude runs.
    pub(super) fn wrap_primitive(&mut self, value: &Value, span: Span) -> EvalResult<Option<Instance>> {
        if let Some(wrapper) = self.primitives.get(value) {
            return Ok(Some(wrapper));
        }

        let Some(class_name) = wrapper_class(value) else {
            return Ok(None);
        };
        let Some(name) = self.interner.get(class_name) else {
            return Ok(None);
        };
        let Some(Value::Class(class)) = self.env.global().borrow().get_own(name) else {
            return Ok(None);
        };

        trace!(class = class_name, "wrapping primitive");
        let wrapper = self.instantiate(&class, Vec::new(), Some(value.clone()), span)?;
        self.primitives.insert(value, wrapper.clone());
        Ok(Some(wrapper))
    }
}
