//! The `Builder` native class: a growable string.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::EvalError;
use crate::linker::{LinkData, Registry};
use crate::value::Instance;
use crate::{Interpreter, Value};

type Buffer = RefCell<String>;

pub(super) fn register(registry: &mut Registry<'_>) {
    registry.class("Builder", construct);
    registry.function("Builder.append", 1, append);
    registry.function("Builder.build", 0, build);
}

fn construct(_: &mut Interpreter, _: &Instance) -> Result<Rc<dyn Any>, EvalError> {
    Ok(Rc::new(Buffer::default()))
}

/// Append the display form of the argument; returns the builder.
fn append(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let buffer = data.receiver_state::<Buffer>("Builder.append")?;
    buffer.borrow_mut().push_str(&data.arg(0).to_string());
    Ok(Value::Instance(data.receiver("Builder.append")?.clone()))
}

fn build(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let buffer = data.receiver_state::<Buffer>("Builder.build")?;
    let text = buffer.borrow().clone();
    Ok(Value::string(text))
}
