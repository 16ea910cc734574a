//! Natives behind the primitive wrapper classes `Any`, `Boolean`, `Number`,
//! `String` and `List`.
//!
//! Each native reads the primitive out of its receiver, a wrapper instance
//! built on member access.

use oahu_ir::Span;

use crate::errors::{invalid_link_argument, EvalError, LinkError};
use crate::interpreter::{element_position, index_value, whole_index};
use crate::linker::{LinkData, Registry};
use crate::value::{format_truncated, Table};
use crate::{Interpreter, Value};

pub(super) fn register(registry: &mut Registry<'_>) {
    registry.function("Any.className", 0, class_name);

    registry.function("Boolean.not", 0, boolean_not);
    registry.function("Boolean.both", 1, boolean_both);
    registry.function("Boolean.either", 1, boolean_either);
    registry.function("Boolean.xor", 1, boolean_xor);
    registry.function("Boolean.toNumber", 0, boolean_to_number);
    registry.function("Boolean.toString", 0, boolean_to_string);

    registry.function("Number.add", 1, number_add);
    registry.function("Number.sub", 1, number_sub);
    registry.function("Number.mul", 1, number_mul);
    registry.function("Number.div", 1, number_div);
    registry.function("Number.floor", 0, number_floor);
    registry.function("Number.toString", 0, number_to_string);

    registry.function("String.size", 0, string_size);
    registry.function("String.get", 1, string_get);
    registry.function("String.upper", 0, string_upper);
    registry.function("String.lower", 0, string_lower);
    registry.function("String.contains", 1, string_contains);
    registry.function("String.split", 1, string_split);
    registry.function("String.format", 1, string_format);

    registry.function("List.size", 0, list_size);
    registry.function("List.push", 1, list_push);
    registry.function("List.pop", 0, list_pop);
    registry.function("List.get", 1, list_get);
    registry.function("List.set", 2, list_set);
    registry.function("List.contains", 1, list_contains);
    registry.function("List.join", 1, list_join);
}

fn class_name(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(data.receiver("Any.className")?.class_name()))
}

fn this_bool(data: &LinkData, path: &str) -> Result<bool, EvalError> {
    data.receiver_primitive(path)?
        .as_bool()
        .ok_or_else(|| LinkError::MissingReceiver(path.to_string()).into())
}

fn this_number(data: &LinkData, path: &str) -> Result<f64, EvalError> {
    data.receiver_primitive(path)?
        .as_number()
        .ok_or_else(|| LinkError::MissingReceiver(path.to_string()).into())
}

fn this_string(data: &LinkData, path: &str) -> Result<String, EvalError> {
    match data.receiver_primitive(path)? {
        Value::String(s) => Ok(s.to_string()),
        _ => Err(LinkError::MissingReceiver(path.to_string()).into()),
    }
}

fn this_list(data: &LinkData, path: &str) -> Result<Table, EvalError> {
    match data.receiver_primitive(path)? {
        Value::List(table) => Ok(table),
        _ => Err(LinkError::MissingReceiver(path.to_string()).into()),
    }
}

fn boolean_not(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::Bool(!this_bool(&data, "Boolean.not")?))
}

fn boolean_both(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_bool(&data, "Boolean.both")?;
    Ok(Value::Bool(this && data.boolean(0, "Boolean.both@that")?))
}

fn boolean_either(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_bool(&data, "Boolean.either")?;
    Ok(Value::Bool(this || data.boolean(0, "Boolean.either@that")?))
}

fn boolean_xor(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_bool(&data, "Boolean.xor")?;
    Ok(Value::Bool(this ^ data.boolean(0, "Boolean.xor@that")?))
}

fn boolean_to_number(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_bool(&data, "Boolean.toNumber")?;
    Ok(Value::Number(if this { 1.0 } else { 0.0 }))
}

fn boolean_to_string(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(this_bool(&data, "Boolean.toString")?.to_string()))
}

fn number_add(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_number(&data, "Number.add")?;
    Ok(Value::Number(this + data.number(0, "Number.add@that")?))
}

fn number_sub(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_number(&data, "Number.sub")?;
    Ok(Value::Number(this - data.number(0, "Number.sub@that")?))
}

fn number_mul(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_number(&data, "Number.mul")?;
    Ok(Value::Number(this * data.number(0, "Number.mul@that")?))
}

/// Division by zero yields NaN rather than an infinity.
fn number_div(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_number(&data, "Number.div")?;
    let that = data.number(0, "Number.div@that")?;
    Ok(Value::Number(if that == 0.0 { f64::NAN } else { this / that }))
}

fn number_floor(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::Number(this_number(&data, "Number.floor")?.floor()))
}

fn number_to_string(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(format_truncated(this_number(&data, "Number.toString")?)))
}

fn string_size(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::from_size(this_string(&data, "String.size")?.chars().count()))
}

fn string_get(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_string(&data, "String.get")?;
    let index = data.arg(0);
    let position = data.number(0, "String.get@index")?;

    let c = whole_index(position)
        .and_then(|i| this.chars().nth(i))
        .ok_or_else(|| LinkError::InvalidStringIndex(index.to_string()))?;
    Ok(Value::string(c.to_string()))
}

fn string_upper(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(this_string(&data, "String.upper")?.to_uppercase()))
}

fn string_lower(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(this_string(&data, "String.lower")?.to_lowercase()))
}

fn string_contains(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_string(&data, "String.contains")?;
    let that = data.string(0, "String.contains@that")?;
    Ok(Value::Bool(this.contains(&*that)))
}

/// Split on a literal separator. An empty separator splits into characters.
fn string_split(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_string(&data, "String.split")?;
    let separator = data.string(0, "String.split@separator")?;

    let parts: Vec<Value> = if separator.is_empty() {
        this.chars().map(|c| Value::string(c.to_string())).collect()
    } else {
        this.split(&*separator).map(Value::string).collect()
    };
    Ok(Value::list(parts))
}

/// Replace each `{n}` with the display form of argument `n`.
fn string_format(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_string(&data, "String.format")?;
    let args = data.list(0, "String.format@args")?.items();
    Ok(Value::string(format_template(&this, &args)?))
}

pub(super) fn format_template(template: &str, args: &[Value]) -> Result<String, EvalError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after
            .find('}')
            .ok_or_else(|| LinkError::InvalidFormatPosition(after.to_string()))?;
        let position = &after[..close];
        let index: usize = position
            .trim()
            .parse()
            .map_err(|_| LinkError::InvalidFormatPosition(position.to_string()))?;
        let arg = args
            .get(index)
            .ok_or(LinkError::MissingFormatArgument(index))?;
        out.push_str(&arg.to_string());
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    Ok(out)
}

fn list_size(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::from_size(this_list(&data, "List.size")?.len()))
}

fn list_push(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    this_list(&data, "List.push")?.push(data.arg(0));
    Ok(Value::Unit)
}

/// Remove and return the last element, or null when empty.
fn list_pop(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(this_list(&data, "List.pop")?.pop().unwrap_or(Value::Null))
}

fn list_get(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_list(&data, "List.get")?;
    index_value(&Value::List(this), &data.arg(0), Span::NONE)
}

/// Set an element by index, or a keyed entry by string.
fn list_set(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_list(&data, "List.set")?;
    let value = data.arg(1);

    match data.arg(0) {
        Value::String(key) => this.set_key(key.to_string(), value),
        index @ Value::Number(_) => {
            let position = element_position(&index, this.len(), Span::NONE)?;
            this.set(position, value);
        }
        other => return Err(invalid_link_argument(&other, "List.set@index")),
    }
    Ok(Value::Unit)
}

fn list_contains(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::Bool(this_list(&data, "List.contains")?.contains(&data.arg(0))))
}

fn list_join(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let this = this_list(&data, "List.join")?;
    let separator = data.string(0, "List.join@separator")?;
    let joined = this
        .items()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(&separator);
    Ok(Value::string(joined))
}
