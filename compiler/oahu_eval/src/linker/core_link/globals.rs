//! Global natives: `print`, `println`, `read`, `readln`, `time`, `wait`,
//! `range` and `str`.

use std::io::{self, BufRead};
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::errors::{invalid_link_argument, EvalError};
use crate::linker::{LinkData, Registry};
use crate::{Interpreter, Value};

pub(super) fn register(registry: &mut Registry<'_>) {
    registry.function(".print", 1, print);
    registry.function(".println", 1, println);
    registry.function(".read", 0, read);
    registry.function(".readln", 0, readln);
    registry.function(".time", 0, time);
    registry.function(".wait", 1, wait);
    registry.function(".range", 3, range);
    registry.function(".str", 1, str);
}

fn print(interpreter: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    interpreter.print_handler().print(&data.arg(0).to_string());
    Ok(Value::Unit)
}

fn println(interpreter: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    interpreter.print_handler().println(&data.arg(0).to_string());
    Ok(Value::Unit)
}

/// One line of standard input without its terminator. Empty at end of input.
fn read_line() -> String {
    let mut line = String::new();
    // A failed read behaves like end of input.
    let _ = io::stdin().lock().read_line(&mut line);
    line.truncate(line.trim_end_matches(['\r', '\n']).len());
    line
}

/// The first whitespace-separated word of the next input line.
fn read(_: &mut Interpreter, _: LinkData) -> Result<Value, EvalError> {
    let line = read_line();
    Ok(Value::string(line.split_whitespace().next().unwrap_or_default()))
}

fn readln(_: &mut Interpreter, _: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(read_line()))
}

/// Seconds since the Unix epoch.
fn time(_: &mut Interpreter, _: LinkData) -> Result<Value, EvalError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    Ok(Value::Number(elapsed.as_secs_f64()))
}

fn wait(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let seconds = data.number(0, ".wait@seconds")?;
    let duration = Duration::try_from_secs_f64(seconds.max(0.0))
        .map_err(|_| invalid_link_argument(&data.arg(0), ".wait@seconds"))?;
    thread::sleep(duration);
    Ok(Value::Unit)
}

/// Numbers from `start` up to (not including) `end`, `step` apart.
fn range(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    let start = data.number(0, ".range@start")?;
    let end = data.number(1, ".range@end")?;
    let step = data.number(2, ".range@step")?;

    if step.is_nan() || step <= 0.0 {
        return Err(invalid_link_argument(&data.arg(2), ".range@step"));
    }

    let mut items = Vec::new();
    let mut i = start;
    while i < end {
        items.push(Value::Number(i));
        i += step;
    }
    Ok(Value::list(items))
}

fn str(_: &mut Interpreter, data: LinkData) -> Result<Value, EvalError> {
    Ok(Value::string(data.arg(0).to_string()))
}
