//! O'ahu Eval - tree-walking interpreter for O'ahu.
//!
//! # Architecture
//!
//! - [`Environment`]: a stack of shared, reference-counted scopes. Closures
//!   and instances hold on to the scope they were created in.
//! - [`Interpreter`]: evaluates parsed programs. Non-local control flow
//!   (`break`, `continue`, `return`, `throw`, `exit`) travels as the error
//!   side of [`EvalResult`] and is caught where it is handled.
//! - [`Linker`]: maps linked declarations in prelude sources to native Rust
//!   functions and classes. The `core` link ([`CoreLink`]) supplies printing,
//!   input, timing and the primitive wrapper classes.
//! - [`Value`]: runtime values. Lists are shared tables; primitives gain
//!   members by being wrapped in instances of their prelude classes.

pub mod environment;
pub mod errors;
mod interpreter;
pub mod linker;
mod operators;
pub mod print_handler;
mod signal;
mod unary_operators;
pub mod value;

pub use environment::{Environment, LocalScope, Reference, Scope, ScopeRef};
pub use errors::{EvalError, EvalErrorKind, LinkError};
pub use interpreter::{Interpreter, InterpreterBuilder, RunResult, ScopedInterpreter};
pub use linker::{CoreLink, Link, LinkData, Linker, NativeClass, NativeFunction, Registry};
pub use operators::{evaluate_binary, Operand};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use signal::{ControlAction, EvalResult};
pub use unary_operators::evaluate_unary;
pub use value::{ClassValue, FunctionValue, Instance, InstanceLink, Table, Value};
