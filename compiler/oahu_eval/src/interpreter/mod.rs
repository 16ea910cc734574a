//! Tree-walking interpreter.
//!
//! The interpreter owns the scope stack, the linker and the primitive
//! wrapper cache. Evaluation is split across submodules by concern:
//! expressions, statements, calls, classes, indexing and primitive
//! wrapping. Every recursive entry point runs under
//! [`ensure_sufficient_stack`](oahu_stack::ensure_sufficient_stack).
//!
//! State persists between [`Interpreter::run`] calls, which is what lets the
//! REPL keep definitions from one line to the next.

mod builder;
mod class;
mod expr;
mod function_call;
mod index;
mod primitive;
mod scope_guard;
mod stmt;

pub use builder::InterpreterBuilder;
pub(crate) use index::{element_position, index_value, whole_index};
pub use scope_guard::ScopedInterpreter;

use oahu_diagnostic::{Diagnostic, Stage};
use oahu_ir::ast::{Program, StmtKind};
use oahu_ir::{Name, SharedInterner, Source, Span};
use tracing::{debug, warn};

use crate::environment::{Environment, PrimitiveCache, Reference};
use crate::errors::{
    destructure_count, not_spreadable, redefined_name, uncaught_throw, unhandled_redirect,
    EvalError,
};
use crate::linker::Linker;
use crate::print_handler::SharedPrintHandler;
use crate::{ControlAction, EvalResult, Value};

/// Outcome of running a program to completion.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// Payload of a top-level `return` or `exit`, else the value of a
    /// trailing expression statement, else unit.
    pub value: Value,
    /// Whether the program ended with `exit`.
    pub exited: bool,
}

impl RunResult {
    /// Textual representation of the value.
    pub fn repr(&self) -> String {
        self.value.to_string()
    }

    /// Process exit code requested by `exit`: its number, truncated, or 0.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "exit codes outside i32 saturate like any out-of-range cast"
    )]
    pub fn exit_code(&self) -> Option<i32> {
        if !self.exited {
            return None;
        }
        Some(self.value.as_number().map_or(0, |n| n as i32))
    }
}

/// Tree-walking interpreter.
pub struct Interpreter {
    pub(crate) interner: SharedInterner,
    pub(crate) env: Environment,
    pub(crate) linker: Linker,
    pub(crate) primitives: PrimitiveCache,
    print_handler: SharedPrintHandler,
    warnings: Vec<Diagnostic>,
}

impl Interpreter {
    /// Start configuring an interpreter.
    pub fn builder(interner: SharedInterner) -> InterpreterBuilder {
        InterpreterBuilder::new(interner)
    }

    pub fn interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    pub fn linker(&self) -> &Linker {
        &self.linker
    }

    /// Warnings collected since the last call.
    pub fn take_warnings(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.warnings)
    }

    /// Value bound to `name` in the global scope.
    pub fn global(&self, name: &str) -> Option<Value> {
        let name = self.interner.get(name)?;
        self.env.global().borrow().lookup(name)
    }

    /// Run a program in the global scope.
    ///
    /// Runtime errors end the run. The scope stack is back at the global
    /// scope afterwards either way, so the interpreter can run again.
    pub fn run(&mut self, program: &Program) -> Result<RunResult, EvalError> {
        let mut last = Value::Unit;

        for stmt in &program.stmts {
            let outcome = match &stmt.kind {
                StmtKind::Expression(expr) => self.eval_expr(expr).map(|value| last = value),
                _ => {
                    last = Value::Unit;
                    self.exec_stmt(stmt)
                }
            };

            match outcome {
                Ok(()) => {}
                Err(ControlAction::Return(value)) => {
                    return Ok(RunResult {
                        value,
                        exited: false,
                    })
                }
                Err(ControlAction::Exit(value)) => {
                    return Ok(RunResult {
                        value,
                        exited: true,
                    })
                }
                Err(ControlAction::Throw(value)) => return Err(uncaught_throw(&value, stmt.span)),
                Err(ControlAction::Error(err)) => return Err(*err),
                Err(signal @ (ControlAction::Break(_) | ControlAction::Continue(_))) => {
                    return Err(unhandled_redirect(signal, stmt.span))
                }
            }
        }

        Ok(RunResult {
            value: last,
            exited: false,
        })
    }

    /// Parse and run `source`. Parse warnings are added to the collected
    /// warnings.
    pub fn run_source(&mut self, source: &Source) -> Result<RunResult, Diagnostic> {
        let output =
            oahu_parse::parse(source.text(), &self.interner).map_err(|err| err.to_diagnostic())?;
        self.warnings
            .extend(output.warnings.iter().map(|warning| warning.to_diagnostic()));
        self.run(&output.program).map_err(|err| err.to_diagnostic())
    }

    /// Import link `name` and run its prelude.
    ///
    /// Importing the same link twice only records a warning.
    pub fn import_link(&mut self, name: &str) -> Result<(), Diagnostic> {
        match self.linker.import_link(name) {
            Ok(Some(prelude)) => {
                debug!(link = name, "running link prelude");
                self.run_source(&prelude).map(|_| ())
            }
            Ok(None) => {
                warn!(link = name, "duplicate link import");
                self.warnings.push(Diagnostic::warning(
                    Stage::Linker,
                    format!("Link '{name}' has already been imported"),
                    Span::NONE,
                ));
                Ok(())
            }
            Err(err) => Err(EvalError::from(err).to_diagnostic()),
        }
    }

    /// Tear down every imported link and drop cached wrappers.
    pub fn close(&mut self) {
        self.linker.close();
        self.primitives.clear();
    }

    #[inline]
    pub(crate) fn name_str(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }

    /// Declare `name` in the current scope. `_` is never bound.
    pub(crate) fn bind(&mut self, name: Name, reference: Reference, span: Span) -> EvalResult<()> {
        let text = self.name_str(name);
        if text == "_" {
            return Ok(());
        }
        if self.env.declare(name, reference) {
            Ok(())
        } else {
            Err(redefined_name(text, span).into())
        }
    }

    /// Bind `names` to `value`, spreading it first when `destructured`.
    pub(crate) fn bind_names(
        &mut self,
        names: &[Name],
        destructured: bool,
        value: Value,
        constant: bool,
        mutable: bool,
        span: Span,
    ) -> EvalResult<()> {
        if !destructured {
            return match names.first() {
                Some(&name) => self.bind(name, Reference::new(constant, mutable, value), span),
                None => Ok(()),
            };
        }

        let items = value.spread().ok_or_else(|| not_spreadable(&value, span))?;
        if items.len() < names.len() {
            return Err(destructure_count(names.len(), items.len(), span).into());
        }
        for (&name, item) in names.iter().zip(items) {
            self.bind(name, Reference::new(constant, mutable, item), span)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
