//! Unwinding signals.
//!
//! Non-local control flow travels up the evaluator as the `Err` side of
//! [`EvalResult`]. Loops stop `Break` and `Continue`, function calls stop
//! `Return`, `try` stops `Throw`, and only the top level stops `Exit`.
//! Runtime errors ride the same channel so `?` carries them too.

use std::fmt;

use oahu_ir::Name;

use crate::errors::EvalError;
use crate::Value;

/// An unwinding signal.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlAction {
    Break(Option<Name>),
    Continue(Option<Name>),
    Return(Value),
    Throw(Value),
    Exit(Value),
    Error(Box<EvalError>),
}

impl ControlAction {
    /// Whether a loop labelled `own` stops this `Break` or `Continue` label.
    ///
    /// Unlabelled signals stop at the innermost loop.
    #[inline]
    pub fn targets(label: Option<Name>, own: Option<Name>) -> bool {
        label.is_none() || label == own
    }
}

impl From<EvalError> for ControlAction {
    #[cold]
    fn from(err: EvalError) -> Self {
        ControlAction::Error(Box::new(err))
    }
}

impl fmt::Display for ControlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ControlAction::Break(_) => "Break",
            ControlAction::Continue(_) => "Continue",
            ControlAction::Return(_) => "Return",
            ControlAction::Throw(_) => "Throw",
            ControlAction::Exit(_) => "Exit",
            ControlAction::Error(_) => "Error",
        })
    }
}

/// Result of evaluating an expression or statement.
pub type EvalResult<T = Value> = Result<T, ControlAction>;
