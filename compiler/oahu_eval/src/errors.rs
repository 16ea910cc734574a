//! Evaluation and link errors.
//!
//! Runtime failures carry the span of the node that failed and render under
//! the runtime stage. Link failures are position-less and render under the
//! linker stage as a header-only box.

use std::fmt;

use oahu_diagnostic::{Diagnostic, Stage};
use oahu_ir::Span;

use crate::Value;

/// A fatal evaluation error.
#[derive(Clone, Debug, PartialEq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    #[error("Operand '{operand}' for unary {op} operator is invalid")]
    InvalidUnaryOperand { operand: String, op: String },
    #[error("Left operand '{operand}' for binary {op} operator is invalid")]
    InvalidLeftOperand { operand: String, op: String },
    #[error("Right operand '{operand}' for binary {op} operator is invalid")]
    InvalidRightOperand { operand: String, op: String },
    #[error("Value '{0}' is not callable")]
    NotCallable(String),
    #[error("Value '{0}' is not spreadable")]
    NotSpreadable(String),
    #[error("Constant cannot be reassigned")]
    ReassignedConstant,
    #[error("Name '{0}' has already been defined")]
    RedefinedName(String),
    #[error("Name '{0}' has not been defined")]
    UndefinedName(String),
    #[error("{0} was not handled")]
    UnhandledRedirect(String),
    #[error("Arguments for '{0}' could not be resolved")]
    UnresolvedArguments(String),
    #[error("Condition '{0}' is not a boolean")]
    InvalidCondition(String),
    #[error("Loop count '{0}' is not a number")]
    InvalidLoopCount(String),
    #[error("Member '{member}' of value '{target}' is undefined")]
    UndefinedMember { target: String, member: String },
    #[error("Index cannot be negative")]
    NegativeIndex,
    #[error("Index '{index}' is out of bounds for size '{size}'")]
    IndexOutOfBounds { index: String, size: usize },
    #[error("Index '{0}' is invalid")]
    InvalidIndex(String),
    #[error("Value '{0}' is not indexable")]
    NotIndexable(String),
    #[error("Thrown value '{0}' was not caught")]
    UncaughtThrow(String),
    #[error("Base '{0}' is not an instance")]
    InvalidBase(String),
    #[error("Expected at least {expected} values to destructure; found {found}")]
    DestructureCount { expected: usize, found: usize },
    #[error(transparent)]
    Link(#[from] LinkError),
}

/// Failures raised by the linker or by native functions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LinkError {
    #[error("Link for file '{0}' is unavailable")]
    MissingLink(String),
    #[error("Link for function '{0}' is unavailable")]
    MissingFunction(String),
    #[error("Link for class '{0}' is unavailable")]
    MissingClass(String),
    #[error("Linked function '{path}' expected '{expected}' arguments; received '{received}'")]
    ArityMismatch {
        path: String,
        expected: usize,
        received: usize,
    },
    #[error("Argument '{argument}' for link function parameter '{param}' is invalid")]
    InvalidArgument { argument: String, param: String },
    #[error("String index '{0}' out of bounds")]
    InvalidStringIndex(String),
    #[error("String format position '{0}' must be first number")]
    InvalidFormatPosition(String),
    #[error("String format position '{0}' has no argument")]
    MissingFormatArgument(usize),
    #[error("Instance member '{0}' could not be linked")]
    MissingReceiver(String),
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    /// Fill in `span` if this error has none yet.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        if self.span.is_none() {
            self.span = span;
        }
        self
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, EvalErrorKind::Link(_))
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if self.is_link() {
            Diagnostic::standalone(Stage::Linker, self.to_string())
        } else {
            Diagnostic::error(Stage::Runtime, self.to_string(), self.span)
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

impl From<LinkError> for EvalError {
    fn from(err: LinkError) -> Self {
        EvalError::new(EvalErrorKind::Link(err), Span::NONE)
    }
}

#[cold]
pub fn invalid_unary_operand(operand: &Value, op: impl fmt::Display, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidUnaryOperand {
            operand: operand.to_string(),
            op: op.to_string(),
        },
        span,
    )
}

#[cold]
pub fn invalid_left_operand(operand: &Value, op: impl fmt::Display, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidLeftOperand {
            operand: operand.to_string(),
            op: op.to_string(),
        },
        span,
    )
}

#[cold]
pub fn invalid_right_operand(operand: &Value, op: impl fmt::Display, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::InvalidRightOperand {
            operand: operand.to_string(),
            op: op.to_string(),
        },
        span,
    )
}

#[cold]
pub fn not_callable(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable(value.to_string()), span)
}

#[cold]
pub fn not_spreadable(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotSpreadable(value.to_string()), span)
}

#[cold]
pub fn reassigned_constant(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::ReassignedConstant, span)
}

#[cold]
pub fn redefined_name(name: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::RedefinedName(name.to_string()), span)
}

#[cold]
pub fn undefined_name(name: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UndefinedName(name.to_string()), span)
}

#[cold]
pub fn unhandled_redirect(signal: impl fmt::Display, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UnhandledRedirect(signal.to_string()), span)
}

#[cold]
pub fn unresolved_arguments(callable: &str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UnresolvedArguments(callable.to_string()), span)
}

#[cold]
pub fn invalid_condition(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidCondition(value.to_string()), span)
}

#[cold]
pub fn invalid_loop_count(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidLoopCount(value.to_string()), span)
}

#[cold]
pub fn undefined_member(target: &Value, member: &str, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedMember {
            target: target.to_string(),
            member: member.to_string(),
        },
        span,
    )
}

#[cold]
pub fn negative_index(span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NegativeIndex, span)
}

#[cold]
pub fn index_out_of_bounds(index: &Value, size: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::IndexOutOfBounds {
            index: index.to_string(),
            size,
        },
        span,
    )
}

#[cold]
pub fn invalid_index(index: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidIndex(index.to_string()), span)
}

#[cold]
pub fn not_indexable(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotIndexable(value.to_string()), span)
}

#[cold]
pub fn uncaught_throw(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UncaughtThrow(value.to_string()), span)
}

#[cold]
pub fn invalid_base(value: &Value, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::InvalidBase(value.to_string()), span)
}

#[cold]
pub fn destructure_count(expected: usize, found: usize, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DestructureCount { expected, found }, span)
}

#[cold]
pub fn invalid_link_argument(argument: &Value, param: &str) -> EvalError {
    LinkError::InvalidArgument {
        argument: argument.to_string(),
        param: param.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests;
