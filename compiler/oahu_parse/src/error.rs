//! Parse error and warning types.
//!
//! Errors are fatal: the parser stops at the first one. Each carries the
//! span it was detected at and, once it propagates out of a construct that
//! names itself, an [`ErrorContext`] for "while parsing X" messages.
//! Lexer failures surface through [`ParseErrorKind::Lexical`] and render
//! under the lexer stage.

use std::fmt;

use oahu_diagnostic::{Diagnostic, Stage};
use oahu_ir::{Span, TokenKind};
use oahu_lexer::{LexError, LexErrorKind};

/// A fatal parse error.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
    /// Innermost construct being parsed when the error occurred.
    pub context: Option<ErrorContext>,
}

/// What kind of parse error occurred.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Lexical(#[from] LexErrorKind),
    #[error("Token type '{found}' is invalid; expected '{expected}'")]
    InvalidToken {
        found: TokenKind,
        expected: TokenKind,
    },
    #[error("Terminal expression beginning with type '{0}' is invalid")]
    InvalidTerminal(TokenKind),
    #[error("Else branch must be the last branch")]
    EarlyElseBranch,
    #[error("Argument name must be first variable name")]
    InvalidArgumentName,
    #[error("Assignment target must be first variable name")]
    InvalidAssignmentTarget,
    #[error("The name '{0}' is reserved")]
    ReservedName(String),
    #[error("Parameter '{0}' cannot be both mutable and variadic")]
    MutableVariadic(String),
    #[error("Variadic parameter '{0}' must be the last parameter")]
    MisplacedVariadic(String),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            span,
            kind,
            context: None,
        }
    }

    #[cold]
    pub fn invalid_token(found: TokenKind, expected: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidToken { found, expected }, span)
    }

    #[cold]
    pub fn invalid_terminal(found: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidTerminal(found), span)
    }

    #[cold]
    pub fn early_else_branch(span: Span) -> Self {
        Self::new(ParseErrorKind::EarlyElseBranch, span)
    }

    #[cold]
    pub fn invalid_argument_name(span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidArgumentName, span)
    }

    #[cold]
    pub fn invalid_assignment_target(span: Span) -> Self {
        Self::new(ParseErrorKind::InvalidAssignmentTarget, span)
    }

    #[cold]
    pub fn reserved_name(name: &str, span: Span) -> Self {
        Self::new(ParseErrorKind::ReservedName(name.to_string()), span)
    }

    #[cold]
    pub fn mutable_variadic(name: &str, span: Span) -> Self {
        Self::new(ParseErrorKind::MutableVariadic(name.to_string()), span)
    }

    #[cold]
    pub fn misplaced_variadic(name: &str, span: Span) -> Self {
        Self::new(ParseErrorKind::MisplacedVariadic(name.to_string()), span)
    }

    /// Attach `context` unless a more specific one is already present.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let stage = match self.kind {
            ParseErrorKind::Lexical(_) => Stage::Lexer,
            _ => Stage::Parser,
        };
        Diagnostic::error(stage, self.to_string(), self.span)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(context) = self.context {
            write!(f, " while parsing {}", context.description())?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(ParseErrorKind::Lexical(err.kind), err.span)
    }
}

/// Construct being parsed, for "while parsing X" messages.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    Declaration,
    WhileLoop,
    DoLoop,
    Loop,
    ForLoop,
    Function,
    Class,
    Object,
    Enum,
    Arguments,
    List,
    Lambda,
    If,
    When,
    Try,
}

impl ErrorContext {
    /// Human-readable description, with article.
    pub fn description(self) -> &'static str {
        match self {
            Self::Declaration => "a declaration",
            Self::WhileLoop => "a while loop",
            Self::DoLoop => "a do loop",
            Self::Loop => "a loop",
            Self::ForLoop => "a for loop",
            Self::Function => "a function",
            Self::Class => "a class",
            Self::Object => "an object",
            Self::Enum => "an enum",
            Self::Arguments => "an argument list",
            Self::List => "a list",
            Self::Lambda => "a lambda",
            Self::If => "an if expression",
            Self::When => "a when expression",
            Self::Try => "a try expression",
        }
    }
}

/// A parse warning (non-fatal diagnostic).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParseWarning {
    /// A name that is exactly `_`.
    DiscardedName { span: Span },
    /// A name of two or more underscores only.
    VagueName { span: Span },
}

impl ParseWarning {
    pub fn span(&self) -> Span {
        match self {
            ParseWarning::DiscardedName { span } | ParseWarning::VagueName { span } => *span,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ParseWarning::DiscardedName { .. } => {
                "Variable name '_' is always discarded; consider renaming"
            }
            ParseWarning::VagueName { .. } => {
                "Variable names consisting of only underscores are vague; consider renaming"
            }
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::warning(Stage::Parser, self.message(), self.span())
    }
}

#[cfg(test)]
mod tests;
