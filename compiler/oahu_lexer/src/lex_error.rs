//! Lexer error types.

use oahu_diagnostic::{Diagnostic, Stage};
use oahu_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexErrorKind {
    /// Input ended inside a string or block comment.
    #[error("Reached end of file early")]
    EarlyEndOfFile,
    /// A character that starts no token.
    #[error("Character '{0}' is illegal")]
    IllegalCharacter(char),
    /// `\` followed by a character with no escape meaning.
    #[error("Character escape '\\{0}' is illegal")]
    IllegalEscape(char),
    /// Numeric literal text that does not parse.
    #[error("Number '{0}' is invalid")]
    InvalidNumber(String),
    /// Malformed `\x`/`\u`/`\U` hex code or unknown `\(NAME)`.
    #[error("Unicode hexcode '{0}' is invalid")]
    InvalidUnicode(String),
}

impl LexError {
    #[cold]
    pub fn early_end_of_file(span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::EarlyEndOfFile,
        }
    }

    #[cold]
    pub fn illegal_character(c: char, span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::IllegalCharacter(c),
        }
    }

    #[cold]
    pub fn illegal_escape(c: char, span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::IllegalEscape(c),
        }
    }

    #[cold]
    pub fn invalid_number(text: impl Into<String>, span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidNumber(text.into()),
        }
    }

    #[cold]
    pub fn invalid_unicode(text: impl Into<String>, span: Span) -> Self {
        LexError {
            span,
            kind: LexErrorKind::InvalidUnicode(text.into()),
        }
    }

    /// Convert into a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(Stage::Lexer, self.kind.to_string(), self.span)
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}
