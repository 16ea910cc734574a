use std::fmt;

use oahu_ir::{Source, Span};

use crate::render::{wrap_box, ICON, UNDERLINE};

/// Pipeline stage a diagnostic originated from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Stage {
    Lexer,
    Parser,
    Runtime,
    Linker,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Lexer => "Lexer",
            Stage::Parser => "Parser",
            Stage::Runtime => "Runtime",
            Stage::Linker => "Linker",
        })
    }
}

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A rendered-on-demand report from one pipeline stage.
///
/// Errors render as a box quoting the offending line; warnings render as a
/// single line. Position-less errors (link faults) render the header alone.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    pub severity: Severity,
    pub stage: Stage,
    /// Message without trailing punctuation.
    pub message: String,
    pub span: Option<Span>,
}

impl Diagnostic {
    /// Create an error diagnostic at a source position.
    pub fn error(stage: Stage, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Error,
            stage,
            message: message.into(),
            span: (!span.is_none()).then_some(span),
        }
    }

    /// Create an error diagnostic with no source position.
    pub fn standalone(stage: Stage, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            stage,
            message: message.into(),
            span: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(stage: Stage, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            stage,
            message: message.into(),
            span: (!span.is_none()).then_some(span),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Message terminated by a single `!`.
    fn exclaimed(&self) -> String {
        let message = self.message.trim_end_matches('!');
        format!("{message}!")
    }

    /// Render for display.
    ///
    /// `source` supplies the quoted line; without it (or for a position the
    /// source does not contain) only the header line is boxed.
    pub fn render(&self, source: Option<&Source>) -> String {
        match self.severity {
            Severity::Warning => self.render_warning(),
            Severity::Error => self.render_error(source),
        }
    }

    fn render_warning(&self) -> String {
        let location = self.span.map(|s| format!(" {s}")).unwrap_or_default();
        format!("Warning @ O'ahu {} -> {}{location}", self.stage, self.exclaimed())
    }

    fn render_error(&self, source: Option<&Source>) -> String {
        let header = format!("O'ahu {} Error {ICON} {}", self.stage, self.exclaimed());

        let quoted = self
            .span
            .and_then(|span| source.and_then(|s| s.line(span.row)).map(|line| (span, line)));

        let Some((span, line)) = quoted else {
            return wrap_box(&header);
        };

        let row = span.row.to_string();
        let spacing = " ".repeat(span.column as usize + row.len() + 1);
        let underline = UNDERLINE.repeat(span.length.max(1) as usize);

        wrap_box(&format!("{header}\n\n{row}| {line}\n{spacing}{underline}"))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

#[cfg(test)]
mod tests;
