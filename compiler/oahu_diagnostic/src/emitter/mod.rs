//! Diagnostic Emitters
//!
//! Writes rendered diagnostics to an output stream. Errors are boxed and
//! quote the offending line from the source they were reported against.

use std::io::{self, Write};

use oahu_ir::Source;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic, source: Option<&Source>);

    /// Emit multiple diagnostics against the same source.
    fn emit_all(&mut self, diagnostics: &[Diagnostic], source: Option<&Source>) {
        for diag in diagnostics {
            self.emit(diag, source);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Emitter writing boxed errors and one-line warnings.
pub struct BoxEmitter<W: Write> {
    writer: W,
}

impl<W: Write> BoxEmitter<W> {
    pub fn new(writer: W) -> Self {
        BoxEmitter { writer }
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl BoxEmitter<io::Stderr> {
    /// Emitter for stderr.
    pub fn stderr() -> Self {
        BoxEmitter::new(io::stderr())
    }
}

impl<W: Write> DiagnosticEmitter for BoxEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: Option<&Source>) {
        // Output failures on the diagnostic stream are not reportable anywhere.
        let _ = writeln!(self.writer, "{}", diagnostic.render(source).trim_end());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
