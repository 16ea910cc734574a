//! Run configuration shared by file mode and the REPL.

use oahu_diagnostic::Diagnostic;
use oahu_eval::{stdout_handler, Interpreter, SharedPrintHandler};
use oahu_ir::SharedInterner;

/// How to build the interpreter for a run.
#[derive(Clone)]
pub struct RunConfig {
    /// Import the `core` link before running user code.
    pub prelude: bool,
    /// Where `print` and `println` write.
    pub output: SharedPrintHandler,
}

impl RunConfig {
    #[must_use]
    pub fn with_output(mut self, output: SharedPrintHandler) -> Self {
        self.output = output;
        self
    }

    #[must_use]
    pub fn with_prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }

    /// A fresh interpreter with this configuration.
    pub fn interpreter(&self) -> Result<Interpreter, Diagnostic> {
        Interpreter::builder(SharedInterner::new())
            .print_handler(self.output.clone())
            .prelude(self.prelude)
            .build()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            prelude: true,
            output: stdout_handler(),
        }
    }
}
