//! Builder for configuring an [`Interpreter`].

use oahu_diagnostic::Diagnostic;
use oahu_ir::SharedInterner;

use super::Interpreter;
use crate::environment::{Environment, PrimitiveCache};
use crate::linker::{Link, Linker};
use crate::print_handler::{stdout_handler, SharedPrintHandler};

/// Builder for creating [`Interpreter`] instances.
///
/// By default output goes to stdout and the `core` link is imported, which
/// runs its prelude before any user code.
pub struct InterpreterBuilder {
    interner: SharedInterner,
    print_handler: Option<SharedPrintHandler>,
    links: Vec<Box<dyn Link>>,
    prelude: bool,
}

impl InterpreterBuilder {
    pub fn new(interner: SharedInterner) -> Self {
        InterpreterBuilder {
            interner,
            print_handler: None,
            links: Vec::new(),
            prelude: true,
        }
    }

    /// Route `print` and `println` output through `handler`.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Make an extra link available and import it after `core`.
    #[must_use]
    pub fn link(mut self, link: Box<dyn Link>) -> Self {
        self.links.push(link);
        self
    }

    /// Whether to import the `core` link. Without it primitives have no
    /// members and none of the global natives are defined.
    #[must_use]
    pub fn prelude(mut self, prelude: bool) -> Self {
        self.prelude = prelude;
        self
    }

    /// Build the interpreter and run the preludes of its links.
    pub fn build(self) -> Result<Interpreter, Diagnostic> {
        let mut interpreter = Interpreter {
            interner: self.interner,
            env: Environment::new(),
            linker: Linker::new(),
            primitives: PrimitiveCache::default(),
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            warnings: Vec::new(),
        };

        if self.prelude {
            interpreter.import_link("core")?;
        }
        for link in self.links {
            let name = link.name();
            interpreter.linker.add_link(link);
            interpreter.import_link(name)?;
        }
        Ok(interpreter)
    }
}
