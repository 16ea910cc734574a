//! File mode: run one source file to completion.

use std::path::Path;

use oahu_diagnostic::DiagnosticEmitter;
use oahu_ir::Source;
use tracing::debug;

use crate::RunConfig;

/// Run the file at `path`, returning the process exit code.
///
/// Errors and warnings go to `emitter`. An error exits with 1; `exit n`
/// exits with `n`.
pub fn run_file(path: &Path, config: &RunConfig, emitter: &mut impl DiagnosticEmitter) -> i32 {
    match Source::from_file(path) {
        Ok(source) => run_source(&source, config, emitter),
        Err(err) => {
            eprintln!("error: could not read '{}': {err}", path.display());
            1
        }
    }
}

/// Run `source` in a fresh interpreter, returning the process exit code.
pub fn run_source(source: &Source, config: &RunConfig, emitter: &mut impl DiagnosticEmitter) -> i32 {
    let mut interpreter = match config.interpreter() {
        Ok(interpreter) => interpreter,
        Err(diagnostic) => {
            emitter.emit(&diagnostic, None);
            emitter.flush();
            return 1;
        }
    };

    debug!(file = source.name(), "running");
    let result = interpreter.run_source(source);
    emitter.emit_all(&interpreter.take_warnings(), Some(source));

    let code = match result {
        Ok(result) => result.exit_code().unwrap_or(0),
        Err(diagnostic) => {
            emitter.emit(&diagnostic, Some(source));
            1
        }
    };

    interpreter.close();
    emitter.flush();
    code
}
