//! Interactive mode.

use std::io::{self, BufRead, Write};

use oahu_diagnostic::DiagnosticEmitter;
use oahu_ir::Source;

use crate::RunConfig;

pub const BANNER: &str = r"  ____  _       _    _ _    _
 / __ \ \|/\   | |  | | |  | |      /\
| |  | | /  \  | |__| | |  | | ____/  \_
| |  | |/ /\ \ |  __  | |  | |\         |
| |__| / ____ \| |  | | |__| | \         \/|
 \____/_/    \_\_|  |_|\____/   \___/\__   \
                                        \___\
      Copyright (C) 2019, KakkoiiChris
";

pub const PROMPT: &str = "O'ahu ✿ ";

/// Read-eval-print loop over `input`.
///
/// One interpreter serves the whole session, so definitions persist from
/// line to line. A blank line or end of input ends the session. Results are
/// written to `output`; errors and warnings go to `emitter` and never end
/// the session.
pub fn repl(
    config: &RunConfig,
    mut input: impl BufRead,
    mut output: impl Write,
    emitter: &mut impl DiagnosticEmitter,
) -> io::Result<()> {
    let mut interpreter = match config.interpreter() {
        Ok(interpreter) => interpreter,
        Err(diagnostic) => {
            emitter.emit(&diagnostic, None);
            emitter.flush();
            return Ok(());
        }
    };

    writeln!(output, "{BANNER}")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
            break;
        }

        let source = Source::repl(line.trim_end_matches(['\r', '\n']));
        let result = interpreter.run_source(&source);
        emitter.emit_all(&interpreter.take_warnings(), Some(&source));

        match result {
            Ok(result) => writeln!(output, "{}", result.repr())?,
            Err(diagnostic) => emitter.emit(&diagnostic, Some(&source)),
        }
        emitter.flush();
    }

    interpreter.close();
    Ok(())
}
