//! CLI commands.

mod repl;
mod run;

pub use repl::{repl, BANNER, PROMPT};
pub use run::{run_file, run_source};
