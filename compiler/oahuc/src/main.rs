//! O'ahu interpreter CLI.
//!
//! `oahu` starts the REPL; `oahu <file>` runs a file.

use std::io;
use std::path::Path;

use oahu_diagnostic::BoxEmitter;
use oahuc::commands::{repl, run_file};
use oahuc::{init_tracing, RunConfig};

fn print_usage() {
    eprintln!("Usage: oahu [--no-prelude] [file.oahu]");
    eprintln!();
    eprintln!("With no file, starts an interactive session.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-prelude   Do not import the core link");
    eprintln!("  -h, --help     Show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG       Log filter, e.g. RUST_LOG=oahu_eval=debug");
    eprintln!("  OAHU_LOG_TREE  Print logs as an indented span tree");
}

fn main() {
    init_tracing();

    let mut config = RunConfig::default();
    let mut file = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage();
                return;
            }
            "--no-prelude" => config = config.with_prelude(false),
            _ if arg.starts_with('-') || file.is_some() => {
                print_usage();
                std::process::exit(1);
            }
            _ => file = Some(arg),
        }
    }

    let mut emitter = BoxEmitter::stderr();

    match file {
        Some(path) => {
            let code = run_file(Path::new(&path), &config, &mut emitter);
            std::process::exit(code);
        }
        None => {
            let stdin = io::stdin();
            if let Err(err) = repl(&config, stdin.lock(), io::stdout(), &mut emitter) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
    }
}
