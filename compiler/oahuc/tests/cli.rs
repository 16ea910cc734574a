//! End-to-end tests through the CLI commands.

use std::io::Cursor;

use oahu_diagnostic::BoxEmitter;
use oahu_eval::buffer_handler;
use oahu_ir::Source;
use oahuc::commands::{repl, run_source, BANNER, PROMPT};
use oahuc::RunConfig;
use pretty_assertions::assert_eq;

/// Run `text` in file mode: (exit code, program output, stderr text).
fn run_file_mode(text: &str) -> (i32, String, String) {
    let output = buffer_handler();
    let config = RunConfig::default().with_output(output.clone());
    let mut emitter = BoxEmitter::new(Vec::new());
    let code = run_source(&Source::new("test.oahu", text), &config, &mut emitter);
    let errors = String::from_utf8_lossy(&emitter.into_inner()).into_owned();
    (code, output.output(), errors)
}

/// Feed `lines` to the REPL: (stdout text, stderr text).
fn run_repl(lines: &str) -> (String, String) {
    let config = RunConfig::default().with_output(buffer_handler());
    let mut stdout = Vec::new();
    let mut emitter = BoxEmitter::new(Vec::new());
    let outcome = repl(&config, Cursor::new(lines.to_string()), &mut stdout, &mut emitter);
    assert!(outcome.is_ok());
    (
        String::from_utf8_lossy(&stdout).into_owned(),
        String::from_utf8_lossy(&emitter.into_inner()).into_owned(),
    )
}

#[test]
fn test_file_runs_to_completion() {
    let (code, output, errors) = run_file_mode("let name = \"world\"\nprintln(\"hello \" + name)");
    assert_eq!(code, 0);
    assert_eq!(output, "hello world\n");
    assert_eq!(errors, "");
}

#[test]
fn test_file_error_exits_with_one() {
    let (code, output, errors) = run_file_mode("println(1)\nx + y");
    assert_eq!(code, 1);
    assert_eq!(output, "1.0\n");
    let expected = "\
╭──────────────────────────────────────────────────────╮
│ O'ahu Runtime Error ✿ Name 'x' has not been defined! │
├──────────────────────────────────────────────────────┤
│ 2| x + y                                             │
│    ═                                                 │
╰──────────────────────────────────────────────────────╯
";
    assert_eq!(errors, expected);
}

#[test]
fn test_exit_code() {
    let (code, _, _) = run_file_mode("exit 7\nprintln(\"unreachable\")");
    assert_eq!(code, 7);
}

#[test]
fn test_lex_error_is_reported() {
    let (code, _, errors) = run_file_mode("let x = 1 $ 2");
    assert_eq!(code, 1);
    assert!(errors.contains("O'ahu Lexer Error ✿"));
}

#[test]
fn test_warnings_do_not_fail_the_run() {
    let (code, _, errors) = run_file_mode("let _ = 1");
    assert_eq!(code, 0);
    assert!(errors.starts_with("Warning @ O'ahu Parser -> "));
    assert!(errors.trim_end().ends_with("(1:5)"));
}

#[test]
fn test_linker_errors_are_header_only() {
    let (code, _, errors) = run_file_mode("fun @missing()");
    assert_eq!(code, 1);
    assert_eq!(errors.lines().count(), 3);
    assert!(errors.contains("O'ahu Linker Error ✿ Link for function '.missing' is unavailable!"));
}

#[test]
fn test_no_prelude() {
    let config = RunConfig::default()
        .with_output(buffer_handler())
        .with_prelude(false);
    let mut emitter = BoxEmitter::new(Vec::new());
    let code = run_source(&Source::new("t", "println(1)"), &config, &mut emitter);
    assert_eq!(code, 1);
}

#[test]
fn test_repl_keeps_definitions() {
    let (stdout, stderr) = run_repl("let x = 2\nx * 21\n\nignored\n");
    let expected = format!("{BANNER}\n{PROMPT}unit\n{PROMPT}42.0\n{PROMPT}");
    assert_eq!(stdout, expected);
    assert_eq!(stderr, "");
}

#[test]
fn test_repl_survives_errors() {
    let (stdout, stderr) = run_repl("missing\n1 + 1\n");
    assert!(stderr.contains("Name 'missing' has not been defined!"));
    assert!(stdout.ends_with(&format!("{PROMPT}2.0\n{PROMPT}")));
}

#[test]
fn test_repl_ends_at_end_of_input() {
    let (stdout, _) = run_repl("");
    assert_eq!(stdout, format!("{BANNER}\n{PROMPT}"));
}
