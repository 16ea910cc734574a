use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_render_error_with_line() {
    let source = Source::new("test.oahu", "x + y");
    let diag = Diagnostic::error(
        Stage::Runtime,
        "Name 'y' has not been defined",
        Span::new(1, 5, 1),
    );

    let expected = "\
╭──────────────────────────────────────────────────────╮
│ O'ahu Runtime Error ✿ Name 'y' has not been defined! │
├──────────────────────────────────────────────────────┤
│ 1| x + y                                             │
│        ═                                             │
╰──────────────────────────────────────────────────────╯
";
    assert_eq!(diag.render(Some(&source)), expected);
}

#[test]
fn test_render_underline_spacing_grows_with_row_digits() {
    let text = format!("{}ab", "\n".repeat(11));
    let source = Source::new("t", text);
    let diag = Diagnostic::error(Stage::Lexer, "Character '$' is illegal", Span::new(12, 2, 1));
    let rendered = diag.render(Some(&source));
    // "12| ab": `b` sits after 4 prefix characters plus one column.
    assert!(rendered.contains("│ 12| ab"));
    assert!(rendered.contains(&format!("│ {}═", " ".repeat(5))));
}

#[test]
fn test_render_standalone_is_header_only() {
    let diag = Diagnostic::standalone(Stage::Linker, "Link for function '.nope' is unavailable");
    let rendered = diag.render(None);
    assert_eq!(rendered.lines().count(), 3);
    assert!(rendered.contains("│ O'ahu Linker Error ✿ Link for function '.nope' is unavailable! │"));
    assert!(rendered.starts_with('╭'));
}

#[test]
fn test_trailing_exclamation_not_doubled() {
    let diag = Diagnostic::standalone(Stage::Linker, "Index cannot be negative!");
    assert!(diag.render(None).contains("negative! │"));
    assert!(!diag.render(None).contains("!!"));
}

#[test]
fn test_render_warning() {
    let diag = Diagnostic::warning(
        Stage::Parser,
        "Variable name '_' is always discarded; consider renaming",
        Span::new(2, 5, 1),
    );
    assert_eq!(
        diag.render(None),
        "Warning @ O'ahu Parser -> Variable name '_' is always discarded; consider renaming! (2:5)"
    );
    assert!(!diag.is_error());
}

#[test]
fn test_none_span_drops_position() {
    let diag = Diagnostic::error(Stage::Runtime, "boom", Span::NONE);
    assert_eq!(diag.span, None);
}
