use super::*;
use crate::lex_error::LexErrorKind;
use pretty_assertions::assert_eq;

fn escape(text: &str) -> Result<char, LexError> {
    let mut cursor = Cursor::new(text);
    read_escape(&mut cursor)
}

#[test]
fn simple_escapes() {
    let cases = [
        ("\\", '\\'),
        ("\"", '"'),
        ("0", '\0'),
        ("b", '\u{8}'),
        ("n", '\n'),
        ("r", '\r'),
        ("t", '\t'),
    ];
    for (text, expected) in cases {
        assert_eq!(escape(text), Ok(expected), "\\{text}");
    }
}

#[test]
fn hex_escapes() {
    assert_eq!(escape("x41"), Ok('A'));
    assert_eq!(escape("u00e9"), Ok('é'));
    assert_eq!(escape("U0001F600"), Ok('😀'));
}

#[test]
fn named_escape() {
    assert_eq!(escape("(BLACK FLORETTE)"), Ok('✿'));
    assert_eq!(escape("(LATIN SMALL LETTER A)"), Ok('a'));
}

#[test]
fn unknown_name_is_invalid_unicode() {
    let err = escape("(NOT A REAL CHARACTER NAME)").unwrap_err();
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidUnicode("NOT A REAL CHARACTER NAME".into())
    );
}

#[test]
fn malformed_hex_is_invalid_unicode() {
    let err = escape("xZZ").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidUnicode("ZZ".into()));
    let err = escape("UFFFFFFFF").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::InvalidUnicode("FFFFFFFF".into()));
}

#[test]
fn illegal_escape_reports_character() {
    let err = escape("q").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::IllegalEscape('q'));
    assert_eq!(err.kind.to_string(), "Character escape '\\q' is illegal");
}

#[test]
fn truncated_escapes_reach_end_of_file() {
    assert_eq!(escape("").unwrap_err().kind, LexErrorKind::EarlyEndOfFile);
    assert_eq!(escape("u12").unwrap_err().kind, LexErrorKind::EarlyEndOfFile);
    assert_eq!(escape("(SPACE").unwrap_err().kind, LexErrorKind::EarlyEndOfFile);
}
