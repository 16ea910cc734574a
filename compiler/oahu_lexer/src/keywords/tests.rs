use super::*;
use pretty_assertions::assert_eq;

#[test]
fn every_keyword_resolves() {
    let cases = [
        ("and", TokenKind::And),
        ("or", TokenKind::Or),
        ("let", TokenKind::Let),
        ("var", TokenKind::Var),
        ("mut", TokenKind::Mut),
        ("fun", TokenKind::Fun),
        ("class", TokenKind::Class),
        ("object", TokenKind::Object),
        ("enum", TokenKind::Enum),
        ("if", TokenKind::If),
        ("else", TokenKind::Else),
        ("when", TokenKind::When),
        ("for", TokenKind::For),
        ("while", TokenKind::While),
        ("do", TokenKind::Do),
        ("loop", TokenKind::Loop),
        ("break", TokenKind::Break),
        ("continue", TokenKind::Continue),
        ("return", TokenKind::Return),
        ("throw", TokenKind::Throw),
        ("try", TokenKind::Try),
        ("catch", TokenKind::Catch),
        ("finally", TokenKind::Finally),
        ("exit", TokenKind::Exit),
    ];
    for (text, kind) in cases {
        assert_eq!(lookup(text), Some(kind.clone()), "{text}");
        assert_eq!(lookup(&text.to_uppercase()), Some(kind));
    }
}

#[test]
fn keywords_ignore_case() {
    assert_eq!(lookup("WHILE"), Some(TokenKind::While));
    assert_eq!(lookup("Fun"), Some(TokenKind::Fun));
    assert_eq!(lookup("cOnTiNuE"), Some(TokenKind::Continue));
}

#[test]
fn non_keywords_are_rejected() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("whiles"), None);
    assert_eq!(lookup("continued"), None);
    assert_eq!(lookup("true"), None);
    assert_eq!(lookup("ünd"), None);
}
