use super::*;
use oahu_diagnostic::Severity;
use pretty_assertions::assert_eq;

#[test]
fn context_is_appended_to_message() {
    let err = ParseError::invalid_token(TokenKind::RParen, TokenKind::Eq, Span::new(1, 7, 1))
        .in_context(ErrorContext::Declaration);
    assert_eq!(
        err.to_string(),
        "Token type ')' is invalid; expected '=' while parsing a declaration"
    );
}

#[test]
fn innermost_context_wins() {
    let err = ParseError::early_else_branch(Span::new(3, 1, 4))
        .in_context(ErrorContext::When)
        .in_context(ErrorContext::Function);
    assert_eq!(err.context, Some(ErrorContext::When));
}

#[test]
fn lexical_errors_render_under_lexer_stage() {
    let err = ParseError::from(LexError::illegal_character('$', Span::point(2, 4)));
    let diag = err.to_diagnostic();
    assert_eq!(diag.stage, Stage::Lexer);
    assert_eq!(diag.message, "Character '$' is illegal");
    assert_eq!(diag.span, Some(Span::point(2, 4)));
}

#[test]
fn parse_errors_render_under_parser_stage() {
    let diag = ParseError::reserved_name("this", Span::new(1, 5, 4)).to_diagnostic();
    assert_eq!(diag.stage, Stage::Parser);
    assert_eq!(diag.message, "The name 'this' is reserved");
}

#[test]
fn warnings_become_warning_diagnostics() {
    let diag = ParseWarning::VagueName {
        span: Span::new(1, 5, 2),
    }
    .to_diagnostic();
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(
        diag.message,
        "Variable names consisting of only underscores are vague; consider renaming"
    );
}
