use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages() {
    assert_eq!(
        undefined_name("y", Span::NONE).to_string(),
        "Name 'y' has not been defined"
    );
    assert_eq!(
        invalid_left_operand(&Value::Bool(true), "ADD", Span::NONE).to_string(),
        "Left operand 'true' for binary ADD operator is invalid"
    );
    assert_eq!(
        index_out_of_bounds(&Value::Number(3.0), 2, Span::NONE).to_string(),
        "Index '3.0' is out of bounds for size '2'"
    );
    assert_eq!(
        unhandled_redirect("Break", Span::NONE).to_string(),
        "Break was not handled"
    );
}

#[test]
fn test_link_error_converts_without_span() {
    let err = EvalError::from(LinkError::MissingFunction(".nope".into()));
    assert!(err.is_link());
    assert!(err.span.is_none());
    assert_eq!(err.to_string(), "Link for function '.nope' is unavailable");
}

#[test]
fn test_or_span_keeps_existing_span() {
    let span = Span::new(1, 2, 3);
    let err = reassigned_constant(span).or_span(Span::new(9, 9, 1));
    assert_eq!(err.span, span);

    let err = EvalError::from(LinkError::MissingReceiver("List.pop".into())).or_span(span);
    assert_eq!(err.span, span);
}

#[test]
fn test_to_diagnostic_stage() {
    let runtime = negative_index(Span::new(1, 1, 1)).to_diagnostic();
    assert_eq!(runtime.stage, Stage::Runtime);
    assert!(runtime.span.is_some());

    let link = invalid_link_argument(&Value::Null, "String.split@separator").to_diagnostic();
    assert_eq!(link.stage, Stage::Linker);
    assert_eq!(link.span, None);
}
