use super::*;
use pretty_assertions::assert_eq;

use crate::errors::EvalErrorKind;

fn kind(result: Result<Value, EvalError>) -> EvalErrorKind {
    match result {
        Err(err) => err.kind,
        Ok(value) => panic!("expected an error, got {value}"),
    }
}

#[test]
fn test_whole_index() {
    assert_eq!(whole_index(2.0), Some(2));
    assert_eq!(whole_index(2.5), None);
    assert_eq!(whole_index(-1.0), None);
}

#[test]
fn test_list_index() {
    let list = Value::list(vec![Value::string("a"), Value::string("b")]);
    assert_eq!(index_value(&list, &Value::Number(1.0), Span::NONE), Ok(Value::string("b")));
    assert_eq!(
        kind(index_value(&list, &Value::Number(2.0), Span::NONE)),
        EvalErrorKind::IndexOutOfBounds {
            index: "2.0".into(),
            size: 2
        }
    );
    assert_eq!(
        kind(index_value(&list, &Value::Number(-1.0), Span::NONE)),
        EvalErrorKind::NegativeIndex
    );
    assert_eq!(
        kind(index_value(&list, &Value::Number(0.5), Span::NONE)),
        EvalErrorKind::InvalidIndex("0.5".into())
    );
}

#[test]
fn test_list_key() {
    let list = Value::list(vec![]);
    if let Value::List(table) = &list {
        table.set_key("k", Value::Bool(true));
    }
    assert_eq!(index_value(&list, &Value::string("k"), Span::NONE), Ok(Value::Bool(true)));
    assert_eq!(index_value(&list, &Value::string("missing"), Span::NONE), Ok(Value::Null));
}

#[test]
fn test_string_index() {
    let s = Value::string("héy");
    assert_eq!(index_value(&s, &Value::Number(1.0), Span::NONE), Ok(Value::string("é")));
}

#[test]
fn test_not_indexable() {
    assert_eq!(
        kind(index_value(&Value::Bool(true), &Value::Number(0.0), Span::NONE)),
        EvalErrorKind::NotIndexable("true".into())
    );
}
