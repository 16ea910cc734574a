use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_display() {
    assert_eq!(Value::Unit.to_string(), "unit");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Number(7.0).to_string(), "7.0");
    assert_eq!(Value::string("hi").to_string(), "hi");
    assert_eq!(
        Value::list(vec![Value::Number(1.0), Value::string("a"), Value::list(vec![])]).to_string(),
        "[1.0, a, []]"
    );
}

#[test]
fn test_lists_compare_by_contents() {
    let a = Value::list(vec![Value::Number(1.0), Value::Bool(true)]);
    let b = Value::list(vec![Value::Number(1.0), Value::Bool(true)]);
    assert_eq!(a, b);
    assert_ne!(a, Value::list(vec![Value::Number(1.0)]));
}

#[test]
fn test_clones_share_tables() {
    let a = Value::list(vec![]);
    let b = a.clone();
    if let Value::List(table) = &a {
        table.push(Value::Number(2.0));
    }
    assert_eq!(b.to_string(), "[2.0]");
}

#[test]
fn test_nan_is_not_equal_to_itself() {
    assert_ne!(Value::Number(f64::NAN), Value::Number(f64::NAN));
}

#[test]
fn test_spread() {
    assert_eq!(
        Value::string("ab").spread(),
        Some(vec![Value::string("a"), Value::string("b")])
    );
    assert_eq!(
        Value::list(vec![Value::Null]).spread(),
        Some(vec![Value::Null])
    );
    assert_eq!(Value::Number(1.0).spread(), None);
}

#[test]
fn test_from_literal() {
    assert_eq!(Value::from(&Literal::Number(2.5)), Value::Number(2.5));
    assert_eq!(Value::from(&Literal::String("x".into())), Value::string("x"));
    assert!(Value::from(&Literal::Unit).is_unit());
}

#[test]
fn test_table_keys_and_elements() {
    let table = Table::from_list(vec![Value::Number(1.0)]);
    table.set_key("name", Value::string("oahu"));
    assert_eq!(table.len(), 1);
    assert_eq!(table.key("name"), Some(Value::string("oahu")));
    assert!(table.set(0, Value::Null));
    assert!(!table.set(5, Value::Null));
    assert_eq!(table.pop(), Some(Value::Null));
    assert!(table.is_empty());
    assert_eq!(table.pop(), None);
}

#[test]
fn test_self_containing_list_displays_placeholder() {
    let table = Table::from_list(vec![Value::Number(1.0)]);
    table.push(Value::List(table.clone()));
    assert_eq!(Value::List(table).to_string(), "[1.0, (this Collection)]");
}

#[test]
fn test_cyclic_lists_compare_without_looping() {
    let a = Table::from_list(vec![Value::Number(1.0)]);
    a.push(Value::List(a.clone()));
    let b = Table::from_list(vec![Value::Number(1.0)]);
    b.push(Value::List(b.clone()));
    assert_eq!(Value::List(a.clone()), Value::List(b));

    let c = Table::from_list(vec![Value::Number(2.0)]);
    c.push(Value::List(c.clone()));
    assert_ne!(Value::List(a), Value::List(c));
}
