use super::*;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

#[test]
fn test_arithmetic() {
    assert_eq!(evaluate_binary(&num(3.0), &num(4.0), BinaryOp::Add), Ok(num(7.0)));
    assert_eq!(evaluate_binary(&num(3.0), &num(4.0), BinaryOp::Subtract), Ok(num(-1.0)));
    assert_eq!(evaluate_binary(&num(7.0), &num(2.0), BinaryOp::Divide), Ok(num(3.5)));
    assert_eq!(evaluate_binary(&num(7.0), &num(4.0), BinaryOp::Modulus), Ok(num(3.0)));
}

#[test]
fn test_division_by_zero_is_infinite() {
    assert_eq!(
        evaluate_binary(&num(1.0), &num(0.0), BinaryOp::Divide),
        Ok(num(f64::INFINITY))
    );
}

#[test]
fn test_string_concatenation() {
    let s = Value::string("a");
    assert_eq!(evaluate_binary(&s, &num(1.0), BinaryOp::Add), Ok(Value::string("a1.0")));
    assert_eq!(evaluate_binary(&num(1.0), &s, BinaryOp::Add), Ok(Value::string("1.0a")));
    assert_eq!(evaluate_binary(&s, &s, BinaryOp::Add), Ok(Value::string("aa")));
    assert_eq!(evaluate_binary(&s, &Value::Null, BinaryOp::Add), Err(Operand::Right));
    assert_eq!(evaluate_binary(&Value::Null, &s, BinaryOp::Add), Err(Operand::Left));
}

#[test]
fn test_string_repetition() {
    let s = Value::string("ab");
    assert_eq!(evaluate_binary(&s, &num(3.0), BinaryOp::Multiply), Ok(Value::string("ababab")));
    assert_eq!(evaluate_binary(&s, &num(-2.0), BinaryOp::Multiply), Ok(Value::string("")));
    assert_eq!(evaluate_binary(&num(2.0), &s, BinaryOp::Multiply), Err(Operand::Right));
}

#[test]
fn test_comparison() {
    assert_eq!(evaluate_binary(&num(1.0), &num(2.0), BinaryOp::Less), Ok(Value::Bool(true)));
    assert_eq!(evaluate_binary(&num(2.0), &num(2.0), BinaryOp::GreaterEqual), Ok(Value::Bool(true)));
    assert_eq!(
        evaluate_binary(&Value::string("b"), &Value::string("a"), BinaryOp::Greater),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        evaluate_binary(&num(f64::NAN), &num(1.0), BinaryOp::LessEqual),
        Ok(Value::Bool(false))
    );
    assert_eq!(evaluate_binary(&num(1.0), &Value::string("a"), BinaryOp::Less), Err(Operand::Right));
    assert_eq!(evaluate_binary(&Value::Null, &num(1.0), BinaryOp::Less), Err(Operand::Left));
}

#[test]
fn test_equality_across_types() {
    assert_eq!(evaluate_binary(&num(1.0), &Value::string("1"), BinaryOp::Equal), Ok(Value::Bool(false)));
    assert_eq!(evaluate_binary(&Value::Null, &Value::Null, BinaryOp::NotEqual), Ok(Value::Bool(false)));
}

#[test]
fn test_logic_requires_booleans() {
    let t = Value::Bool(true);
    assert_eq!(evaluate_binary(&t, &Value::Bool(false), BinaryOp::Or), Ok(t.clone()));
    assert_eq!(evaluate_binary(&t, &num(1.0), BinaryOp::And), Err(Operand::Right));
    assert_eq!(evaluate_binary(&num(1.0), &t, BinaryOp::And), Err(Operand::Left));
}

#[test]
fn test_oversized_repetition_rejects_count() {
    let s = Value::string("ab");
    assert_eq!(evaluate_binary(&s, &num(1e19), BinaryOp::Multiply), Err(Operand::Right));
    assert_eq!(evaluate_binary(&s, &num(1e10), BinaryOp::Multiply), Err(Operand::Right));
    assert_eq!(
        evaluate_binary(&Value::string(""), &num(1e19), BinaryOp::Multiply),
        Ok(Value::string(""))
    );
}
