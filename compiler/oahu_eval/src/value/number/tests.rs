use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_plain_range_shows_fraction() {
    assert_eq!(format_number(7.0), "7.0");
    assert_eq!(format_number(0.25), "0.25");
    assert_eq!(format_number(-12.5), "-12.5");
    assert_eq!(format_number(0.001), "0.001");
    assert_eq!(format_number(9_999_999.0), "9999999.0");
}

#[test]
fn test_zero() {
    assert_eq!(format_number(0.0), "0.0");
    assert_eq!(format_number(-0.0), "-0.0");
}

#[test]
fn test_scientific_outside_range() {
    assert_eq!(format_number(1e7), "1.0E7");
    assert_eq!(format_number(1e10), "1.0E10");
    assert_eq!(format_number(1.5e-5), "1.5E-5");
    assert_eq!(format_number(-2.5e12), "-2.5E12");
}

#[test]
fn test_non_finite() {
    assert_eq!(format_number(f64::NAN), "NaN");
    assert_eq!(format_number(f64::INFINITY), "Infinity");
    assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
}

#[test]
fn test_truncated() {
    assert_eq!(format_truncated(3.0), "3");
    assert_eq!(format_truncated(-4.0), "-4");
    assert_eq!(format_truncated(3.5), "3.5");
    assert_eq!(format_truncated(1e10), "1.0E10");
}
