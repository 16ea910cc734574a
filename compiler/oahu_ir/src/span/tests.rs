use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_range_to_same_row() {
    let start = Span::new(1, 5, 3);
    let end = Span::new(1, 12, 2);
    assert_eq!(start.range_to(end), Span::new(1, 5, 9));
}

#[test]
fn test_range_to_other_row_keeps_start() {
    let start = Span::new(1, 5, 3);
    let end = Span::new(2, 1, 4);
    assert_eq!(start.range_to(end), start);
}

#[test]
fn test_range_to_from_none() {
    let end = Span::new(3, 2, 1);
    assert_eq!(Span::NONE.range_to(end), end);
    assert_eq!(end.range_to(Span::NONE), end);
}

#[test]
fn test_display() {
    assert_eq!(Span::new(4, 7, 1).to_string(), "(4:7)");
    assert!(Span::NONE.is_none());
    assert!(!Span::point(1, 1).is_none());
}
