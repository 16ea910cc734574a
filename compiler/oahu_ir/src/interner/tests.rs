use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_intern_is_stable() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "counter");
}

#[test]
fn test_reserved_names_are_preinterned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern("this"), Name::THIS);
    assert_eq!(interner.intern("base"), Name::BASE);
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::ORDINAL), "ordinal");
    assert!(Name::THIS.is_reserved());
    assert!(!interner.intern("thus").is_reserved());
}

#[test]
fn test_get_does_not_intern() {
    let interner = StringInterner::new();
    let before = interner.len();
    assert_eq!(interner.get("missing"), None);
    assert_eq!(interner.len(), before);
}

#[test]
fn test_shared_interner_clones_share_table() {
    let shared = SharedInterner::new();
    let other = shared.clone();
    let name = shared.intern("x");
    assert_eq!(other.lookup(name), "x");
}
