use super::*;

/// Nesting depth of a string of balanced parentheses, computed recursively
/// the way the parser descends into grouped expressions.
fn depth(chars: &[u8]) -> (usize, &[u8]) {
    ensure_sufficient_stack(|| match chars.split_first() {
        Some((b'(', rest)) => {
            let (inner, rest) = depth(rest);
            let rest = rest.strip_prefix(b")").unwrap_or(rest);
            (inner + 1, rest)
        }
        _ => (0, chars),
    })
}

#[test]
fn test_shallow_nesting() {
    assert_eq!(depth(b"((()))").0, 3);
}

#[test]
fn test_deep_nesting_does_not_overflow() {
    let n = 200_000;
    let text = format!("{}{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(depth(text.as_bytes()).0, n);
}

#[test]
fn test_passes_results_through() {
    let result: Result<f64, String> = ensure_sufficient_stack(|| Ok(7.0));
    assert_eq!(result, Ok(7.0));
}
