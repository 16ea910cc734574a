//! Floating-style number display.
//!
//! Every number is an `f64` and always shows a fractional part. Magnitudes
//! in `[1e-3, 1e7)` print in plain notation (`7.0`, `0.25`); anything
//! else prints in scientific notation with an upper-case marker (`1.0E10`,
//! `1.5E-5`).

const PLAIN_MIN: f64 = 1e-3;
const PLAIN_MAX: f64 = 1e7;

/// Render `n` the way the language displays numbers.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = n.abs();
    if magnitude == 0.0 || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return with_fraction(n.to_string());
    }

    let scientific = format!("{n:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => format!("{}E{exponent}", with_fraction(mantissa.to_string())),
        None => with_fraction(scientific),
    }
}

/// Render `n` without the fractional part when it is integral.
///
/// Used by `Number.toString()`, where `3` reads better than `3.0`.
pub fn format_truncated(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < PLAIN_MAX {
        format!("{n:.0}")
    } else {
        format_number(n)
    }
}

fn with_fraction(mut digits: String) -> String {
    if !digits.contains('.') {
        digits.push_str(".0");
    }
    digits
}

#[cfg(test)]
mod tests;
