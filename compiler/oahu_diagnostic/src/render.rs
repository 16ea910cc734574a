//! Box drawing for error messages.

/// Marker between a stage name and its message.
pub const ICON: &str = "✿";
/// Underline marker under an offending span.
pub const UNDERLINE: &str = "═";

const VERTICAL: char = '│';
const HORIZONTAL: char = '─';
const UP_LEFT: char = '╭';
const UP_RIGHT: char = '╮';
const DOWN_LEFT: char = '╰';
const DOWN_RIGHT: char = '╯';
const T_LEFT: char = '├';
const T_RIGHT: char = '┤';

/// Draw a rounded box around `message`.
///
/// Every line is padded to the widest one (in characters). Empty lines
/// become a horizontal divider. The result ends with a newline.
pub fn wrap_box(message: &str) -> String {
    let lines: Vec<&str> = message.lines().collect();

    let width = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);

    let horizontal: String = std::iter::repeat(HORIZONTAL).take(width + 2).collect();

    let mut out = String::new();
    out.push(UP_LEFT);
    out.push_str(&horizontal);
    out.push(UP_RIGHT);
    out.push('\n');

    for line in lines {
        if line.is_empty() {
            out.push(T_LEFT);
            out.push_str(&horizontal);
            out.push(T_RIGHT);
        } else {
            out.push(VERTICAL);
            out.push(' ');
            out.push_str(&pad_end(line, width));
            out.push(' ');
            out.push(VERTICAL);
        }
        out.push('\n');
    }

    out.push(DOWN_LEFT);
    out.push_str(&horizontal);
    out.push(DOWN_RIGHT);
    out.push('\n');
    out
}

/// Pad `s` with spaces to `width` characters.
pub fn pad_end(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + width - len);
    padded.push_str(s);
    padded.extend(std::iter::repeat(' ').take(width - len));
    padded
}
