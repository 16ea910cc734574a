//! Escape sequences inside string literals.
//!
//! Valid escapes: `\\` `\"` `\0` `\b` `\n` `\r` `\t`, the hex codes
//! `\xHH` `\uHHHH` `\UHHHHHHHH`, and `\(NAME)` for a character by its
//! Unicode name.

use crate::cursor::Cursor;
use crate::lex_error::LexError;

/// Read one escape sequence; the cursor sits just past the backslash.
pub(crate) fn read_escape(cursor: &mut Cursor<'_>) -> Result<char, LexError> {
    let here = cursor.here();
    let Some(c) = cursor.current() else {
        return Err(LexError::early_end_of_file(here));
    };

    let simple = match c {
        '\\' => Some('\\'),
        '"' => Some('"'),
        '0' => Some('\0'),
        'b' => Some('\u{8}'),
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        _ => None,
    };
    if let Some(resolved) = simple {
        cursor.bump();
        return Ok(resolved);
    }

    match c {
        'x' => hex_code(cursor, 2),
        'u' => hex_code(cursor, 4),
        'U' => hex_code(cursor, 8),
        '(' => named(cursor),
        _ => Err(LexError::illegal_escape(c, here)),
    }
}

/// `\xHH`, `\uHHHH` or `\UHHHHHHHH`: exactly `size` hex digits.
fn hex_code(cursor: &mut Cursor<'_>, size: usize) -> Result<char, LexError> {
    cursor.bump();
    let start = cursor.here();

    let mut digits = String::with_capacity(size);
    for _ in 0..size {
        match cursor.bump() {
            Some(c) => digits.push(c),
            None => return Err(LexError::early_end_of_file(cursor.here())),
        }
    }

    let span = cursor.span_from(start);
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(LexError::invalid_unicode(digits, span));
    }
    u32::from_str_radix(&digits, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| LexError::invalid_unicode(digits, span))
}

/// `\(NAME)`: a character by Unicode name.
fn named(cursor: &mut Cursor<'_>) -> Result<char, LexError> {
    cursor.bump();
    let start = cursor.here();

    let mut name = String::new();
    cursor.take_while(&mut name, |c| c != ')');
    if !cursor.eat(')') {
        return Err(LexError::early_end_of_file(cursor.here()));
    }

    unicode_names2::character(&name)
        .ok_or_else(|| LexError::invalid_unicode(name, cursor.span_from(start)))
}

#[cfg(test)]
mod tests;
