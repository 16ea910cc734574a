//! Keyword resolution.
//!
//! Keywords match case-insensitively (`WHILE`, `While` and `while` are all
//! the same keyword). The literal words `true`, `false`, `null` and `unit`
//! are handled separately and are case-sensitive.

use oahu_ir::TokenKind;

/// Look up a keyword by text.
///
/// Uses length-bucketing for fast rejection: keywords are 2 to 8
/// characters long.
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    if !(2..=8).contains(&text.len()) || !text.is_ascii() {
        return None;
    }
    let lower = text.to_ascii_lowercase();

    match lower.len() {
        2 => match lower.as_str() {
            "or" => Some(TokenKind::Or),
            "if" => Some(TokenKind::If),
            "do" => Some(TokenKind::Do),
            _ => None,
        },
        3 => match lower.as_str() {
            "and" => Some(TokenKind::And),
            "let" => Some(TokenKind::Let),
            "var" => Some(TokenKind::Var),
            "mut" => Some(TokenKind::Mut),
            "fun" => Some(TokenKind::Fun),
            "for" => Some(TokenKind::For),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match lower.as_str() {
            "enum" => Some(TokenKind::Enum),
            "else" => Some(TokenKind::Else),
            "when" => Some(TokenKind::When),
            "loop" => Some(TokenKind::Loop),
            "exit" => Some(TokenKind::Exit),
            _ => None,
        },
        5 => match lower.as_str() {
            "class" => Some(TokenKind::Class),
            "while" => Some(TokenKind::While),
            "break" => Some(TokenKind::Break),
            "throw" => Some(TokenKind::Throw),
            "catch" => Some(TokenKind::Catch),
            _ => None,
        },
        6 => match lower.as_str() {
            "object" => Some(TokenKind::Object),
            "return" => Some(TokenKind::Return),
            _ => None,
        },
        7 => match lower.as_str() {
            "finally" => Some(TokenKind::Finally),
            _ => None,
        },
        8 => match lower.as_str() {
            "continue" => Some(TokenKind::Continue),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests;
