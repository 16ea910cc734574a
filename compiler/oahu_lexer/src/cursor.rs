//! Character cursor with row/column tracking.
//!
//! The cursor walks the source one `char` at a time. A newline moves to
//! column 1 of the next row; every other character advances the column by
//! one. Comment bodies are skipped with `memchr` rather than char by char.

use memchr::{memchr, memmem};
use oahu_ir::Span;

/// Cursor over source text.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the current character.
    pos: usize,
    row: u32,
    column: u32,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor {
            src,
            pos: 0,
            row: 1,
            column: 1,
        }
    }

    /// The current character, or `None` at the end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character `n` positions past the current one.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Single-character span at the current position.
    #[inline]
    pub fn here(&self) -> Span {
        Span::point(self.row, self.column)
    }

    /// Span from `start` up to (not including) the current position.
    ///
    /// Tokens never cross rows except a newline itself, which keeps the
    /// start span.
    pub fn span_from(&self, start: Span) -> Span {
        if self.row == start.row && self.column > start.column {
            Span::new(start.row, start.column, self.column - start.column)
        } else {
            start
        }
    }

    /// Consume one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.current()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.row += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Consume the current character if it equals `c`.
    #[inline]
    pub fn eat(&mut self, c: char) -> bool {
        if self.current() == Some(c) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the input starts with it.
    pub fn eat_str(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            for _ in s.chars() {
                self.bump();
            }
            true
        } else {
            false
        }
    }

    /// Consume characters while `pred` holds, appending them to `out`.
    pub fn take_while(&mut self, out: &mut String, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            out.push(c);
            self.bump();
        }
    }

    /// Skip to the next newline without consuming it.
    pub fn skip_line(&mut self) {
        let rest = self.rest();
        let end = memchr(b'\n', rest.as_bytes()).unwrap_or(rest.len());
        self.advance_same_row(end);
    }

    /// Skip through the next `terminator`, returning `false` if input ends first.
    pub fn skip_through(&mut self, terminator: &str) -> bool {
        let rest = self.rest();
        match memmem::find(rest.as_bytes(), terminator.as_bytes()) {
            Some(offset) => {
                self.advance_counting(offset + terminator.len());
                true
            }
            None => {
                self.advance_counting(rest.len());
                false
            }
        }
    }

    /// Advance `bytes` known to contain no newline.
    fn advance_same_row(&mut self, bytes: usize) {
        let skipped = &self.src[self.pos..self.pos + bytes];
        self.column += count_chars(skipped);
        self.pos += bytes;
    }

    /// Advance `bytes`, counting rows crossed on the way.
    fn advance_counting(&mut self, bytes: usize) {
        let skipped = &self.src[self.pos..self.pos + bytes];
        match skipped.rfind('\n') {
            Some(last) => {
                self.row += count_u32(skipped.matches('\n').count());
                self.column = 1 + count_chars(&skipped[last + 1..]);
            }
            None => self.column += count_chars(skipped),
        }
        self.pos += bytes;
    }
}

#[inline]
fn count_chars(s: &str) -> u32 {
    count_u32(s.chars().count())
}

#[inline]
fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
