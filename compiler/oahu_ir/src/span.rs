//! Source location spans.
//!
//! Positions are line-oriented: a 1-based row and column plus the number of
//! characters covered. Row 0 is reserved for [`Span::NONE`], the position of
//! synthesized nodes.

use std::fmt;

/// Source location span.
///
/// Layout: 12 bytes total
/// - row: u32 - 1-based line number
/// - column: u32 - 1-based character column
/// - length: u32 - characters covered on the starting row
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub row: u32,
    pub column: u32,
    pub length: u32,
}

impl Span {
    /// Position of synthesized nodes.
    pub const NONE: Span = Span {
        row: 0,
        column: 0,
        length: 0,
    };

    /// Create a new span.
    #[inline]
    pub const fn new(row: u32, column: u32, length: u32) -> Self {
        Span {
            row,
            column,
            length,
        }
    }

    /// Single-character span.
    #[inline]
    pub const fn point(row: u32, column: u32) -> Self {
        Span::new(row, column, 1)
    }

    /// Check whether this is the synthesized-node sentinel.
    #[inline]
    pub const fn is_none(self) -> bool {
        self.row == 0
    }

    /// Combine this span with a later one.
    ///
    /// On a single row the result covers everything from this span's start
    /// through the end of `end`. Spans crossing rows keep the start span's
    /// length, since the underline only ever covers one line.
    #[inline]
    #[must_use]
    pub fn range_to(self, end: Span) -> Span {
        if self.is_none() {
            return end;
        }
        if end.is_none() || end.row != self.row || end.column < self.column {
            return self;
        }
        Span {
            row: self.row,
            column: self.column,
            length: (end.column + end.length - self.column).max(self.length),
        }
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}+{}", self.row, self.column, self.length)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}:{})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests;
