//! Interned string identifier.

use std::fmt;

/// Interned string identifier.
///
/// A plain index into the [`StringInterner`](crate::StringInterner) table.
/// The first few indices are reserved for names the interpreter itself
/// needs, so they can be compared without an interner at hand.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string (anonymous functions).
    pub const EMPTY: Name = Name(0);
    /// Pre-interned `this`.
    pub const THIS: Name = Name(1);
    /// Pre-interned `base`.
    pub const BASE: Name = Name(2);
    /// Pre-interned `name` (enum entry member).
    pub const NAME: Name = Name(3);
    /// Pre-interned `ordinal` (enum entry member).
    pub const ORDINAL: Name = Name(4);

    /// Strings interned at construction, in index order.
    pub(crate) const PRE_INTERNED: [&'static str; 5] = ["", "this", "base", "name", "ordinal"];

    #[inline]
    pub(crate) const fn new(index: u32) -> Self {
        Name(index)
    }

    /// Index into the interner table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Names reserved by the language (`this`, `base`).
    #[inline]
    pub const fn is_reserved(self) -> bool {
        self.0 == Self::THIS.0 || self.0 == Self::BASE.0
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

impl Default for Name {
    fn default() -> Self {
        Self::EMPTY
    }
}
