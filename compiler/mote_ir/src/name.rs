//! Interned atom identifier.

use std::fmt;

/// Interned atom name.
///
/// A plain index into the arena's [`StringInterner`](crate::StringInterner).
/// Two atoms are the same symbol exactly when their `Name`s are equal, so
/// environment lookup compares `u32`s instead of bytes.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Pre-interned empty string.
    pub const EMPTY: Name = Name(0);
    /// The canonical truthy atom `t`.
    pub const T: Name = Name(1);
    /// Special form `let`.
    pub const LET: Name = Name(2);
    /// Special form `lambda`.
    pub const LAMBDA: Name = Name(3);
    /// Special form `define`.
    pub const DEFINE: Name = Name(4);

    /// Texts interned at construction, in index order.
    pub(crate) const PRE_INTERNED: [&'static str; 5] = ["", "t", "let", "lambda", "define"];

    /// Create from a raw index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    /// Get raw u32 value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the interner's string table.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
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
