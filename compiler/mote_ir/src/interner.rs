//! String interner for atom names.
//!
//! The runtime is single-threaded, so the interner is a plain map owned by
//! the [`Arena`](crate::Arena) and mutated through `&mut`. Interned text is
//! leaked to `'static`: like every other arena allocation it lives until
//! the process exits.

use rustc_hash::FxHashMap;

use crate::Name;

/// Maps atom text to [`Name`] and back.
pub struct StringInterner {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl StringInterner {
    /// Create an interner with the special-form names pre-interned at the
    /// indices of the `Name` constants.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        for text in Name::PRE_INTERNED {
            interner.insert(text);
        }
        interner
    }

    /// Intern `text`, returning the existing `Name` if it was seen before.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let leaked: &'static str = Box::leak(text.to_owned().into_boxed_str());
        self.insert(leaked)
    }

    /// Look up the text of a `Name`.
    ///
    /// Names are only produced by this interner, so an unknown name can only
    /// come from mixing arenas; it resolves to the empty string.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.strings.get(name.index()).copied().unwrap_or("")
    }

    /// Number of interned names, including the pre-interned ones.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Never true: the pre-interned names are always present.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn insert(&mut self, text: &'static str) -> Name {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "atom count is bounded far below u32::MAX by the term pool"
        )]
        let name = Name::from_raw(self.strings.len() as u32);
        self.strings.push(text);
        self.map.insert(text, name);
        name
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
