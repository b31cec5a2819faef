//! The arena every term, environment node, and string lives in.
//!
//! [`Arena`] bundles three lazily committed stores:
//! - a byte [`Region`] for string payloads,
//! - a paged pool of [`Term`]s with a parallel array of source [`Span`]s,
//! - a paged pool of [`EnvNode`]s.
//!
//! Pools commit one page of slots at a time and never move a committed
//! page, so ids stay valid for the arena's whole life. Nothing is freed
//! individually.

use std::fmt;

use crate::region::DEFAULT_PAGE_SIZE;
use crate::term::ListIter;
use crate::{Block, EnvId, EnvNode, Name, Region, Span, StrId, StringInterner, Term, TermId};

/// Allocation failure. Fatal for the program being run, never a panic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The reservation for `pool` is used up.
    Exhausted { pool: &'static str, reserved: usize },
    /// Region allocation asked for an alignment that is not a power of two.
    InvalidAlignment { alignment: usize },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArenaError::Exhausted { pool, reserved } => {
                write!(f, "arena exhausted: {pool} reservation of {reserved} is used up")
            }
            ArenaError::InvalidAlignment { alignment } => {
                write!(f, "alignment {alignment} is not a power of two")
            }
        }
    }
}

impl std::error::Error for ArenaError {}

/// Reservation sizes and commit granularity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Bytes reserved for string payloads.
    pub string_capacity: usize,
    /// Term slots reserved.
    pub term_capacity: usize,
    /// Environment node slots reserved.
    pub scope_capacity: usize,
    /// Commit granularity in bytes.
    pub page_size: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            string_capacity: u32::MAX as usize,
            term_capacity: 1 << 28,
            scope_capacity: 1 << 28,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Allocation counters, for logging and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    pub terms: usize,
    pub scopes: usize,
    pub string_bytes: usize,
    pub committed_string_bytes: usize,
}

/// Start marker for a string being built byte by byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StrStart(usize);

/// Fixed-size pages of `T`, committed on demand.
struct Pool<T> {
    pages: Vec<Vec<T>>,
    len: usize,
    reserved: usize,
    per_page: usize,
    what: &'static str,
}

impl<T> Pool<T> {
    fn new(what: &'static str, reserved: usize, page_size: usize) -> Self {
        let per_page = (page_size / std::mem::size_of::<T>().max(1)).max(1);
        Pool {
            pages: Vec::new(),
            len: 0,
            reserved: reserved.min(u32::MAX as usize),
            per_page,
            what,
        }
    }

    /// Push without the reservation check; used for the canonical terms.
    fn push_unchecked(&mut self, item: T) -> u32 {
        let index = to_u32(self.len);
        match self.pages.last_mut() {
            Some(page) if page.len() < self.per_page => page.push(item),
            _ => {
                tracing::debug!(pool = self.what, pages = self.pages.len() + 1, "pool commit");
                let mut page = Vec::with_capacity(self.per_page);
                page.push(item);
                self.pages.push(page);
            }
        }
        self.len += 1;
        index
    }

    fn push(&mut self, item: T) -> Result<u32, ArenaError> {
        if self.len >= self.reserved {
            return Err(ArenaError::Exhausted {
                pool: self.what,
                reserved: self.reserved,
            });
        }
        Ok(self.push_unchecked(item))
    }

    #[inline]
    fn get(&self, index: usize) -> &T {
        &self.pages[index / self.per_page][index % self.per_page]
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> &mut T {
        &mut self.pages[index / self.per_page][index % self.per_page]
    }
}

/// Convert a pool length to a `u32` id. Pools clamp their reservation to
/// `u32::MAX`, so this never truncates.
#[inline]
#[expect(
    clippy::cast_possible_truncation,
    reason = "pool reservations are clamped to u32::MAX"
)]
fn to_u32(len: usize) -> u32 {
    len as u32
}

/// Owner of all runtime memory.
pub struct Arena {
    region: Region,
    terms: Pool<Term>,
    /// Source spans, parallel with `terms`.
    spans: Vec<Span>,
    scopes: Pool<EnvNode>,
    names: StringInterner,
    nil: TermId,
    t: TermId,
}

impl Arena {
    /// Create an arena with the default reservations.
    pub fn new() -> Self {
        Self::with_config(ArenaConfig::default())
    }

    /// Create an arena with explicit reservations.
    ///
    /// The canonical nil and `t` terms are allocated outside the term
    /// reservation, so construction cannot fail.
    pub fn with_config(config: ArenaConfig) -> Self {
        let mut terms = Pool::new("terms", config.term_capacity, config.page_size);
        let nil = TermId::new(terms.push_unchecked(Term::Nil));
        let t = TermId::new(terms.push_unchecked(Term::Atom(Name::T)));
        Arena {
            region: Region::with_page_size(config.string_capacity, config.page_size),
            terms,
            spans: vec![Span::DUMMY, Span::DUMMY],
            scopes: Pool::new("environment nodes", config.scope_capacity, config.page_size),
            names: StringInterner::new(),
            nil,
            t,
        }
    }

    // Terms

    /// Allocate a term.
    pub fn alloc(&mut self, term: Term, span: Span) -> Result<TermId, ArenaError> {
        let id = TermId::new(self.terms.push(term)?);
        self.spans.push(span);
        Ok(id)
    }

    /// Allocate a copy of an existing term, keeping its span.
    pub fn copy_term(&mut self, id: TermId) -> Result<TermId, ArenaError> {
        let term = self.get(id);
        let span = self.span(id);
        self.alloc(term, span)
    }

    /// Allocate a fresh nil.
    pub fn alloc_nil(&mut self, span: Span) -> Result<TermId, ArenaError> {
        self.alloc(Term::Nil, span)
    }

    /// Allocate a cons cell. `tail` must be a list.
    pub fn cons(&mut self, head: TermId, tail: TermId, span: Span) -> Result<TermId, ArenaError> {
        debug_assert!(self.get(tail).is_list(), "cons tail must be a proper list");
        self.alloc(Term::Cons { head, tail }, span)
    }

    /// Read a term.
    #[inline]
    pub fn get(&self, id: TermId) -> Term {
        *self.terms.get(id.index())
    }

    /// Mutable access to a term.
    ///
    /// Only fresh results may be mutated in place; parsed source terms are
    /// never handed out without a copy.
    #[inline]
    pub fn get_mut(&mut self, id: TermId) -> &mut Term {
        self.terms.get_mut(id.index())
    }

    /// Source span of a term (`Span::DUMMY` for runtime terms).
    #[inline]
    pub fn span(&self, id: TermId) -> Span {
        self.spans[id.index()]
    }

    /// Replace the span of a term, e.g. once a list's closing `)` is seen.
    #[inline]
    pub fn set_span(&mut self, id: TermId, span: Span) {
        self.spans[id.index()] = span;
    }

    /// Point the tail of cons cell `cell` at `tail`. Used while a list is
    /// still being built; no-op for non-cons terms.
    pub fn set_tail(&mut self, cell: TermId, tail: TermId) {
        if let Term::Cons { tail: slot, .. } = self.get_mut(cell) {
            *slot = tail;
        }
    }

    /// The canonical nil used for control-flow results.
    #[inline]
    pub fn nil(&self) -> TermId {
        self.nil
    }

    /// The canonical truthy atom `t`.
    #[inline]
    pub fn t(&self) -> TermId {
        self.t
    }

    /// `t` for true, the canonical nil for false.
    #[inline]
    pub fn truth(&self, value: bool) -> TermId {
        if value {
            self.t
        } else {
            self.nil
        }
    }

    #[inline]
    pub fn is_nil(&self, id: TermId) -> bool {
        self.get(id).is_nil()
    }

    /// Iterate over the elements of a proper list.
    pub fn list_iter(&self, list: TermId) -> ListIter<'_> {
        ListIter::new(self, list)
    }

    /// Split a cons cell into head and tail.
    #[inline]
    pub fn uncons(&self, list: TermId) -> Option<(TermId, TermId)> {
        match self.get(list) {
            Term::Cons { head, tail } => Some((head, tail)),
            _ => None,
        }
    }

    /// Number of elements of a proper list.
    pub fn list_len(&self, list: TermId) -> usize {
        self.list_iter(list).count()
    }

    // Strings

    /// Copy `bytes` into the region.
    pub fn alloc_str(&mut self, bytes: &[u8]) -> Result<StrId, ArenaError> {
        let block = self.region.allocate(bytes.len(), 1)?;
        self.region.bytes_mut(block).copy_from_slice(bytes);
        Ok(StrId {
            start: to_u32(block.offset),
            len: to_u32(block.size),
        })
    }

    /// Begin a string built with [`push_str_byte`](Self::push_str_byte).
    ///
    /// The bytes stay contiguous as long as nothing else allocates string
    /// bytes before [`finish_str`](Self::finish_str).
    pub fn begin_str(&mut self) -> Result<StrStart, ArenaError> {
        let block = self.region.allocate(0, 1)?;
        Ok(StrStart(block.offset))
    }

    /// Append one byte to the string being built.
    pub fn push_str_byte(&mut self, byte: u8) -> Result<(), ArenaError> {
        let block = self.region.allocate(1, 1)?;
        self.region.bytes_mut(block)[0] = byte;
        Ok(())
    }

    /// Close the string started at `start`.
    pub fn finish_str(&self, start: StrStart) -> StrId {
        StrId {
            start: to_u32(start.0),
            len: to_u32(self.region.used() - start.0),
        }
    }

    /// Bytes of a string.
    #[inline]
    pub fn str_bytes(&self, id: StrId) -> &[u8] {
        let start = id.start as usize;
        self.region.bytes(Block {
            offset: start,
            size: id.len(),
        })
    }

    // Names

    /// Intern atom text.
    #[inline]
    pub fn intern(&mut self, text: &str) -> Name {
        self.names.intern(text)
    }

    /// Text of an atom name.
    #[inline]
    pub fn name(&self, name: Name) -> &'static str {
        self.names.lookup(name)
    }

    // Environment nodes

    /// Allocate an environment node.
    pub fn alloc_scope(&mut self, node: EnvNode) -> Result<EnvId, ArenaError> {
        Ok(EnvId::new(self.scopes.push(node)?))
    }

    /// Read an environment node.
    #[inline]
    pub fn scope(&self, id: EnvId) -> EnvNode {
        *self.scopes.get(id.index())
    }

    // Accounting

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            terms: self.terms.len,
            scopes: self.scopes.len,
            string_bytes: self.region.used(),
            committed_string_bytes: self.region.committed(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
