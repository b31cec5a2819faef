//! The term model.
//!
//! One closed sum type covers both parsed syntax and runtime values. Terms
//! live in the [`Arena`](crate::Arena) and refer to each other by
//! [`TermId`]; nothing owns anything, and nothing is freed before the arena.

use std::fmt;

use crate::{Arena, Name};

/// Index of a term in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct TermId(u32);

impl TermId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        TermId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TermId({})", self.0)
    }
}

/// Index of an environment node in the arena.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct EnvId(u32);

impl EnvId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        EnvId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for EnvId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnvId({})", self.0)
    }
}

/// Stable index into the primitive dispatch table.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct PrimitiveId(u32);

impl PrimitiveId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        PrimitiveId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable byte string stored in the arena's region.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct StrId {
    pub(crate) start: u32,
    pub(crate) len: u32,
}

impl StrId {
    /// Length in bytes.
    #[inline]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// A procedure value.
///
/// `params` is a proper list of atoms, `body` a proper list of terms run in
/// sequence, and `captured` the head of the environment chain visible where
/// the closure was made (`None` is the empty environment).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Closure {
    pub name: Name,
    pub captured: Option<EnvId>,
    pub params: TermId,
    pub body: TermId,
}

/// A term: source syntax and runtime value alike.
///
/// Lists are proper: the `tail` of a `Cons` is always `Nil` or another
/// `Cons`. Every literal list gets its own freshly allocated `Nil`; the
/// arena additionally keeps one canonical nil for control-flow results.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Term {
    Str(StrId),
    Integer(i64),
    Number(f64),
    Atom(Name),
    Nil,
    Cons { head: TermId, tail: TermId },
    Primitive(PrimitiveId),
    Closure(Closure),
}

crate::static_assert_size!(Term, 24);

impl Term {
    /// Kind name used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Term::Str(_) => "string",
            Term::Integer(_) => "integer",
            Term::Number(_) => "number",
            Term::Atom(_) => "atom",
            Term::Nil => "nil",
            Term::Cons { .. } => "list",
            Term::Primitive(_) => "primitive",
            Term::Closure(_) => "closure",
        }
    }

    /// Nil is the only false value.
    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Term::Nil)
    }

    /// `Nil` or `Cons`.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Term::Nil | Term::Cons { .. })
    }

    /// Integer or number widened to `f64`.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "promotion to floating point is the language's numeric rule"
    )]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Term::Integer(i) => Some(i as f64),
            Term::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// One binding in an environment chain.
///
/// Nodes are never mutated once allocated; `next` links to the rest of the
/// chain, which other chains may share.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct EnvNode {
    pub name: Name,
    pub value: TermId,
    pub next: Option<EnvId>,
}

/// Iterator over the element ids of a proper list.
pub struct ListIter<'a> {
    arena: &'a Arena,
    current: TermId,
}

impl<'a> ListIter<'a> {
    pub(crate) fn new(arena: &'a Arena, list: TermId) -> Self {
        ListIter {
            arena,
            current: list,
        }
    }

    /// The unconsumed remainder of the list.
    pub fn rest(&self) -> TermId {
        self.current
    }
}

impl Iterator for ListIter<'_> {
    type Item = TermId;

    fn next(&mut self) -> Option<TermId> {
        match self.arena.get(self.current) {
            Term::Cons { head, tail } => {
                self.current = tail;
                Some(head)
            }
            _ => None,
        }
    }
}
