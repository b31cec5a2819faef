//! Persistent environment chains.
//!
//! An [`Env`] is the head of a singly linked list of [`EnvNode`]s in the
//! arena. Extending prepends a node and returns a new head; existing nodes
//! are never touched, so any number of environments (closure captures,
//! enclosing scopes) can share a suffix.

use mote_ir::{Arena, ArenaError, EnvId, EnvNode, Name, TermId};

/// Head of an environment chain. `Env::EMPTY` binds nothing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Env(Option<EnvId>);

impl Env {
    pub const EMPTY: Env = Env(None);

    #[inline]
    pub const fn from_head(head: Option<EnvId>) -> Self {
        Env(head)
    }

    #[inline]
    pub const fn head(self) -> Option<EnvId> {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0.is_none()
    }

    /// Value of the most recently prepended binding for `name`.
    pub fn lookup(self, arena: &Arena, name: Name) -> Option<TermId> {
        self.bindings(arena)
            .find(|node| node.name == name)
            .map(|node| node.value)
    }

    /// Prepend a binding. `self` stays valid and unchanged.
    pub fn extend(self, arena: &mut Arena, name: Name, value: TermId) -> Result<Env, ArenaError> {
        let id = arena.alloc_scope(EnvNode {
            name,
            value,
            next: self.0,
        })?;
        Ok(Env(Some(id)))
    }

    /// Nodes from head to tail.
    pub fn bindings(self, arena: &Arena) -> Bindings<'_> {
        Bindings {
            arena,
            next: self.0,
        }
    }

    /// Number of nodes in the chain, shadowed ones included.
    pub fn len(self, arena: &Arena) -> usize {
        self.bindings(arena).count()
    }
}

/// Iterator over the nodes of an [`Env`].
pub struct Bindings<'a> {
    arena: &'a Arena,
    next: Option<EnvId>,
}

impl Iterator for Bindings<'_> {
    type Item = EnvNode;

    fn next(&mut self) -> Option<EnvNode> {
        let node = self.arena.scope(self.next?);
        self.next = node.next;
        Some(node)
    }
}
