//! Mote IR - terms, arena, and names.
//!
//! This crate holds the data every other mote crate shares:
//! - Spans for source locations
//! - Names for interned atoms
//! - The lazily committed [`Region`] and the typed [`Arena`] built on it
//! - The [`Term`] sum type used for both syntax and runtime values
//! - The term printer
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: atom text → `Name(u32)`
//! - **Flatten Everything**: no `Box<Term>`, terms refer to each other by
//!   `TermId(u32)` and environment nodes by `EnvId(u32)`
//! - **Never Free**: nothing allocated in an arena is released before the
//!   arena itself is dropped

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
mod interner;
mod name;
pub mod print;
mod region;
mod span;
mod term;

pub use arena::{Arena, ArenaConfig, ArenaError, ArenaStats, StrStart};
pub use interner::StringInterner;
pub use name::Name;
pub use print::{PrimitiveNames, TermDisplay};
pub use region::{Block, Region};
pub use span::Span;
pub use term::{Closure, EnvId, EnvNode, ListIter, PrimitiveId, StrId, Term, TermId};
