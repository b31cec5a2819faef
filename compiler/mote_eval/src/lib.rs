//! Mote Eval - the evaluator for mote programs.
//!
//! - [`Env`]: persistent environment chains in the arena
//! - [`Interpreter`]: term reduction with the `let`, `lambda` and `define`
//!   special forms and application of primitives and closures
//! - [`primitives`]: the dispatch table, indexed by [`PrimitiveId`]
//! - [`print_handler`]: the output sink `display` writes to
//!
//! [`PrimitiveId`]: mote_ir::PrimitiveId

mod config;
mod environment;
pub mod errors;
mod interpreter;
pub mod primitives;
pub mod print_handler;

pub use config::{EvalConfig, Scoping, UnknownScoping};
pub use environment::{Bindings, Env};
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::Interpreter;
pub use primitives::{PrimitiveDef, PrimitiveFn, PrimitiveTable, PRIMITIVES};
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
