//! Diagnostic emitters.
//!
//! Only the terminal emitter exists today; the trait is the seam a
//! machine-readable emitter would plug into.

mod terminal;

pub use terminal::{ColorMode, SourceContext, TerminalEmitter};

use crate::Diagnostic;

/// Trait for emitting diagnostics in various formats.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}
