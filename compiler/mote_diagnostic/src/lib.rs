//! Diagnostic system for error reporting.
//!
//! Every phase of the runtime turns its typed error into a [`Diagnostic`]:
//! - an [`ErrorCode`] for searchability
//! - a message saying what went wrong
//! - a primary [`Label`] saying where
//! - notes and help lines saying why and how to fix it
//!
//! Rendering is left to an [`emitter::DiagnosticEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
