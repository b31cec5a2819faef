//! Command handlers for the `mote` CLI.
//!
//! Each handler reads its file, does its work, and exits with status 1 on
//! failure after rendering a diagnostic. Shared helpers live here.

use std::io::IsTerminal;

use mote_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use mote_diagnostic::Diagnostic;

mod debug;
mod run;

pub use debug::{lex_file, parse_file};
pub use run::run_file;

/// Read a source file, exiting with a message if it cannot be read.
pub(crate) fn read_file(path: &str) -> String {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    };
    match source_text(path, bytes) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Spans are byte offsets into a `str`, so sources must be UTF-8. The
/// message names the first offending byte.
fn source_text(path: &str, bytes: Vec<u8>) -> Result<String, String> {
    String::from_utf8(bytes).map_err(|e| {
        format!(
            "'{path}' contains invalid UTF-8 data at byte {}",
            e.utf8_error().valid_up_to()
        )
    })
}

/// Render one diagnostic to stderr against the file it points into.
pub(crate) fn report(path: &str, source: &str, diagnostic: &Diagnostic) {
    let is_tty = std::io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(ColorMode::Auto, is_tty).with_source(path, source);
    emitter.emit(diagnostic);
    emitter.flush();
}

#[cfg(test)]
mod tests;
