//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.
//!
//! ```text
//! error[E6001]: unbound atom `x`
//!  --> demo.mote:3:8
//!   |
//! 3 |   (foo x)
//!   |        ^ not bound in this scope
//!   = note: bindings in one `let` do not see each other
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

use super::DiagnosticEmitter;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m"; // Bold blue
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// The file a diagnostic's spans point into.
pub struct SourceContext<'a> {
    path: &'a str,
    source: &'a str,
    lines: LineOffsetTable,
}

impl<'a> SourceContext<'a> {
    pub fn new(path: &'a str, source: &'a str) -> Self {
        SourceContext {
            path,
            source,
            lines: LineOffsetTable::build(source),
        }
    }
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<'a, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'a>>,
}

impl<'a, W: Write> TerminalEmitter<'a, W> {
    /// Create a terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Resolve spans against `source` and show the offending line.
    #[must_use]
    pub fn with_source(mut self, path: &'a str, source: &'a str) -> Self {
        self.source = Some(SourceContext::new(path, source));
        self
    }

    /// Give back the writer, mostly for tests.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_severity(&mut self) {
        self.write_colored("error", colors::ERROR);
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    fn write_label(&mut self, label: &Label) {
        let color = if label.is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        let Some(ctx) = &self.source else {
            let marker = if label.is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {:?}: ", label.span);
            self.write_colored(&label.message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = ctx.lines.span_start(ctx.source, label.span);
        let text = ctx.lines.line_text(ctx.source, line).unwrap_or("");
        let path = ctx.path;
        let gutter = " ".repeat(line.to_string().len());
        let caret_count = text
            .chars()
            .skip(col as usize - 1)
            .take(label.span.len() as usize)
            .count()
            .max(1);
        let pointer = format!(
            "{}{} {}",
            " ".repeat(col as usize - 1),
            if label.is_primary { "^" } else { "-" }.repeat(caret_count),
            label.message
        );

        if label.is_primary {
            let _ = writeln!(self.writer, "{gutter}--> {path}:{line}:{col}");
        }
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {text}");
        let _ = write!(self.writer, "{gutter} | ");
        self.write_colored(&pointer, color);
        let _ = writeln!(self.writer);
    }

    fn write_trailer(&mut self, kind: &str, color: &str, text: &str) {
        let _ = write!(self.writer, "  = ");
        self.write_colored(kind, color);
        let _ = writeln!(self.writer, ": {text}");
    }
}

impl TerminalEmitter<'_, io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_severity();
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for label in &diagnostic.labels {
            self.write_label(label);
        }
        if diagnostic.labels.is_empty() {
            if let Some(ctx) = &self.source {
                let _ = writeln!(self.writer, "  --> {}", ctx.path);
            }
        }

        for note in &diagnostic.notes {
            self.write_trailer("note", colors::BOLD, note);
        }
        for suggestion in &diagnostic.suggestions {
            self.write_trailer("help", colors::HELP, suggestion);
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
