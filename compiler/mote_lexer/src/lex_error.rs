//! Lexer error types.

use std::fmt;

use mote_diagnostic::{Diagnostic, ErrorCode};
use mote_ir::{ArenaError, Span};

/// A lexer error and where it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexError {
    pub span: Span,
    pub kind: LexErrorKind,
}

/// What went wrong while lexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Input ended before the closing `"`.
    UnterminatedString,
    /// `\` followed by anything other than `\` or `n`.
    InvalidEscape { escape: char },
    /// Integer part of a numeric literal does not fit `i64`.
    IntegerOverflow,
    /// No room left for the decoded string.
    Arena(ArenaError),
}

impl LexError {
    pub fn new(span: Span, kind: LexErrorKind) -> Self {
        LexError { span, kind }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        self.kind.to_diagnostic(self.span)
    }
}

impl LexErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0002,
            LexErrorKind::IntegerOverflow => ErrorCode::E0003,
            LexErrorKind::Arena(_) => ErrorCode::E9001,
        }
    }

    /// Diagnostic for this kind at `span`. Shared with the parser, which
    /// wraps lexer errors.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diag = Diagnostic::error(self.error_code()).with_message(self.to_string());
        match self {
            LexErrorKind::UnterminatedString => diag
                .with_label(Span::new(span.start, span.start + 1), "string starts here")
                .with_suggestion("add a closing `\"`"),
            LexErrorKind::InvalidEscape { .. } => diag
                .with_label(span, "unknown escape")
                .with_note("strings recognize only `\\\\` and `\\n`"),
            LexErrorKind::IntegerOverflow => diag
                .with_label(span, "does not fit in 64 bits")
                .with_note(format!("the largest integer is {}", i64::MAX)),
            LexErrorKind::Arena(_) => diag,
        }
    }
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::InvalidEscape { escape } => {
                write!(f, "invalid escape sequence `\\{escape}`")
            }
            LexErrorKind::IntegerOverflow => write!(f, "integer literal too large"),
            LexErrorKind::Arena(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.kind, self.span)
    }
}

impl std::error::Error for LexError {}

impl From<ArenaError> for LexErrorKind {
    fn from(err: ArenaError) -> Self {
        LexErrorKind::Arena(err)
    }
}

#[cfg(test)]
mod tests;
