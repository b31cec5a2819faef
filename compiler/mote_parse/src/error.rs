//! Parse error types.

use std::fmt;

use mote_diagnostic::{Diagnostic, ErrorCode};
use mote_ir::{ArenaError, Span};
use mote_lexer::{LexError, LexErrorKind};

/// A parse error and where it happened.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub span: Span,
    pub kind: ParseErrorKind,
}

/// What went wrong while parsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input ended where a term was expected.
    UnexpectedEnd,
    /// A `)` where a term was expected.
    UnmatchedClose,
    /// Input ended inside the list opened at `open`.
    UnclosedList { open: Span },
    Lex(LexErrorKind),
    Arena(ArenaError),
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }

    pub(crate) fn arena(span: Span, err: ArenaError) -> Self {
        ParseError::new(span, ParseErrorKind::Arena(err))
    }

    pub fn error_code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::UnexpectedEnd => ErrorCode::E1001,
            ParseErrorKind::UnmatchedClose => ErrorCode::E1002,
            ParseErrorKind::UnclosedList { .. } => ErrorCode::E1003,
            ParseErrorKind::Lex(kind) => kind.error_code(),
            ParseErrorKind::Arena(_) => ErrorCode::E9001,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let ParseErrorKind::Lex(kind) = self.kind {
            return kind.to_diagnostic(self.span);
        }
        let diag = Diagnostic::error(self.error_code()).with_message(self.kind.to_string());
        match self.kind {
            ParseErrorKind::UnexpectedEnd => diag.with_label(self.span, "expected a term"),
            ParseErrorKind::UnmatchedClose => diag
                .with_label(self.span, "no `(` to close")
                .with_suggestion("remove this `)`"),
            ParseErrorKind::UnclosedList { open } => diag
                .with_label(self.span, "input ends here")
                .with_secondary_label(open, "this list is never closed")
                .with_suggestion("add a closing `)`"),
            ParseErrorKind::Lex(_) | ParseErrorKind::Arena(_) => diag,
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input"),
            ParseErrorKind::UnmatchedClose => write!(f, "unmatched `)`"),
            ParseErrorKind::UnclosedList { .. } => write!(f, "unclosed list"),
            ParseErrorKind::Lex(kind) => write!(f, "{kind}"),
            ParseErrorKind::Arena(err) => write!(f, "{err}"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {:?}", self.kind, self.span)
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::new(err.span, ParseErrorKind::Lex(err.kind))
    }
}
