//! Evaluation errors.
//!
//! Every failure the evaluator or a primitive can hit is an [`EvalError`]:
//! an [`EvalErrorKind`] plus the span of the term that caused it. The
//! constructors below are the single place messages are built.

use std::fmt;

use mote_diagnostic::{Diagnostic, ErrorCode};
use mote_ir::{ArenaError, Span};

/// Result of evaluation.
pub type EvalResult<T> = Result<T, EvalError>;

/// An evaluation error and where it happened.
///
/// `span` is `Span::DUMMY` when the offending term was created at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub span: Span,
}

/// What went wrong during evaluation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Atom not bound anywhere in the environment chain.
    UnboundAtom { name: &'static str },
    /// Operator position evaluated to something other than a primitive or
    /// closure.
    NotCallable { found: &'static str },
    /// Closure called with the wrong number of operands.
    ArityMismatch {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    /// `let`, `lambda` or `define` with the wrong shape.
    MalformedForm {
        form: &'static str,
        reason: &'static str,
    },
    /// Primitive operand of the wrong kind.
    TypeMismatch {
        primitive: &'static str,
        expected: &'static str,
        got: &'static str,
    },
    /// Primitive called with the wrong number of operands.
    PrimitiveArity {
        primitive: &'static str,
        expected: &'static str,
        got: usize,
    },
    /// Integer division or remainder by zero.
    DivisionByZero { primitive: &'static str },
    /// Integer arithmetic left the `i64` range.
    IntegerOverflow { primitive: &'static str },
    Arena(ArenaError),
}

impl EvalErrorKind {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            EvalErrorKind::UnboundAtom { .. } => ErrorCode::E6001,
            EvalErrorKind::NotCallable { .. } => ErrorCode::E6002,
            EvalErrorKind::ArityMismatch { .. } => ErrorCode::E6003,
            EvalErrorKind::MalformedForm { .. } => ErrorCode::E6004,
            EvalErrorKind::TypeMismatch { .. } => ErrorCode::E6005,
            EvalErrorKind::PrimitiveArity { .. } => ErrorCode::E6006,
            EvalErrorKind::DivisionByZero { .. } => ErrorCode::E6007,
            EvalErrorKind::IntegerOverflow { .. } => ErrorCode::E6008,
            EvalErrorKind::Arena(_) => ErrorCode::E9001,
        }
    }

    fn primary_label(&self) -> &'static str {
        match self {
            EvalErrorKind::UnboundAtom { .. } => "not bound in this scope",
            EvalErrorKind::NotCallable { .. } => "cannot be applied",
            EvalErrorKind::ArityMismatch { .. } | EvalErrorKind::PrimitiveArity { .. } => {
                "in this call"
            }
            EvalErrorKind::MalformedForm { .. } => "in this form",
            EvalErrorKind::TypeMismatch { .. } => "this operand",
            EvalErrorKind::DivisionByZero { .. } => "divisor is zero",
            EvalErrorKind::IntegerOverflow { .. } => "overflows",
            EvalErrorKind::Arena(_) => "while evaluating this",
        }
    }

    fn suggestion(&self) -> Option<&'static str> {
        match self {
            EvalErrorKind::UnboundAtom { .. } => {
                Some("bind it with `define` or `let` before it is used")
            }
            EvalErrorKind::DivisionByZero { .. } => {
                Some("use a floating-point operand to get `inf` instead")
            }
            EvalErrorKind::IntegerOverflow { .. } => {
                Some("use a floating-point operand to compute with f64")
            }
            _ => None,
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalErrorKind::UnboundAtom { name } => write!(f, "unbound atom `{name}`"),
            EvalErrorKind::NotCallable { found } => {
                write!(f, "expected a primitive or closure, found {found}")
            }
            EvalErrorKind::ArityMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "`{name}` takes {expected} operand{}, got {got}",
                if *expected == 1 { "" } else { "s" }
            ),
            EvalErrorKind::MalformedForm { form, reason } => {
                write!(f, "malformed `{form}`: {reason}")
            }
            EvalErrorKind::TypeMismatch {
                primitive,
                expected,
                got,
            } => write!(f, "`{primitive}` expects {expected}, found {got}"),
            EvalErrorKind::PrimitiveArity {
                primitive,
                expected,
                got,
            } => write!(f, "`{primitive}` takes {expected}, got {got}"),
            EvalErrorKind::DivisionByZero { primitive } => {
                write!(f, "division by zero in `{primitive}`")
            }
            EvalErrorKind::IntegerOverflow { primitive } => {
                write!(f, "integer overflow in `{primitive}`")
            }
            EvalErrorKind::Arena(err) => write!(f, "{err}"),
        }
    }
}

impl EvalError {
    #[cold]
    pub fn new(kind: EvalErrorKind, span: Span) -> Self {
        EvalError { kind, span }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.kind.error_code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.primary_label());
        if let EvalErrorKind::MalformedForm { form: "let", .. } = self.kind {
            diag = diag.with_note("`let` takes a list of `(name expr)` bindings and one body term");
        }
        if let Some(suggestion) = self.kind.suggestion() {
            diag = diag.with_suggestion(suggestion);
        }
        diag
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for EvalError {}

impl From<ArenaError> for EvalError {
    fn from(err: ArenaError) -> Self {
        EvalError::new(EvalErrorKind::Arena(err), Span::DUMMY)
    }
}

// Constructors

#[cold]
pub fn unbound_atom(name: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::UnboundAtom { name }, span)
}

#[cold]
pub fn not_callable(found: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::NotCallable { found }, span)
}

#[cold]
pub fn arity_mismatch(name: &'static str, expected: usize, got: usize, span: Span) -> EvalError {
    EvalError::new(
        EvalErrorKind::ArityMismatch {
            name,
            expected,
            got,
        },
        span,
    )
}

#[cold]
pub fn malformed(form: &'static str, reason: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::MalformedForm { form, reason }, span)
}

#[cold]
pub fn type_mismatch(
    primitive: &'static str,
    expected: &'static str,
    got: &'static str,
    span: Span,
) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeMismatch {
            primitive,
            expected,
            got,
        },
        span,
    )
}

#[cold]
pub fn primitive_arity(
    primitive: &'static str,
    expected: &'static str,
    got: usize,
    span: Span,
) -> EvalError {
    EvalError::new(
        EvalErrorKind::PrimitiveArity {
            primitive,
            expected,
            got,
        },
        span,
    )
}

#[cold]
pub fn division_by_zero(primitive: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero { primitive }, span)
}

#[cold]
pub fn integer_overflow(primitive: &'static str, span: Span) -> EvalError {
    EvalError::new(EvalErrorKind::IntegerOverflow { primitive }, span)
}

#[cfg(test)]
mod tests;
