//! Textual rendering of terms.
//!
//! [`TermDisplay`] borrows the arena and formats a term the way the
//! runtime echoes results: strings quoted with `\n` and `\\` escaped,
//! numbers with a short fixed fractional budget, lists parenthesized.
//! Primitive names come from the dispatch table through [`PrimitiveNames`]
//! so this crate does not depend on the evaluator.

use std::fmt::{self, Write};

use crate::{Arena, Closure, PrimitiveId, StrId, Term, TermId};

/// Resolves a primitive id to the name it is bound under.
pub trait PrimitiveNames {
    fn primitive_name(&self, id: PrimitiveId) -> &str;
}

/// Most fractional digits a number prints with.
const MAX_FRACTION_DIGITS: usize = 6;

/// Fraction left over below which printing stops.
const FRACTION_EPSILON: f64 = 0.00001;

/// `Display` adapter for a term.
#[derive(Copy, Clone)]
pub struct TermDisplay<'a> {
    arena: &'a Arena,
    primitives: &'a dyn PrimitiveNames,
    term: TermId,
    raw: bool,
}

impl<'a> TermDisplay<'a> {
    pub fn new(arena: &'a Arena, primitives: &'a dyn PrimitiveNames, term: TermId) -> Self {
        TermDisplay {
            arena,
            primitives,
            term,
            raw: false,
        }
    }

    /// Print a top-level string without quotes or escapes.
    ///
    /// Strings nested inside lists are still quoted.
    #[must_use]
    pub fn raw(mut self) -> Self {
        self.raw = true;
        self
    }

    fn write_term(&self, f: &mut fmt::Formatter<'_>, id: TermId, raw: bool) -> fmt::Result {
        match self.arena.get(id) {
            Term::Str(s) if raw => f.write_str(&self.text(s)),
            Term::Str(s) => write_quoted(f, &self.text(s)),
            Term::Integer(i) => write!(f, "{i}"),
            Term::Number(n) => write_number(f, n),
            Term::Atom(name) => f.write_str(self.arena.name(name)),
            Term::Nil | Term::Cons { .. } => {
                f.write_char('(')?;
                for (i, element) in self.arena.list_iter(id).enumerate() {
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    self.write_term(f, element, false)?;
                }
                f.write_char(')')
            }
            Term::Primitive(p) => write!(f, "<primitive_{}>", self.primitives.primitive_name(p)),
            Term::Closure(closure) => self.write_closure(f, closure),
        }
    }

    fn write_closure(&self, f: &mut fmt::Formatter<'_>, closure: Closure) -> fmt::Result {
        write!(f, "<{}", self.arena.name(closure.name))?;
        for param in self.arena.list_iter(closure.params) {
            f.write_char(' ')?;
            self.write_term(f, param, false)?;
        }
        f.write_char('>')
    }

    fn text(&self, s: StrId) -> std::borrow::Cow<'a, str> {
        String::from_utf8_lossy(self.arena.str_bytes(s))
    }
}

impl fmt::Display for TermDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_term(f, self.term, self.raw)
    }
}

fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in text.chars() {
        match c {
            '\n' => f.write_str("\\n")?,
            '\\' => f.write_str("\\\\")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

/// Sign, integer part, `.`, then one to six fractional digits.
fn write_number(f: &mut fmt::Formatter<'_>, n: f64) -> fmt::Result {
    if n.is_nan() {
        return f.write_str("nan");
    }
    let mut n = n;
    if n < 0.0 {
        f.write_char('-')?;
        n = -n;
    }
    if n.is_infinite() {
        return f.write_str("inf");
    }

    let whole = n.trunc();
    write!(f, "{whole:.0}.")?;

    let mut fraction = n - whole;
    for _ in 0..MAX_FRACTION_DIGITS {
        fraction *= 10.0;
        let digit = fraction.trunc();
        fraction -= digit;
        f.write_char(fraction_digit(digit))?;
        if fraction <= FRACTION_EPSILON {
            break;
        }
    }
    Ok(())
}

#[inline]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "digit is a truncated value in 0..10"
)]
fn fraction_digit(digit: f64) -> char {
    char::from(b'0' + (digit as u8).min(9))
}
