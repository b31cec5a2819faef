//! Recursive-descent parser for mote.
//!
//! [`parse`] reads exactly one term starting at a byte offset and returns
//! it with the offset of the remaining input. [`parse_next`] is the
//! top-level driver step: it skips blanks and reports `None` once only
//! trivia is left. [`Forms`] iterates every top-level form of a source.
//!
//! Every list the parser builds ends in its own freshly allocated nil, and
//! each term records its source span in the arena.

mod error;

use mote_ir::{Arena, Span, Term, TermId};
use mote_lexer::{lex, skip_blanks, TokenKind};
use mote_stack::ensure_sufficient_stack;
use tracing::trace;

pub use error::{ParseError, ParseErrorKind};

/// Parse one term at byte `pos`.
///
/// Returns the term and the offset just past it.
pub fn parse(arena: &mut Arena, source: &str, pos: u32) -> Result<(TermId, u32), ParseError> {
    let (token, rest) = lex(arena, source, pos)?;
    let span = token.span;
    let term = match token.kind {
        TokenKind::LParen => {
            return ensure_sufficient_stack(|| parse_list(arena, source, span, rest));
        }
        TokenKind::Str(s) => Term::Str(s),
        TokenKind::Integer(i) => Term::Integer(i),
        TokenKind::Number(n) => Term::Number(n),
        TokenKind::Atom => Term::Atom(arena.intern(token.text)),
        TokenKind::RParen => {
            return Err(ParseError::new(span, ParseErrorKind::UnmatchedClose));
        }
        TokenKind::End => return Err(ParseError::new(span, ParseErrorKind::UnexpectedEnd)),
    };
    let id = arena
        .alloc(term, span)
        .map_err(|err| ParseError::arena(span, err))?;
    Ok((id, rest))
}

/// Elements up to the matching `)`. `open` is the span of the `(`.
fn parse_list(
    arena: &mut Arena,
    source: &str,
    open: Span,
    mut pos: u32,
) -> Result<(TermId, u32), ParseError> {
    let nil = arena
        .alloc_nil(open)
        .map_err(|err| ParseError::arena(open, err))?;
    let mut first: Option<TermId> = None;
    let mut last: Option<TermId> = None;

    loop {
        pos = skip_blanks(source, pos);
        match source.as_bytes().get(pos as usize) {
            None => {
                return Err(ParseError::new(
                    Span::new(pos, pos),
                    ParseErrorKind::UnclosedList { open },
                ));
            }
            Some(b')') => break,
            Some(_) => {}
        }

        let (element, rest) = parse(arena, source, pos)?;
        pos = rest;
        let element_span = arena.span(element);
        let cell = arena
            .cons(element, nil, element_span)
            .map_err(|err| ParseError::arena(open, err))?;
        match last {
            Some(prev) => arena.set_tail(prev, cell),
            None => first = Some(cell),
        }
        last = Some(cell);
    }

    // Consume the `)`.
    let end = pos + 1;
    let list = first.unwrap_or(nil);
    arena.set_span(list, open.merge(Span::new(pos, end)));
    Ok((list, end))
}

/// One top-level step: skip blanks, then parse a form if any input is left.
pub fn parse_next(
    arena: &mut Arena,
    source: &str,
    pos: u32,
) -> Result<Option<(TermId, u32)>, ParseError> {
    let start = skip_blanks(source, pos);
    if start as usize >= source.len() {
        return Ok(None);
    }
    let (form, rest) = parse(arena, source, start)?;
    trace!(offset = start, "parsed form");
    Ok(Some((form, rest)))
}

/// Iterator over the top-level forms of a source.
///
/// Stops after the first error.
pub struct Forms<'a, 'src> {
    arena: &'a mut Arena,
    source: &'src str,
    pos: u32,
    done: bool,
}

impl<'a, 'src> Forms<'a, 'src> {
    pub fn new(arena: &'a mut Arena, source: &'src str) -> Self {
        Forms {
            arena,
            source,
            pos: 0,
            done: false,
        }
    }

    /// The arena the forms are allocated in.
    pub fn arena(&self) -> &Arena {
        self.arena
    }
}

impl Iterator for Forms<'_, '_> {
    type Item = Result<TermId, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match parse_next(self.arena, self.source, self.pos) {
            Ok(Some((form, rest))) => {
                self.pos = rest;
                Some(Ok(form))
            }
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}
