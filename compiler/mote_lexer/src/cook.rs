//! Cooking raw tokens into values.

use mote_ir::{Arena, ArenaError, Span, StrId};
use mote_lexer_core::{RawScanner, RawTag};

use crate::{LexError, LexErrorKind};

/// Token kind, with the decoded value for literals.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// No input left.
    End,
    LParen,
    RParen,
    /// Decoded string contents, stored in the arena.
    Str(StrId),
    Integer(i64),
    Number(f64),
    /// Atom text is the token text.
    Atom,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::End => "End",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Str(_) => "String",
            TokenKind::Integer(_) => "Integer",
            TokenKind::Number(_) => "Number",
            TokenKind::Atom => "Atom",
        }
    }
}

/// A cooked token and the source text it was read from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub span: Span,
    pub text: &'src str,
}

/// Offset of the first byte at or after `pos` that is not whitespace or
/// part of a comment.
pub fn skip_blanks(source: &str, pos: u32) -> u32 {
    RawScanner::new(source, pos).skip_trivia()
}

/// Lex one token starting at byte `pos`.
///
/// Returns the token and the offset where the remaining input starts. At
/// the end of input the token is [`TokenKind::End`] with an empty span and
/// the offset does not move.
pub fn lex<'src>(
    arena: &mut Arena,
    source: &'src str,
    pos: u32,
) -> Result<(Token<'src>, u32), LexError> {
    let start = skip_blanks(source, pos);
    let mut scanner = RawScanner::new(source, start);
    let raw = scanner.next_token();
    let end = start + raw.len;
    let span = Span::new(start, end);
    let text = source.get(start as usize..end as usize).unwrap_or("");

    let kind = match raw.tag {
        RawTag::Eof => TokenKind::End,
        RawTag::LeftParen => TokenKind::LParen,
        RawTag::RightParen => TokenKind::RParen,
        RawTag::String => TokenKind::Str(cook_string(arena, text, start)?),
        RawTag::UnterminatedString => {
            return Err(LexError::new(span, LexErrorKind::UnterminatedString));
        }
        RawTag::Integer => {
            let (negative, magnitude) = cook_integer_part(text, span)?;
            TokenKind::Integer(signed(negative, magnitude).ok_or(LexError::new(
                span,
                LexErrorKind::IntegerOverflow,
            ))?)
        }
        RawTag::Decimal => TokenKind::Number(cook_decimal(text, span)?),
        RawTag::Atom => TokenKind::Atom,
        // skip_blanks left the scanner on a significant byte.
        RawTag::Whitespace | RawTag::Comment => TokenKind::End,
    };
    Ok((Token { kind, span, text }, end))
}

/// Decode `\\` and `\n` escapes of a quoted literal into the arena.
fn cook_string(arena: &mut Arena, text: &str, start: u32) -> Result<StrId, LexError> {
    let arena_err = |err: ArenaError| LexError::new(Span::new(start, start), LexErrorKind::Arena(err));
    let body = text
        .get(1..text.len().saturating_sub(1))
        .unwrap_or_default();

    if memchr::memchr(b'\\', body.as_bytes()).is_none() {
        return arena.alloc_str(body.as_bytes()).map_err(arena_err);
    }

    let built = arena.begin_str().map_err(arena_err)?;
    let mut chars = body.char_indices();
    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            let mut utf8 = [0u8; 4];
            for &b in c.encode_utf8(&mut utf8).as_bytes() {
                arena.push_str_byte(b).map_err(arena_err)?;
            }
            continue;
        }
        let decoded = match chars.next() {
            Some((_, '\\')) => b'\\',
            Some((_, 'n')) => b'\n',
            Some((_, escape)) => {
                let at = start + 1 + to_u32(i);
                let len = 1 + to_u32(escape.len_utf8());
                return Err(LexError::new(
                    Span::new(at, at + len),
                    LexErrorKind::InvalidEscape { escape },
                ));
            }
            // The raw scanner never ends a terminated string on a lone `\`.
            None => b'\\',
        };
        arena.push_str_byte(decoded).map_err(arena_err)?;
    }
    Ok(arena.finish_str(built))
}

/// Sign and magnitude of the digits before any `.`.
fn cook_integer_part(text: &str, span: Span) -> Result<(bool, u64), LexError> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let mut magnitude: u64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        magnitude = magnitude
            .checked_mul(10)
            .and_then(|m| m.checked_add(u64::from(b - b'0')))
            .ok_or(LexError::new(span, LexErrorKind::IntegerOverflow))?;
    }
    Ok((negative, magnitude))
}

fn signed(negative: bool, magnitude: u64) -> Option<i64> {
    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Integer part, then each fractional digit added as `digit / 10^k`.
#[expect(
    clippy::cast_precision_loss,
    reason = "the integer part is widened to f64 like any promotion"
)]
fn cook_decimal(text: &str, span: Span) -> Result<f64, LexError> {
    let (negative, magnitude) = cook_integer_part(text, span)?;
    // The integer part must also fit i64, as it would for an integer literal.
    signed(negative, magnitude).ok_or(LexError::new(span, LexErrorKind::IntegerOverflow))?;

    let mut number = magnitude as f64;
    let fraction = text.split_once('.').map_or("", |(_, f)| f);
    let mut scale = 1.0;
    for b in fraction.bytes() {
        scale *= 10.0;
        number += f64::from(b - b'0') / scale;
    }
    Ok(if negative { -number } else { number })
}

#[inline]
fn to_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Every token of a source, stopping before `End` or after the first error.
pub struct Tokens<'a, 'src> {
    arena: &'a mut Arena,
    source: &'src str,
    pos: u32,
    done: bool,
}

impl<'a, 'src> Tokens<'a, 'src> {
    pub fn new(arena: &'a mut Arena, source: &'src str) -> Self {
        Tokens {
            arena,
            source,
            pos: 0,
            done: false,
        }
    }
}

impl<'src> Iterator for Tokens<'_, 'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match lex(self.arena, self.source, self.pos) {
            Ok((token, _)) if token.kind == TokenKind::End => {
                self.done = true;
                None
            }
            Ok((token, rest)) => {
                self.pos = rest;
                Some(Ok(token))
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
