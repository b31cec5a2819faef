//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! Main dispatch looks at one byte. Whitespace, comments, parentheses and
//! strings start with a fixed byte; a digit, or `-` directly followed by a
//! digit, starts a number; everything else is an atom.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};
use crate::{is_delimiter, is_space};

/// Allocation-free scanner. Produces one token per call.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Scanner positioned at byte `pos` of `source`.
    pub fn new(source: &'a str, pos: u32) -> Self {
        RawScanner {
            cursor: Cursor::new(source, pos),
        }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is exhausted,
    /// and keeps returning it.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let tag = match self.cursor.current() {
            b' ' | b'\t' | b'\n' | b'\r' => self.whitespace(),
            b';' => self.comment(),
            b'(' => self.single(RawTag::LeftParen),
            b')' => self.single(RawTag::RightParen),
            b'"' => self.string(),
            b'0'..=b'9' => self.number(),
            b'-' if self.cursor.peek().is_ascii_digit() => self.number(),
            _ => self.atom(),
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    /// Skip whitespace and comments, returning the offset of the next
    /// significant byte.
    pub fn skip_trivia(&mut self) -> u32 {
        loop {
            match self.cursor.current() {
                b';' => self.cursor.eat_until_newline_or_eof(),
                b if is_space(b) && !self.cursor.is_eof() => self.cursor.eat_while(is_space),
                _ => return self.cursor.pos(),
            }
        }
    }

    fn single(&mut self, tag: RawTag) -> RawTag {
        self.cursor.advance();
        tag
    }

    fn whitespace(&mut self) -> RawTag {
        self.cursor.eat_while(is_space);
        RawTag::Whitespace
    }

    fn comment(&mut self) -> RawTag {
        self.cursor.eat_until_newline_or_eof();
        RawTag::Comment
    }

    /// `"` through the next `"` not preceded by a `\` escape.
    fn string(&mut self) -> RawTag {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return RawTag::String;
                }
                b'\\' => {
                    self.cursor.advance();
                    // Skip the whole escaped character so the token stays on
                    // a character boundary.
                    let width = utf8_width(self.cursor.current());
                    self.cursor.advance_n(width);
                }
                _ => return RawTag::UnterminatedString,
            }
        }
    }

    fn number(&mut self) -> RawTag {
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && !self.cursor.is_eof() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            RawTag::Decimal
        } else {
            RawTag::Integer
        }
    }

    fn atom(&mut self) -> RawTag {
        self.cursor.eat_while(|b| !is_delimiter(b));
        RawTag::Atom
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    /// Every token up to, not including, `Eof`.
    fn next(&mut self) -> Option<RawToken> {
        let token = self.next_token();
        (token.tag != RawTag::Eof).then_some(token)
    }
}

/// Bytes in the UTF-8 character led by `byte`. Treats end of input as one.
#[inline]
fn utf8_width(byte: u8) -> u32 {
    match byte {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
