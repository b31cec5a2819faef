//! Byte cursor over source text.
//!
//! Reading past the end yields `0x00`, so lookahead never needs a bounds
//! check at the call site. An interior NUL is told apart from the end by
//! [`Cursor::is_eof`].

/// Cursor over a source string. [`Copy`], so snapshots are free.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

impl<'a> Cursor<'a> {
    /// Cursor at byte `pos` of `source`.
    ///
    /// Sources are addressed with `u32` offsets; `pos` is clamped to the
    /// source length.
    pub fn new(source: &'a str, pos: u32) -> Self {
        let mut cursor = Cursor { source, pos: 0 };
        cursor.pos = pos.min(cursor.source_len());
        cursor
    }

    /// Byte at the current position, `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte after the current one, `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    /// Advance by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, stopping at the end.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len());
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Source length in bytes, saturated to `u32::MAX`.
    #[inline]
    pub fn source_len(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }

    /// Source text between two offsets; empty if they do not fall on
    /// character boundaries.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.source.get(start as usize..end as usize).unwrap_or("")
    }

    /// Source text from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` holds for the current byte and input remains.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` or the end.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by source_len, a u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        match memchr::memchr(b'\n', self.remaining()) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len(),
        }
    }

    /// Advance to the next `"` or `\` and return it, or `0` at the end.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "offset is bounded by source_len, a u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        match memchr::memchr2(b'"', b'\\', self.remaining()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.source_len();
                0
            }
        }
    }

    #[inline]
    fn remaining(&self) -> &'a [u8] {
        let bytes = self.source.as_bytes();
        &bytes[(self.pos as usize).min(bytes.len())..self.source_len() as usize]
    }
}
