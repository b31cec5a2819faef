//! Raw token tags.

/// What kind of raw token the scanner found.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RawTag {
    /// Run of spaces, tabs, newlines, and carriage returns.
    Whitespace,
    /// `;` up to (not including) the next newline.
    Comment,
    LeftParen,
    RightParen,
    /// `"..."` including both quotes. Escapes are not checked.
    String,
    /// `"...` running to end of input.
    UnterminatedString,
    /// Optional `-` then digits.
    Integer,
    /// Optional `-`, digits, `.`, then zero or more digits.
    Decimal,
    /// Maximal run of bytes that are neither whitespace nor parentheses.
    Atom,
    /// End of input. Always `len == 0`.
    Eof,
}

impl RawTag {
    /// Tags the cooking layer skips.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, RawTag::Whitespace | RawTag::Comment)
    }

    pub fn name(self) -> &'static str {
        match self {
            RawTag::Whitespace => "Whitespace",
            RawTag::Comment => "Comment",
            RawTag::LeftParen => "LeftParen",
            RawTag::RightParen => "RightParen",
            RawTag::String => "String",
            RawTag::UnterminatedString => "UnterminatedString",
            RawTag::Integer => "Integer",
            RawTag::Decimal => "Decimal",
            RawTag::Atom => "Atom",
            RawTag::Eof => "Eof",
        }
    }
}

/// A tag and the number of bytes it covers.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
