//! Raw tokenizer for mote source.
//!
//! Produces `(RawTag, len)` pairs without decoding anything: string escapes
//! and numeric values are left to the cooking layer in `mote_lexer`. Error
//! conditions the scanner can see on its own (an unterminated string) are
//! tags, not `Err` values.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use tag::{RawTag, RawToken};

/// Whitespace as far as the language is concerned.
#[inline]
pub fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r')
}

/// Bytes that end an atom.
#[inline]
pub fn is_delimiter(byte: u8) -> bool {
    is_space(byte) || byte == b'(' || byte == b')'
}
