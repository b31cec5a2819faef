//! Lexer for mote.
//!
//! Cooks the raw `(tag, len)` tokens of `mote_lexer_core` into [`Token`]s:
//! string escapes are decoded into the arena, integer and decimal literals
//! are converted to values, trivia is skipped.
//!
//! The lexer is stateless. [`lex`] takes the source and a byte offset and
//! returns the next token together with the offset where the rest of the
//! input begins, so lexing can restart anywhere.

mod cook;
mod lex_error;

pub use cook::{lex, skip_blanks, Token, TokenKind, Tokens};
pub use lex_error::{LexError, LexErrorKind};
