//! Error codes for all runtime diagnostics.
//!
//! Each error code is a unique identifier (e.g., `E1001`) with the first digit
//! indicating the phase that produced it.

use std::fmt;

/// Error codes for all runtime diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Evaluation errors
/// - E9xxx: Resource errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid escape sequence
    E0002,
    /// Integer literal does not fit in 64 bits
    E0003,

    // Parser Errors (E1xxx)
    /// Input ended where a term was expected
    E1001,
    /// `)` with no matching `(`
    E1002,
    /// List never closed
    E1003,

    // Evaluation Errors (E6xxx)
    /// Unbound atom
    E6001,
    /// Operator is neither a primitive nor a closure
    E6002,
    /// Closure called with the wrong number of operands
    E6003,
    /// Malformed special form
    E6004,
    /// Operand of the wrong kind
    E6005,
    /// Primitive called with the wrong number of operands
    E6006,
    /// Integer division by zero
    E6007,
    /// Integer arithmetic overflow
    E6008,

    // Resource Errors (E9xxx)
    /// Arena reservation exhausted
    E9001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0003,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
        ErrorCode::E6004,
        ErrorCode::E6005,
        ErrorCode::E6006,
        ErrorCode::E6007,
        ErrorCode::E6008,
        ErrorCode::E9001,
    ];

    /// Get the string representation of this error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid escape sequence",
            ErrorCode::E0003 => "integer literal too large",
            ErrorCode::E1001 => "unexpected end of input",
            ErrorCode::E1002 => "unmatched closing parenthesis",
            ErrorCode::E1003 => "unclosed list",
            ErrorCode::E6001 => "unbound atom",
            ErrorCode::E6002 => "not a primitive or closure",
            ErrorCode::E6003 => "closure arity mismatch",
            ErrorCode::E6004 => "malformed special form",
            ErrorCode::E6005 => "type mismatch",
            ErrorCode::E6006 => "primitive arity mismatch",
            ErrorCode::E6007 => "division by zero",
            ErrorCode::E6008 => "integer overflow",
            ErrorCode::E9001 => "arena exhausted",
        }
    }

    /// Check if this is a lexer error (E0xxx).
    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    /// Check if this is a parser error (E1xxx).
    pub fn is_parser_error(&self) -> bool {
        matches!(self, ErrorCode::E1001 | ErrorCode::E1002 | ErrorCode::E1003)
    }

    /// Check if this is an evaluation error (E6xxx).
    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }

    /// Check if this is a resource error (E9xxx).
    pub fn is_resource_error(&self) -> bool {
        matches!(self, ErrorCode::E9001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str() == s)
            .ok_or(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
