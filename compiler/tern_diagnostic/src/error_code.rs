//! Error codes for front-end diagnostics.
//!
//! Format: E#### where first digit indicates phase:
//! - E0xxx: Lexer errors
//! - E1xxx: Parser errors
//! - E9xxx: Internal errors (a bug upstream, not bad input)

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Invalid character in source
    E0001,
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Internal invariant violated
    E9001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E9001,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line summary, used by `--explain`-style listings.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "invalid character in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E9001 => "internal invariant violated",
        }
    }

    pub fn is_parser_error(self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_internal_error(self) -> bool {
        self.as_str().starts_with("E9")
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
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
