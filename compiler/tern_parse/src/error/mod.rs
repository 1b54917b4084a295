//! Parse error types.
//!
//! Only the committing entry point produces errors. Cursor-free recognizers
//! report `Recognized::NoMatch` instead, which never escapes the parser.

use tern_diagnostic::ErrorCode;
use tern_ir::{Span, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// An expression position held something that starts no expression.
    #[error("expected expression, found {found}")]
    ExpectedExpression { found: String },

    /// A keyword was followed by a token that cannot continue it.
    #[error("expected {expected} after {after}, found {found}")]
    UnexpectedToken {
        after: &'static str,
        expected: &'static str,
        found: String,
    },

    /// An opening delimiter was never closed.
    #[error("unclosed delimiter `{delimiter}`")]
    UnclosedDelimiter { delimiter: char },

    /// The lexer could not tokenize the input here.
    #[error("invalid character in source")]
    InvalidToken,
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::InvalidToken => ErrorCode::E0001,
        }
    }
}

/// Parse error with error code and location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("error[{code}]: {kind}", code = .kind.code())]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Span of the offending token.
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn expected_expression(found: &TokenKind, span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::ExpectedExpression {
                found: found.display_name().to_owned(),
            },
            span,
        )
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }
}
