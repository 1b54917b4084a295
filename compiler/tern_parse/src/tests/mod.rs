//! Parser tests.
//!
//! - `superclass`: `super` references, committed and rejected
//! - `primary`: literals, identifiers and `self` references
//! - `properties`: generated inputs

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

mod superclass;

use crate::{parse_expression, ParseError};
use tern_ir::{Expr, TokenList};

fn lex(source: &str) -> TokenList {
    tern_lexer::lex(source)
}

fn parse_source(source: &str) -> Result<Expr, ParseError> {
    parse_expression(&lex(source))
}
