//! Expression parser for Tern.
//!
//! Recognition and commitment are split. The `recognize_*` functions are
//! pure: they inspect a token slice and report how many tokens a construct
//! would span. `Parser` owns the cursor and is the only thing that moves it.

mod cursor;
mod error;
mod grammar;
mod outcome;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};
pub use grammar::expr::{
    recognize_bracketed_list, recognize_expression, recognize_identifier, recognize_literal,
    recognize_primary, recognize_self, recognize_superclass,
};
pub use outcome::Recognized;

use std::sync::Once;

use tern_ir::{Expr, TokenList};
use tracing::debug;

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser at the start of `tokens`.
    pub fn new(tokens: &'a TokenList) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
        }
    }

    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Parse one expression and advance past it.
    ///
    /// On failure the cursor does not move.
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let remaining = self.cursor.remaining();
        match recognize_expression(remaining) {
            Recognized::Matched { node, advanced_by } => {
                self.cursor.advance_by(advanced_by);
                debug!(
                    node = node.kind.node_name(),
                    advanced_by,
                    position = self.cursor.position(),
                    "parsed expression"
                );
                Ok(node)
            }
            Recognized::NoMatch => {
                let error =
                    grammar::expr::explain_no_match(remaining, self.cursor.current_span());
                debug!(code = %error.code(), span = ?error.span, "no expression");
                Err(error)
            }
        }
    }
}

/// Parse a single expression from the start of `tokens`.
pub fn parse_expression(tokens: &TokenList) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=tern_parse=debug` or
/// `RUST_LOG=tern_parse=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
