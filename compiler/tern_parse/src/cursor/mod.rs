//! Token cursor for navigating the token stream.
//!
//! The cursor is the only mutable state of a parse. Recognizers never touch
//! it: they look at `remaining()` and report how many tokens they would
//! consume, and the parser commits that count with `advance_by`.

use tern_ir::{Span, Token, TokenKind, TokenList};
use tracing::trace;

/// Cursor over one source unit's tokens.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The current token, or `None` once the stream is exhausted.
    ///
    /// The trailing `Eof` token is reported as `None`.
    #[inline]
    pub fn current(&self) -> Option<&'a Token> {
        self.tokens
            .get(self.pos)
            .filter(|token| token.kind != TokenKind::Eof)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        self.peek_kind_at(0)
    }

    /// Span of the current token; at the end, the point after the last token.
    pub fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => self
                .tokens
                .as_slice()
                .last()
                .map_or(Span::DUMMY, |token| Span::point(token.span.end)),
        }
    }

    /// Token kind at offset `n` from the current position; `Eof` past the end.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        static EOF: TokenKind = TokenKind::Eof;
        self.tokens
            .get(self.pos + n)
            .map_or(&EOF, |token| &token.kind)
    }

    /// Look-ahead window starting at the current token.
    #[inline]
    pub fn remaining(&self) -> &'a [Token] {
        self.tokens.as_slice().get(self.pos..).unwrap_or_default()
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current().is_none()
    }

    /// Commit `n` tokens. Never moves past the trailing `Eof`.
    pub fn advance_by(&mut self, n: usize) {
        let limit = match self.tokens.as_slice().last() {
            Some(last) if last.kind == TokenKind::Eof => self.tokens.len() - 1,
            _ => self.tokens.len(),
        };
        let target = (self.pos + n).min(limit);
        trace!(from = self.pos, to = target, "advance_by");
        self.pos = target;
    }
}

#[cfg(test)]
mod tests;
