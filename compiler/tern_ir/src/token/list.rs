//! Token list: the token stream of one source unit.

use std::ops::Index;

use super::{Token, TokenKind};
use crate::Span;

/// An ordered list of tokens for one source unit.
///
/// A list produced by the lexer always ends with exactly one `Eof` token;
/// `with_eof` restores that invariant for hand-built lists.
#[derive(Clone, Default, Debug, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
        }
    }

    /// Build a list from tokens, appending an `Eof` after the last one if missing.
    pub fn with_eof(tokens: Vec<Token>) -> Self {
        let mut list = TokenList { tokens };
        if !matches!(list.tokens.last(), Some(t) if t.kind == TokenKind::Eof) {
            let end = list.tokens.last().map_or(0, |t| t.span.end);
            list.tokens.push(Token::new(TokenKind::Eof, Span::point(end)));
        }
        list
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds without spans, handy for assertions.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
