//! Bracketed expression lists.

use tern_ir::{ExpressionList, Span, Token, TokenKind};
use tracing::trace;

use super::recognize_primary;
use crate::Recognized;

/// `[e1, e2, ...]` with at least one element and no trailing comma.
///
/// The node is the element list plus the span from `[` to `]`; the count
/// includes both brackets. Elements are primary expressions, so nested
/// subscripts such as `super[self[0]]` recurse through here.
pub fn recognize_bracketed_list(tokens: &[Token]) -> Recognized<(ExpressionList, Span)> {
    let Some(open) = tokens.first().filter(|t| t.kind == TokenKind::LBracket) else {
        return Recognized::no_match();
    };

    let mut elements = ExpressionList::new();
    let mut pos = 1;
    loop {
        let rest = tokens.get(pos..).unwrap_or_default();
        let Recognized::Matched { node, advanced_by } = recognize_primary(rest) else {
            trace!(element = elements.len(), "list element did not match");
            return Recognized::no_match();
        };
        elements.push(node);
        pos += advanced_by;

        match tokens.get(pos).map(|t| (&t.kind, t.span)) {
            Some((TokenKind::Comma, _)) => pos += 1,
            Some((TokenKind::RBracket, close)) => {
                return Recognized::matched((elements, open.span.merge(close)), pos + 1);
            }
            _ => {
                trace!(pos, "list is not closed by `]`");
                return Recognized::no_match();
            }
        }
    }
}
