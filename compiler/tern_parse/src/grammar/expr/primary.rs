//! Primary expressions: literals, identifiers and keyword-led references.

use tern_ir::{Expr, LiteralKind, Token, TokenKind};
use tern_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use super::{recognize_self, recognize_superclass};
use crate::{one_of, Recognized};

/// Recognize a primary expression.
///
/// Each alternative returns `NoMatch` unless its head token fits, so the
/// order only matters for speed. Subscript arguments re-enter here, so
/// each nesting level gets a stack check.
pub fn recognize_primary(tokens: &[Token]) -> Recognized<Expr> {
    ensure_sufficient_stack(|| recognize_primary_inner(tokens))
}

fn recognize_primary_inner(tokens: &[Token]) -> Recognized<Expr> {
    if let Some(head) = tokens.first() {
        debug!(
            kind = head.kind.display_name(),
            span_start = head.span.start,
            span_end = head.span.end,
            "recognize_primary"
        );
    }

    one_of!(
        recognize_literal(tokens),
        recognize_identifier(tokens),
        recognize_superclass(tokens),
        recognize_self(tokens)
    )
}

/// `foo`
pub fn recognize_identifier(tokens: &[Token]) -> Recognized<Expr> {
    match tokens.first() {
        Some(Token {
            kind: TokenKind::Ident(name),
            span,
        }) => Recognized::matched(Expr::identifier(name.clone(), *span), 1),
        _ => Recognized::no_match(),
    }
}

/// `42`, `0xff`, `3.5`, `"text"`, `true`, `nil`
pub fn recognize_literal(tokens: &[Token]) -> Recognized<Expr> {
    let Some(head) = tokens.first() else {
        return Recognized::no_match();
    };

    let kind = match &head.kind {
        TokenKind::Nil => LiteralKind::Nil,
        TokenKind::True => LiteralKind::Boolean(true),
        TokenKind::False => LiteralKind::Boolean(false),
        TokenKind::Int(raw) => {
            let Some(value) = parse_integer(raw) else {
                trace!(raw = raw.as_str(), "integer literal out of range");
                return Recognized::no_match();
            };
            LiteralKind::Integer {
                value,
                raw: raw.clone(),
            }
        }
        TokenKind::Float(raw) => {
            let Ok(value) = raw.replace('_', "").parse::<f64>() else {
                trace!(raw = raw.as_str(), "malformed floating point literal");
                return Recognized::no_match();
            };
            LiteralKind::FloatingPoint {
                value,
                raw: raw.clone(),
            }
        }
        TokenKind::Str { value, raw } => LiteralKind::StaticString {
            value: value.clone(),
            raw: raw.clone(),
        },
        _ => return Recognized::no_match(),
    };

    Recognized::matched(Expr::literal(kind, head.span), 1)
}

/// Integer value of a literal, honouring `0x`/`0o`/`0b` prefixes and `_`.
fn parse_integer(raw: &str) -> Option<i64> {
    let digits = raw.replace('_', "");
    let (radix, body) = match digits.get(..2) {
        Some("0x" | "0X") => (16, &digits[2..]),
        Some("0o" | "0O") => (8, &digits[2..]),
        Some("0b" | "0B") => (2, &digits[2..]),
        _ => (10, digits.as_str()),
    };
    i64::from_str_radix(body, radix).ok()
}
