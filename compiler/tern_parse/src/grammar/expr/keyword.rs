//! `super` and `self` references.
//!
//! Both keywords share one continuation grammar:
//!
//! ```text
//! .init          initializer delegation
//! .identifier    member access
//! [e1, ..., en]  subscript
//! ```
//!
//! The keyword alone is a complete expression for `self` but not for `super`.

use tern_ir::{Expr, ExprKind, ExpressionList, SelfKind, Span, SuperclassKind, Token, TokenKind};
use tracing::trace;

use super::recognize_bracketed_list;
use crate::Recognized;

/// What follows the keyword.
enum Suffix {
    Method(String),
    Initializer,
    Subscript(ExpressionList),
}

/// Recognize a continuation; `tokens` starts right after the keyword.
///
/// The node carries the span of the last consumed token so the caller can
/// close its own range.
fn recognize_suffix(tokens: &[Token]) -> Recognized<(Suffix, Span)> {
    match tokens {
        [dot, member, ..] if dot.kind == TokenKind::Dot => match &member.kind {
            TokenKind::Init => Recognized::matched((Suffix::Initializer, member.span), 2),
            TokenKind::Ident(name) => {
                Recognized::matched((Suffix::Method(name.clone()), member.span), 2)
            }
            _ => Recognized::no_match(),
        },
        [open, ..] if open.kind == TokenKind::LBracket => recognize_bracketed_list(tokens)
            .map(|(arguments, span)| (Suffix::Subscript(arguments), span)),
        _ => Recognized::no_match(),
    }
}

/// `super.name`, `super[args]`, `super.init`
pub fn recognize_superclass(tokens: &[Token]) -> Recognized<Expr> {
    let Some((keyword, rest)) = tokens.split_first() else {
        return Recognized::no_match();
    };
    if keyword.kind != TokenKind::Super {
        return Recognized::no_match();
    }

    match recognize_suffix(rest) {
        Recognized::Matched {
            node: (suffix, end),
            advanced_by,
        } => {
            let kind = match suffix {
                Suffix::Method(name) => SuperclassKind::Method(name),
                Suffix::Initializer => SuperclassKind::Initializer,
                Suffix::Subscript(arguments) => SuperclassKind::Subscript(arguments),
            };
            Recognized::matched(
                Expr::new(ExprKind::Superclass(kind), keyword.span.merge(end)),
                advanced_by + 1,
            )
        }
        Recognized::NoMatch => {
            trace!(
                next = rest.first().map_or("end of input", |t| t.kind.display_name()),
                "`super` without a valid continuation"
            );
            Recognized::no_match()
        }
    }
}

/// `self`, `self.name`, `self[args]`, `self.init`
pub fn recognize_self(tokens: &[Token]) -> Recognized<Expr> {
    let Some((keyword, rest)) = tokens.split_first() else {
        return Recognized::no_match();
    };
    if keyword.kind != TokenKind::SelfLower {
        return Recognized::no_match();
    }

    let (kind, span, advanced_by) = match recognize_suffix(rest) {
        Recognized::Matched {
            node: (suffix, end),
            advanced_by,
        } => {
            let kind = match suffix {
                Suffix::Method(name) => SelfKind::Method(name),
                Suffix::Initializer => SelfKind::Initializer,
                Suffix::Subscript(arguments) => SelfKind::Subscript(arguments),
            };
            (kind, keyword.span.merge(end), advanced_by + 1)
        }
        Recognized::NoMatch => (SelfKind::SelfKeyword, keyword.span, 1),
    };

    Recognized::matched(Expr::new(ExprKind::SelfExpr(kind), span), advanced_by)
}
