//! Expression recognizers.
//!
//! Every recognizer takes the token slice starting at the head token and
//! returns a `Recognized` without side effects. Higher rules (binary
//! operators, casts, statements) wrap `recognize_expression` and may call
//! it speculatively.

mod keyword;
mod list;
mod primary;

pub use keyword::{recognize_self, recognize_superclass};
pub use list::recognize_bracketed_list;
pub use primary::{recognize_identifier, recognize_literal, recognize_primary};

use tern_ir::{Expr, Span, Token, TokenKind};
use tracing::trace;

use crate::{ParseError, ParseErrorKind, Recognized};

/// Recognize one expression at the front of `tokens`.
///
/// The full expression grammar composes on top of primary expressions; this
/// entry point is the seam it wraps.
pub fn recognize_expression(tokens: &[Token]) -> Recognized<Expr> {
    let outcome = recognize_primary(tokens);
    trace!(
        matched = outcome.is_match(),
        advanced_by = outcome.advanced_by(),
        "recognize_expression"
    );
    outcome
}

/// Build the error reported when nothing matched at the front of `tokens`.
///
/// Keyword-led failures get a precise message; everything else is
/// "expected expression".
pub(crate) fn explain_no_match(tokens: &[Token], fallback_span: Span) -> ParseError {
    let Some(head) = tokens.first() else {
        return ParseError::expected_expression(&TokenKind::Eof, fallback_span);
    };

    match &head.kind {
        TokenKind::Error => ParseError::new(ParseErrorKind::InvalidToken, head.span),
        TokenKind::Super => explain_superclass(head, &tokens[1..]),
        other => ParseError::expected_expression(other, head.span),
    }
}

fn explain_superclass(keyword: &Token, rest: &[Token]) -> ParseError {
    let end = Span::point(keyword.span.end);
    match rest {
        [open, ..] if open.kind == TokenKind::LBracket
            && !rest.iter().any(|t| t.kind == TokenKind::RBracket) =>
        {
            ParseError::new(ParseErrorKind::UnclosedDelimiter { delimiter: '[' }, open.span)
        }
        [dot, member, ..] if dot.kind == TokenKind::Dot => ParseError::new(
            ParseErrorKind::UnexpectedToken {
                after: "`super.`",
                expected: "identifier or `init`",
                found: member.kind.display_name().to_owned(),
            },
            member.span,
        ),
        [open, ..] if open.kind == TokenKind::LBracket => explain_list(rest),
        [next, ..] => ParseError::new(
            ParseErrorKind::UnexpectedToken {
                after: "`super`",
                expected: "`.` or `[`",
                found: next.kind.display_name().to_owned(),
            },
            next.span,
        ),
        [] => ParseError::new(
            ParseErrorKind::UnexpectedToken {
                after: "`super`",
                expected: "`.` or `[`",
                found: TokenKind::Eof.display_name().to_owned(),
            },
            end,
        ),
    }
}

/// Find the first element or separator of a bracketed list that went wrong.
fn explain_list(tokens: &[Token]) -> ParseError {
    let mut pos = 1;
    loop {
        let rest = tokens.get(pos..).unwrap_or_default();
        let Recognized::Matched { advanced_by, .. } = recognize_primary(rest) else {
            let (kind, span) = rest
                .first()
                .map_or((&TokenKind::Eof, Span::DUMMY), |t| (&t.kind, t.span));
            return ParseError::expected_expression(kind, span);
        };
        pos += advanced_by;
        match tokens.get(pos) {
            Some(t) if t.kind == TokenKind::Comma => pos += 1,
            Some(t) if t.kind == TokenKind::RBracket => {
                // Mirrors `recognize_bracketed_list`, which would have matched.
                return ParseError::expected_expression(&t.kind, t.span);
            }
            Some(t) => {
                return ParseError::new(
                    ParseErrorKind::UnexpectedToken {
                        after: "subscript argument",
                        expected: "`,` or `]`",
                        found: t.kind.display_name().to_owned(),
                    },
                    t.span,
                )
            }
            None => {
                return ParseError::new(
                    ParseErrorKind::UnclosedDelimiter { delimiter: '[' },
                    tokens.first().map_or(Span::DUMMY, |t| t.span),
                )
            }
        }
    }
}
