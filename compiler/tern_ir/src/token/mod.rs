//! Tokens produced by the lexer and consumed by the parser.

mod list;


use std::fmt;

use crate::{Span, Spanned};

pub use list::TokenList;

/// A lexical token with its source span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing/generated code.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

/// Token kinds.
///
/// Literal tokens keep their raw source text; numeric values are computed by
/// the parser so that out-of-range literals surface as parse failures rather
/// than lexer errors.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenKind {
    // Literals
    /// Integer literal, raw text (`42`, `0xff`, `1_000`).
    Int(String),
    /// Floating point literal, raw text (`3.14`, `1e10`).
    Float(String),
    /// String literal: unescaped value plus raw text including quotes.
    Str { value: String, raw: String },

    Ident(String),

    // Keywords
    Super,
    SelfLower,
    Init,
    Let,
    Var,
    Case,
    True,
    False,
    Nil,
    Throws,
    Rethrows,

    // Punctuation
    Dot,
    Comma,
    Colon,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Arrow,
    Eq,
    Question,
    Bang,
    At,
    Hash,
    Star,
    Ellipsis,
    Underscore,

    /// Input the lexer could not make sense of.
    Error,
    /// End of the token stream; always the last token of a `TokenList`.
    Eof,
}

impl TokenKind {
    /// Map a reserved word to its keyword kind.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        let kind = match text {
            "super" => TokenKind::Super,
            "self" => TokenKind::SelfLower,
            "init" => TokenKind::Init,
            "let" => TokenKind::Let,
            "var" => TokenKind::Var,
            "case" => TokenKind::Case,
            "true" => TokenKind::True,
            "false" => TokenKind::False,
            "nil" => TokenKind::Nil,
            "throws" => TokenKind::Throws,
            "rethrows" => TokenKind::Rethrows,
            _ => return None,
        };
        Some(kind)
    }

    /// Is this a literal token (including `true`, `false`, `nil`)?
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int(_)
                | TokenKind::Float(_)
                | TokenKind::Str { .. }
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Nil
        )
    }

    /// Human-readable name used in error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer literal",
            TokenKind::Float(_) => "floating point literal",
            TokenKind::Str { .. } => "string literal",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Super => "`super`",
            TokenKind::SelfLower => "`self`",
            TokenKind::Init => "`init`",
            TokenKind::Let => "`let`",
            TokenKind::Var => "`var`",
            TokenKind::Case => "`case`",
            TokenKind::True => "`true`",
            TokenKind::False => "`false`",
            TokenKind::Nil => "`nil`",
            TokenKind::Throws => "`throws`",
            TokenKind::Rethrows => "`rethrows`",
            TokenKind::Dot => "`.`",
            TokenKind::Comma => "`,`",
            TokenKind::Colon => "`:`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::Arrow => "`->`",
            TokenKind::Eq => "`=`",
            TokenKind::Question => "`?`",
            TokenKind::Bang => "`!`",
            TokenKind::At => "`@`",
            TokenKind::Hash => "`#`",
            TokenKind::Star => "`*`",
            TokenKind::Ellipsis => "`...`",
            TokenKind::Underscore => "`_`",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of file",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(raw) | TokenKind::Float(raw) | TokenKind::Ident(raw) => f.write_str(raw),
            TokenKind::Str { raw, .. } => f.write_str(raw),
            TokenKind::Super => f.write_str("super"),
            TokenKind::SelfLower => f.write_str("self"),
            TokenKind::Init => f.write_str("init"),
            TokenKind::Let => f.write_str("let"),
            TokenKind::Var => f.write_str("var"),
            TokenKind::Case => f.write_str("case"),
            TokenKind::True => f.write_str("true"),
            TokenKind::False => f.write_str("false"),
            TokenKind::Nil => f.write_str("nil"),
            TokenKind::Throws => f.write_str("throws"),
            TokenKind::Rethrows => f.write_str("rethrows"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Comma => f.write_str(","),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::LBracket => f.write_str("["),
            TokenKind::RBracket => f.write_str("]"),
            TokenKind::LBrace => f.write_str("{"),
            TokenKind::RBrace => f.write_str("}"),
            TokenKind::Arrow => f.write_str("->"),
            TokenKind::Eq => f.write_str("="),
            TokenKind::Question => f.write_str("?"),
            TokenKind::Bang => f.write_str("!"),
            TokenKind::At => f.write_str("@"),
            TokenKind::Hash => f.write_str("#"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Ellipsis => f.write_str("..."),
            TokenKind::Underscore => f.write_str("_"),
            TokenKind::Error => f.write_str("<error>"),
            TokenKind::Eof => f.write_str("<eof>"),
        }
    }
}
