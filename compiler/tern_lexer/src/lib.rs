//! Lexer for Tern using logos.
//!
//! Trivia (whitespace, newlines, comments) never reaches the parser, so
//! `super [ foo , 0 ]` and `super[foo,0]` produce the same token kinds.
//! The resulting `TokenList` always ends with an `Eof` token.

mod escape;

use logos::Logos;
use tern_ir::{Span, Token, TokenKind, TokenList};

pub use escape::unescape_string;

/// Raw token from logos, before conversion to `TokenKind`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("/*", block_comment)]
    BlockComment,

    #[token("super")]
    Super,
    #[token("self")]
    SelfLower,
    #[token("init")]
    Init,
    #[token("let")]
    Let,
    #[token("var")]
    Var,
    #[token("case")]
    Case,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("nil")]
    Nil,
    #[token("throws")]
    Throws,
    #[token("rethrows")]
    Rethrows,

    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("->")]
    Arrow,
    #[token("=")]
    Eq,
    #[token("?")]
    Question,
    #[token("!")]
    Bang,
    #[token("@")]
    At,
    #[token("#")]
    Hash,
    #[token("*")]
    Star,
    #[token("_", priority = 3)]
    Underscore,

    #[regex(r"0x[0-9a-fA-F][0-9a-fA-F_]*")]
    #[regex(r"0o[0-7][0-7_]*")]
    #[regex(r"0b[01][01_]*")]
    #[regex(r"[0-9][0-9_]*")]
    Int,

    #[regex(r"[0-9][0-9_]*\.[0-9][0-9_]*([eE][+-]?[0-9][0-9_]*)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9][0-9_]*")]
    Float,

    // No unescaped newlines inside a string literal.
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    String,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Consume a block comment through its closing `*/`.
///
/// Comments do not nest. An unterminated comment swallows the rest of the
/// source and becomes an error token.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> bool {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            true
        }
        None => {
            lex.bump(lex.remainder().len());
            false
        }
    }
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> TokenList {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(RawToken::LineComment | RawToken::BlockComment) => {}
            Ok(raw) => result.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => result.push(Token::new(TokenKind::Error, span)),
        }
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof)));

    result
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::point(u32::MAX))
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int => TokenKind::Int(slice.to_owned()),
        RawToken::Float => TokenKind::Float(slice.to_owned()),
        RawToken::String => TokenKind::Str {
            value: unescape_string(&slice[1..slice.len() - 1]),
            raw: slice.to_owned(),
        },
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),

        RawToken::Super => TokenKind::Super,
        RawToken::SelfLower => TokenKind::SelfLower,
        RawToken::Init => TokenKind::Init,
        RawToken::Let => TokenKind::Let,
        RawToken::Var => TokenKind::Var,
        RawToken::Case => TokenKind::Case,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Nil => TokenKind::Nil,
        RawToken::Throws => TokenKind::Throws,
        RawToken::Rethrows => TokenKind::Rethrows,

        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Arrow => TokenKind::Arrow,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Question => TokenKind::Question,
        RawToken::Bang => TokenKind::Bang,
        RawToken::At => TokenKind::At,
        RawToken::Hash => TokenKind::Hash,
        RawToken::Star => TokenKind::Star,
        RawToken::Underscore => TokenKind::Underscore,

        // Filtered out by `lex` before conversion.
        RawToken::LineComment | RawToken::BlockComment => TokenKind::Error,
    }
}
