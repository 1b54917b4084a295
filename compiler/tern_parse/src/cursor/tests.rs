use super::*;

fn tokens(kinds: Vec<TokenKind>) -> TokenList {
    let spanned = kinds
        .into_iter()
        .enumerate()
        .map(|(i, kind)| {
            let start = u32::try_from(i).unwrap_or(0) * 2;
            Token::new(kind, Span::new(start, start + 1))
        })
        .collect();
    TokenList::with_eof(spanned)
}

#[test]
fn test_current_and_peek() {
    let list = tokens(vec![TokenKind::Super, TokenKind::Dot, TokenKind::Init]);
    let cursor = Cursor::new(&list);

    assert_eq!(cursor.position(), 0);
    assert_eq!(cursor.current().map(|t| &t.kind), Some(&TokenKind::Super));
    assert_eq!(cursor.peek_kind_at(1), &TokenKind::Dot);
    assert_eq!(cursor.peek_kind_at(2), &TokenKind::Init);
    assert_eq!(cursor.peek_kind_at(3), &TokenKind::Eof);
    assert_eq!(cursor.peek_kind_at(99), &TokenKind::Eof);
    assert_eq!(cursor.remaining().len(), 4);
}

#[test]
fn test_advance_by_commits() {
    let list = tokens(vec![TokenKind::Super, TokenKind::Dot, TokenKind::Init]);
    let mut cursor = Cursor::new(&list);

    cursor.advance_by(2);
    assert_eq!(cursor.position(), 2);
    assert_eq!(cursor.current_kind(), &TokenKind::Init);
    assert_eq!(cursor.remaining().len(), 2);
}

#[test]
fn test_advance_by_stops_at_eof() {
    let list = tokens(vec![TokenKind::Super]);
    let mut cursor = Cursor::new(&list);

    cursor.advance_by(10);
    assert_eq!(cursor.position(), 1);
    assert!(cursor.is_at_end());
    assert!(cursor.current().is_none());
    assert_eq!(cursor.current_kind(), &TokenKind::Eof);
    assert_eq!(cursor.current_span(), Span::point(1));
}

#[test]
fn test_empty_list_without_eof() {
    let list = TokenList::new();
    let mut cursor = Cursor::new(&list);

    assert!(cursor.is_at_end());
    assert!(cursor.remaining().is_empty());
    assert_eq!(cursor.current_span(), Span::DUMMY);
    cursor.advance_by(1);
    assert_eq!(cursor.position(), 0);
}
