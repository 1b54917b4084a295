use super::*;
use std::cell::Cell;

#[test]
fn test_matched() {
    let outcome = Recognized::matched("node", 3);
    assert!(outcome.is_match());
    assert_eq!(outcome.advanced_by(), 3);
    assert_eq!(outcome.node(), Some(&"node"));
    assert_eq!(outcome.into_parts(), (Some("node"), 3));
}

#[test]
fn test_no_match_consumes_nothing() {
    let outcome: Recognized<i32> = Recognized::no_match();
    assert!(!outcome.is_match());
    assert_eq!(outcome.advanced_by(), 0);
    assert_eq!(outcome.into_parts(), (None, 0));
}

#[test]
fn test_map_keeps_count() {
    let outcome = Recognized::matched(21, 2).map(|x| x * 2);
    assert_eq!(outcome, Recognized::matched(42, 2));

    let none: Recognized<i32> = Recognized::NoMatch;
    assert_eq!(none.map(|x| x * 2), Recognized::NoMatch);
}

#[test]
fn test_or_else() {
    let first = Recognized::matched(1, 1).or_else(|| Recognized::matched(2, 5));
    assert_eq!(first.into_node(), Some(1));

    let second = Recognized::NoMatch.or_else(|| Recognized::matched(2, 5));
    assert_eq!(second.into_parts(), (Some(2), 5));
}

#[test]
fn test_one_of_stops_at_first_match() {
    let calls = Cell::new(0);
    let probe = |result: Recognized<&'static str>| {
        calls.set(calls.get() + 1);
        result
    };

    let outcome = crate::one_of!(
        probe(Recognized::NoMatch),
        probe(Recognized::matched("second", 1)),
        probe(Recognized::matched("third", 1)),
    );
    assert_eq!(outcome.into_node(), Some("second"));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_one_of_all_fail() {
    let outcome: Recognized<()> = crate::one_of!(Recognized::NoMatch, Recognized::NoMatch);
    assert_eq!(outcome.advanced_by(), 0);
}
