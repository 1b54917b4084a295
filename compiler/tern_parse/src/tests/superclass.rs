use pretty_assertions::assert_eq;
use tern_diagnostic::ErrorCode;
use tern_ir::{Expr, ExprKind, LiteralKind, Span, SuperclassKind};

use super::{lex, parse_source};
use crate::{recognize_superclass, ParseErrorKind, Parser, Recognized};

fn subscript_arguments(expr: &Expr) -> &[Expr] {
    match &expr.kind {
        ExprKind::Superclass(SuperclassKind::Subscript(arguments)) => arguments,
        other => panic!("expected superclass subscript, got {other:?}"),
    }
}

#[test]
fn test_super_method() {
    let tokens = lex("super.foo");
    let outcome = recognize_superclass(tokens.as_slice());

    assert_eq!(outcome.advanced_by(), 3);
    let expr = outcome.into_node().unwrap();
    assert_eq!(
        expr.kind,
        ExprKind::Superclass(SuperclassKind::Method("foo".to_owned()))
    );
    assert_eq!(expr.span, Span::new(0, 9));
}

#[test]
fn test_super_initializer() {
    let tokens = lex("super.init");
    let outcome = recognize_superclass(tokens.as_slice());

    assert_eq!(outcome.advanced_by(), 3);
    assert_eq!(
        outcome.into_node().unwrap().kind,
        ExprKind::Superclass(SuperclassKind::Initializer)
    );
}

#[test]
fn test_super_init_is_not_a_method() {
    let expr = parse_source("super.init").unwrap();
    assert!(!matches!(
        expr.kind,
        ExprKind::Superclass(SuperclassKind::Method(_))
    ));
}

#[test]
fn test_super_single_subscript() {
    let tokens = lex("super[0]");
    let outcome = recognize_superclass(tokens.as_slice());

    assert_eq!(outcome.advanced_by(), 4);
    let expr = outcome.into_node().unwrap();
    let arguments = subscript_arguments(&expr);
    assert_eq!(arguments.len(), 1);
    assert!(matches!(
        arguments[0].kind,
        ExprKind::Literal(LiteralKind::Integer { value: 0, .. })
    ));
}

#[test]
fn test_super_subscript_literal_arguments() {
    let expr = parse_source("super[0, 1, 5]").unwrap();
    let values: Vec<i64> = subscript_arguments(&expr)
        .iter()
        .map(|arg| match &arg.kind {
            ExprKind::Literal(LiteralKind::Integer { value, .. }) => *value,
            other => panic!("expected integer literal, got {other:?}"),
        })
        .collect();

    assert_eq!(values, vec![0, 1, 5]);
}

#[test]
fn test_super_subscript_ignores_whitespace() {
    let tokens = lex("super [ foo,   0, bar,1, 5 ] ");
    let outcome = recognize_superclass(tokens.as_slice());

    // super [ foo , 0 , bar , 1 , 5 ]
    assert_eq!(outcome.advanced_by(), 12);
    let expr = outcome.into_node().unwrap();
    assert_eq!(subscript_arguments(&expr).len(), 5);
    assert_eq!(expr.to_string(), "super[foo, 0, bar, 1, 5]");
}

#[test]
fn test_super_subscript_mixed_arguments() {
    let expr = parse_source(r#"super["key", self, nil, 2.5]"#).unwrap();
    let names: Vec<&str> = subscript_arguments(&expr)
        .iter()
        .map(|arg| arg.kind.node_name())
        .collect();

    assert_eq!(
        names,
        vec!["literal_expr", "self_expr", "literal_expr", "literal_expr"]
    );
}

#[test]
fn test_super_nested_subscript() {
    let expr = parse_source("super[super[0], self.count]").unwrap();
    let arguments = subscript_arguments(&expr);

    assert_eq!(arguments.len(), 2);
    assert_eq!(arguments[0].to_string(), "super[0]");
    assert_eq!(arguments[1].to_string(), "self.count");
}

#[test]
fn test_spans_cover_children() {
    let expr = parse_source("super[alpha, 42]").unwrap();

    assert_eq!(expr.span, Span::new(0, 16));
    for argument in subscript_arguments(&expr) {
        assert!(expr.span.contains_span(argument.span));
    }
}

#[test]
fn test_rejected_forms_do_not_match() {
    for source in [
        "super",
        "super.",
        "super.123",
        "super[]",
        "super[a,]",
        "super[a b]",
        "super(",
        "super..foo",
        "foo",
    ] {
        let tokens = lex(source);
        let outcome = recognize_superclass(tokens.as_slice());
        assert!(!outcome.is_match(), "`{source}` should not match");
        assert_eq!(outcome.advanced_by(), 0, "`{source}`");
    }
}

#[test]
fn test_failed_parse_leaves_cursor() {
    let tokens = lex("super[a,]");
    let mut parser = Parser::new(&tokens);

    assert!(parser.parse_expression().is_err());
    assert_eq!(parser.position(), 0);
}

#[test]
fn test_parse_advances_past_expression() {
    let tokens = lex("super.foo bar");
    let mut parser = Parser::new(&tokens);

    parser.parse_expression().unwrap();
    assert_eq!(parser.position(), 3);

    let next = parser.parse_expression().unwrap();
    assert_eq!(next, Expr::identifier("bar", Span::new(10, 13)));
    assert!(parser.cursor().is_at_end());
}

#[test]
fn test_error_after_bare_super() {
    let error = parse_source("super").unwrap_err();

    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(
        error.kind,
        ParseErrorKind::UnexpectedToken {
            after: "`super`",
            expected: "`.` or `[`",
            found: "end of file".to_owned(),
        }
    );
}

#[test]
fn test_error_bad_member() {
    let error = parse_source("super.123").unwrap_err();

    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.span, Span::new(6, 9));
    assert_eq!(
        error.to_string(),
        "error[E1001]: expected identifier or `init` after `super.`, found integer literal"
    );
}

#[test]
fn test_error_empty_subscript() {
    let error = parse_source("super[]").unwrap_err();

    assert_eq!(error.code(), ErrorCode::E1002);
    assert_eq!(error.span, Span::new(6, 7));
}

#[test]
fn test_error_trailing_comma() {
    let error = parse_source("super[a,]").unwrap_err();

    assert_eq!(error.code(), ErrorCode::E1002);
    assert_eq!(error.span, Span::new(8, 9));
}

#[test]
fn test_error_missing_separator() {
    let error = parse_source("super[a b]").unwrap_err();

    assert_eq!(error.code(), ErrorCode::E1001);
    assert_eq!(error.span, Span::new(8, 9));
}

#[test]
fn test_error_unclosed_subscript() {
    let error = parse_source("super[a, b").unwrap_err();

    assert_eq!(error.kind, ParseErrorKind::UnclosedDelimiter { delimiter: '[' });
    assert_eq!(error.code(), ErrorCode::E1003);
    assert_eq!(error.span, Span::new(5, 6));
}

#[test]
fn test_error_invalid_token() {
    let error = parse_source("$").unwrap_err();
    assert_eq!(error.code(), ErrorCode::E0001);
}

#[test]
fn test_recognize_is_pure() {
    let tokens = lex("super[a, b]");
    let first = recognize_superclass(tokens.as_slice());
    let second = recognize_superclass(tokens.as_slice());

    assert_eq!(first, second);
    assert!(matches!(first, Recognized::Matched { advanced_by: 6, .. }));
}

#[test]
fn test_deeply_nested_subscripts() {
    const DEPTH: usize = 10_000;
    let source = format!("{}0{}", "super[".repeat(DEPTH), "]".repeat(DEPTH));
    let tokens = lex(&source);
    let mut parser = Parser::new(&tokens);

    let expr = parser.parse_expression().unwrap();
    // super [ ... ] per level, plus the innermost literal
    assert_eq!(parser.position(), 3 * DEPTH + 1);
    assert!(parser.cursor().is_at_end());

    let mut depth = 0;
    let mut node = &expr;
    while let ExprKind::Superclass(SuperclassKind::Subscript(arguments)) = &node.kind {
        assert_eq!(arguments.len(), 1);
        depth += 1;
        node = &arguments[0];
    }
    assert_eq!(depth, DEPTH);
    assert_eq!(expr.to_string(), source);
}

#[test]
fn test_comments_between_tokens() {
    let expr = parse_source("super /* member */ .foo").unwrap();
    assert_eq!(
        expr.kind,
        ExprKind::Superclass(SuperclassKind::Method("foo".to_owned()))
    );
    assert_eq!(expr.span, Span::new(0, 23));
}
