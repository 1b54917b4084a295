use super::*;
use crate::{Span, Spanned};
use pretty_assertions::assert_eq;

fn int(value: i64) -> Expr {
    Expr::literal(
        LiteralKind::Integer {
            value,
            raw: value.to_string(),
        },
        Span::DUMMY,
    )
}

fn ident(name: &str) -> Expr {
    Expr::identifier(name, Span::DUMMY)
}

#[test]
fn test_superclass_textual_form() {
    let method = Expr::new(
        ExprKind::Superclass(SuperclassKind::Method("foo".into())),
        Span::new(0, 9),
    );
    assert_eq!(method.to_string(), "super.foo");

    let init = Expr::new(ExprKind::Superclass(SuperclassKind::Initializer), Span::DUMMY);
    assert_eq!(init.to_string(), "super.init");

    let subscript = Expr::new(
        ExprKind::Superclass(SuperclassKind::Subscript(vec![
            ident("foo"),
            int(0),
            ident("bar"),
            int(1),
            int(5),
        ])),
        Span::DUMMY,
    );
    assert_eq!(subscript.to_string(), "super[foo, 0, bar, 1, 5]");
}

#[test]
fn test_self_textual_form() {
    let bare = Expr::new(ExprKind::SelfExpr(SelfKind::SelfKeyword), Span::DUMMY);
    assert_eq!(bare.to_string(), "self");

    let subscript = Expr::new(
        ExprKind::SelfExpr(SelfKind::Subscript(vec![int(0)])),
        Span::DUMMY,
    );
    assert_eq!(subscript.to_string(), "self[0]");
}

#[test]
fn test_node_names() {
    assert_eq!(ident("a").kind.node_name(), "identifier_expr");
    assert_eq!(int(1).kind.node_name(), "literal_expr");
    assert_eq!(
        ExprKind::Superclass(SuperclassKind::Initializer).node_name(),
        "superclass_expr"
    );
}

#[test]
fn test_literal_forms() {
    assert_eq!(LiteralKind::Nil.to_string(), "nil");
    assert_eq!(LiteralKind::Boolean(false).to_string(), "false");
    let hex = LiteralKind::Integer {
        value: 255,
        raw: "0xff".into(),
    };
    assert_eq!(hex.to_string(), "0xff");
    assert_eq!(hex.kind_name(), "integer");
    assert_eq!(
        LiteralKind::StaticString {
            value: "hi".into(),
            raw: "\"hi\"".into()
        }
        .to_string(),
        "\"hi\""
    );
}

#[test]
fn test_expr_spanned() {
    let expr = Expr::identifier("x", Span::new(3, 4));
    assert_eq!(expr.span(), Span::new(3, 4));
}

#[test]
fn test_type_forms() {
    let dict = Type::Dictionary {
        key: Box::new(Type::named("String")),
        value: Box::new(Type::Optional(Box::new(Type::named("Int")))),
    };
    assert_eq!(dict.to_string(), "[String: Int?]");

    let generic = Type::Named {
        name: "Result".into(),
        generic_arguments: vec![Type::named("T"), Type::Array(Box::new(Type::named("E")))],
    };
    assert_eq!(generic.to_string(), "Result<T, [E]>");

    let tuple = Type::Tuple(vec![Type::named("Int"), Type::named("String")]);
    assert_eq!(tuple.to_string(), "(Int, String)");
}

#[test]
fn test_function_signature_text() {
    let mut label = Parameter::new("name", Type::named("String"));
    label.external_name = Some("with".into());
    label.default_argument = Some(ident("fallback"));
    let mut rest = Parameter::new("values", Type::named("Int"));
    rest.variadic = true;

    let signature = FunctionSignature {
        parameters: vec![label, rest],
        throws_kind: ThrowsKind::Rethrowing,
        result: Some(FunctionResult {
            attributes: Attributes(vec![Attribute::new("discardable")]),
            ty: Type::named("Bool"),
        }),
    };
    assert_eq!(
        signature.to_string(),
        "(with name: String = fallback, values: Int...) rethrows -> @discardable Bool"
    );
    assert_eq!(FunctionSignature::default().to_string(), "()");
}

#[test]
fn test_condition_text() {
    let availability = AvailabilityCondition {
        arguments: vec![
            AvailabilityArgument::Platform {
                name: "iOS".into(),
                version: Some("10.0".into()),
            },
            AvailabilityArgument::All,
        ],
    };
    assert_eq!(availability.to_string(), "#available(iOS 10.0, *)");

    let case = Condition::Case(
        Pattern::EnumCase {
            type_name: None,
            case_name: "some".into(),
            associated: Some(vec![Pattern::identifier("x")]),
        },
        ident("maybe"),
    );
    assert_eq!(case.to_string(), "case .some(x) = maybe");
    assert_eq!(
        Condition::Let(Pattern::identifier("a"), ident("b")).to_string(),
        "let a = b"
    );
}

#[test]
fn test_pattern_initializer_text() {
    let typed = PatternInitializer::new(
        Pattern::Identifier {
            name: "a".into(),
            type_annotation: Some(Type::named("Int")),
        },
        Some(int(1)),
    );
    assert_eq!(typed.to_string(), "a: Int = 1");

    let tuple = PatternInitializer::new(
        Pattern::Tuple(vec![
            Pattern::identifier("x"),
            Pattern::Wildcard {
                type_annotation: None,
            },
        ]),
        None,
    );
    assert_eq!(tuple.to_string(), "(x, _)");
}

#[test]
fn test_deep_nesting_prints_and_drops() {
    const DEPTH: usize = 100_000;
    let mut expr = int(0);
    for level in 0..DEPTH {
        let kind = if level % 2 == 0 {
            ExprKind::Superclass(SuperclassKind::Subscript(vec![expr]))
        } else {
            ExprKind::SelfExpr(SelfKind::Subscript(vec![expr]))
        };
        expr = Expr::new(kind, Span::DUMMY);
    }

    let text = expr.to_string();
    // `super[` `]` and `self[` `]` alternate around the literal
    assert_eq!(text.len(), DEPTH / 2 * 7 + DEPTH / 2 * 6 + 1);
    assert!(text.starts_with("self[super[self["));
    drop(expr);
}
