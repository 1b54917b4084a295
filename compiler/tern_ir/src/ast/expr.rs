//! Expression nodes.

use std::fmt;

use tern_stack::ensure_sufficient_stack;

use super::write_comma_separated;
use crate::{Span, Spanned};

/// Ordered expression sequence; position is argument position.
pub type ExpressionList = Vec<Expr>;

/// Expression node.
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    pub fn identifier(name: impl Into<String>, span: Span) -> Self {
        Expr::new(ExprKind::Identifier { name: name.into() }, span)
    }

    pub fn literal(kind: LiteralKind, span: Span) -> Self {
        Expr::new(ExprKind::Literal(kind), span)
    }
}

impl Expr {
    /// Detach the subscript arguments of this node, if it has any.
    fn take_arguments(&mut self) -> ExpressionList {
        match &mut self.kind {
            ExprKind::Superclass(SuperclassKind::Subscript(arguments))
            | ExprKind::SelfExpr(SelfKind::Subscript(arguments)) => std::mem::take(arguments),
            _ => ExpressionList::new(),
        }
    }
}

/// Nested subscripts are freed with a worklist; the derived drop glue would
/// recurse once per nesting level.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = self.take_arguments();
        while let Some(mut expr) = pending.pop() {
            pending.append(&mut expr.take_arguments());
        }
    }
}

impl Spanned for Expr {
    fn span(&self) -> Span {
        self.span
    }
}

/// Expression variants handled by the primary-expression grammar.
#[derive(Clone, Debug, PartialEq)]
pub enum ExprKind {
    /// Variable or function reference: `foo`
    Identifier { name: String },

    /// Literal: `42`, `"text"`, `true`, `nil`
    Literal(LiteralKind),

    /// Reference to the superclass: `super.foo`, `super[i]`, `super.init`
    Superclass(SuperclassKind),

    /// Reference to the current instance: `self`, `self.foo`, `self[i]`, `self.init`
    SelfExpr(SelfKind),
}

impl ExprKind {
    /// Discriminant name used as the heading of a dump.
    pub fn node_name(&self) -> &'static str {
        match self {
            ExprKind::Identifier { .. } => "identifier_expr",
            ExprKind::Literal(_) => "literal_expr",
            ExprKind::Superclass(_) => "superclass_expr",
            ExprKind::SelfExpr(_) => "self_expr",
        }
    }
}

/// Literal values. Numeric and string literals keep their raw source text.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralKind {
    Nil,
    Boolean(bool),
    Integer { value: i64, raw: String },
    FloatingPoint { value: f64, raw: String },
    StaticString { value: String, raw: String },
}

impl LiteralKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            LiteralKind::Nil => "nil",
            LiteralKind::Boolean(_) => "boolean",
            LiteralKind::Integer { .. } => "integer",
            LiteralKind::FloatingPoint { .. } => "floating_point",
            LiteralKind::StaticString { .. } => "string",
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::Nil => f.write_str("nil"),
            LiteralKind::Boolean(b) => write!(f, "{b}"),
            LiteralKind::Integer { raw, .. }
            | LiteralKind::FloatingPoint { raw, .. }
            | LiteralKind::StaticString { raw, .. } => f.write_str(raw),
        }
    }
}

/// What follows the `super` keyword.
#[derive(Clone, Debug, PartialEq)]
pub enum SuperclassKind {
    Method(String),
    Subscript(ExpressionList),
    Initializer,
}

/// What follows the `self` keyword, if anything.
#[derive(Clone, Debug, PartialEq)]
pub enum SelfKind {
    SelfKeyword,
    Method(String),
    Subscript(ExpressionList),
    Initializer,
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| self.fmt_kind(f))
    }
}

impl Expr {
    fn fmt_kind(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier { name } => f.write_str(name),
            ExprKind::Literal(literal) => write!(f, "{literal}"),
            ExprKind::Superclass(kind) => match kind {
                SuperclassKind::Method(name) => write!(f, "super.{name}"),
                SuperclassKind::Subscript(args) => write_subscript(f, "super", args),
                SuperclassKind::Initializer => f.write_str("super.init"),
            },
            ExprKind::SelfExpr(kind) => match kind {
                SelfKind::SelfKeyword => f.write_str("self"),
                SelfKind::Method(name) => write!(f, "self.{name}"),
                SelfKind::Subscript(args) => write_subscript(f, "self", args),
                SelfKind::Initializer => f.write_str("self.init"),
            },
        }
    }
}

fn write_subscript(f: &mut fmt::Formatter<'_>, keyword: &str, args: &[Expr]) -> fmt::Result {
    write!(f, "{keyword}[")?;
    write_comma_separated(f, args)?;
    f.write_str("]")
}
