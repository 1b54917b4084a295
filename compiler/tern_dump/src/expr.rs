//! Per-variant rendering of expressions.

use tern_ir::{Expr, ExprKind, SelfKind, SuperclassKind};
use tern_stack::ensure_sufficient_stack;

use crate::{indent, Dumper};

/// A node that renders itself as a range-annotated dump.
pub trait TtyDump {
    fn tty_dump(&self, dumper: &Dumper<'_>) -> String;
}

impl TtyDump for Expr {
    fn tty_dump(&self, dumper: &Dumper<'_>) -> String {
        ensure_sufficient_stack(|| dump_expr_node(self, dumper))
    }
}

fn dump_expr_node(expr: &Expr, dumper: &Dumper<'_>) -> String {
    let heading = dumper.node(expr.kind.node_name(), expr.span);
    let body = match &expr.kind {
        ExprKind::Identifier { name } => format!("identifier: `{name}`"),
        ExprKind::Literal(literal) => {
            format!("kind: `{}`, literal: `{literal}`", literal.kind_name())
        }
        ExprKind::Superclass(kind) => match kind {
            SuperclassKind::Method(name) => method(name),
            SuperclassKind::Subscript(arguments) => subscript(dumper, arguments),
            SuperclassKind::Initializer => "kind: `initializer`".to_owned(),
        },
        ExprKind::SelfExpr(kind) => match kind {
            SelfKind::SelfKeyword => "kind: `self`".to_owned(),
            SelfKind::Method(name) => method(name),
            SelfKind::Subscript(arguments) => subscript(dumper, arguments),
            SelfKind::Initializer => "kind: `initializer`".to_owned(),
        },
    };
    format!("{heading}\n{body}")
}

fn method(name: &str) -> String {
    format!("kind: `method`, name: `{name}`")
}

fn subscript(dumper: &Dumper<'_>, arguments: &[Expr]) -> String {
    format!(
        "kind: `subscript`\narguments:\n{}",
        indent(&dumper.expressions(arguments))
    )
}
