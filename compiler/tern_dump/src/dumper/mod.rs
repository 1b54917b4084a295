//! Rendering rules for the aggregate shapes shared by many nodes.
//!
//! Node-specific rules live in `TtyDump` impls; they call back into the
//! `Dumper` for headings, child lists and nested indentation.

use tern_diagnostic::SourceUnit;
use tern_ir::{
    Condition, Expr, FunctionResult, FunctionSignature, Pattern, PatternInitializer, Span,
    ThrowsKind,
};
use tracing::error;

use crate::{colored, indent, Color, DumpError, DumpOptions, TtyDump};

/// Marker rendered in place of an empty pattern-initializer list.
pub const NO_PATTERN_INITIALIZERS: &str = "<no_pattern_initializers>";

/// Renders AST fragments of one source unit.
///
/// Rendering is pure: the same node always yields the same text.
#[derive(Clone, Copy, Debug)]
pub struct Dumper<'a> {
    unit: &'a SourceUnit,
    colors: bool,
}

impl<'a> Dumper<'a> {
    pub fn new(unit: &'a SourceUnit, options: DumpOptions) -> Self {
        Dumper {
            unit,
            colors: options.use_colors(),
        }
    }

    pub fn unit(&self) -> &'a SourceUnit {
        self.unit
    }

    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    /// `kind <range: unit:line:col-line:col>`
    pub fn node(&self, name: &str, span: Span) -> String {
        let range = format!("<range: {}>", self.unit.describe(span));
        format!(
            "{} {}",
            colored(name, Color::Magenta, self.colors),
            colored(&range, Color::Yellow, self.colors)
        )
    }

    /// One `index: dump` line per expression; empty for an empty list.
    pub fn expressions(&self, exprs: &[Expr]) -> String {
        indexed(exprs.iter().map(|expr| expr.tty_dump(self)))
    }

    pub fn function_signature(&self, signature: &FunctionSignature) -> String {
        let mut blocks = Vec::new();
        if !signature.parameters.is_empty() {
            blocks.push(format!(
                "parameters:\n{}",
                indexed(signature.parameters.iter().map(ToString::to_string))
            ));
        }
        if signature.throws_kind != ThrowsKind::Nothrowing {
            blocks.push(format!("throws_kind: `{}`", signature.throws_kind));
        }
        if let Some(result) = &signature.result {
            blocks.push(self.function_result(result));
        }
        blocks.join("\n")
    }

    pub fn function_result(&self, result: &FunctionResult) -> String {
        let ty = format!("return_type: `{}`", result.ty);
        if result.attributes.is_empty() {
            ty
        } else {
            format!("{ty} with attributes `{}`", result.attributes)
        }
    }

    pub fn conditions(&self, conditions: &[Condition]) -> String {
        format!(
            "conditions:\n{}",
            indexed(conditions.iter().map(|condition| self.condition(condition)))
        )
    }

    pub fn condition(&self, condition: &Condition) -> String {
        match condition {
            Condition::Expression(expr) => expr.tty_dump(self),
            Condition::Availability(availability) => availability.to_string(),
            Condition::Case(pattern, expr) => self.binding("case_binding", pattern, expr),
            Condition::Let(pattern, expr) => {
                self.binding("constant_optional_binding", pattern, expr)
            }
            Condition::Var(pattern, expr) => {
                self.binding("variable_optional_binding", pattern, expr)
            }
        }
    }

    fn binding(&self, label: &str, pattern: &Pattern, expr: &Expr) -> String {
        format!("{label}: `{pattern}`\n{}", indent(&expr.tty_dump(self)))
    }

    /// Render a pattern-initializer list.
    ///
    /// A single element renders bare. An empty list cannot come out of the
    /// grammar; it renders as a marker and is logged.
    pub fn pattern_initializers(&self, inits: &[PatternInitializer]) -> String {
        match self.try_pattern_initializers(inits) {
            Ok(text) => text,
            Err(err) => {
                error!(code = %err.code(), "{err}");
                NO_PATTERN_INITIALIZERS.to_owned()
            }
        }
    }

    pub fn try_pattern_initializers(
        &self,
        inits: &[PatternInitializer],
    ) -> Result<String, DumpError> {
        match inits {
            [] => Err(DumpError::EmptyPatternInitializers),
            [single] => Ok(self.pattern_initializer(single)),
            _ => Ok(format!(
                "pattern_initializers:\n{}",
                indexed(inits.iter().map(|init| self.pattern_initializer(init)))
            )),
        }
    }

    pub fn pattern_initializer(&self, init: &PatternInitializer) -> String {
        let pattern = format!("pattern: {}", init.pattern);
        match &init.initializer {
            Some(expr) => format!("{pattern}\n{}", indent(&expr.tty_dump(self))),
            None => pattern,
        }
    }
}

/// `0: first\n1: second...`
fn indexed(items: impl Iterator<Item = String>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{i}: {item}"))
        .collect::<Vec<_>>()
        .join("\n")
}
