//! AST node model.
//!
//! Expressions own their children; trees are strictly hierarchical and
//! immutable once the parser hands them out. Every shape implements
//! `Display` as its plain textual form, which is what diagnostics and dumps
//! quote inside backticks.

mod condition;
mod expr;
mod function;
mod pattern;
mod ty;

#[cfg(test)]
mod tests;

pub use condition::{AvailabilityArgument, AvailabilityCondition, Condition, ConditionList};
pub use expr::{Expr, ExprKind, ExpressionList, LiteralKind, SelfKind, SuperclassKind};
pub use function::{FunctionResult, FunctionSignature, Parameter, ThrowsKind};
pub use pattern::{Pattern, PatternInitializer};
pub use ty::{Attribute, Attributes, Type};

use std::fmt;

/// Write `items` separated by `", "`.
pub(crate) fn write_comma_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
