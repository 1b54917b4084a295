//! Conditions of `if`, `guard` and `while` clauses.

use std::fmt;

use super::{write_comma_separated, Expr, Pattern};

/// One argument of `#available(...)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AvailabilityArgument {
    /// `iOS 10.0`
    Platform {
        name: String,
        version: Option<String>,
    },
    /// `*`
    All,
}

impl fmt::Display for AvailabilityArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityArgument::Platform {
                name,
                version: Some(version),
            } => write!(f, "{name} {version}"),
            AvailabilityArgument::Platform {
                name,
                version: None,
            } => f.write_str(name),
            AvailabilityArgument::All => f.write_str("*"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AvailabilityCondition {
    pub arguments: Vec<AvailabilityArgument>,
}

impl fmt::Display for AvailabilityCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("#available(")?;
        write_comma_separated(f, &self.arguments)?;
        f.write_str(")")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Condition {
    Expression(Expr),
    Availability(AvailabilityCondition),
    /// `case pattern = expr`
    Case(Pattern, Expr),
    /// `let pattern = expr`
    Let(Pattern, Expr),
    /// `var pattern = expr`
    Var(Pattern, Expr),
}

/// Ordered, comma separated conditions.
pub type ConditionList = Vec<Condition>;

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Expression(expr) => write!(f, "{expr}"),
            Condition::Availability(availability) => write!(f, "{availability}"),
            Condition::Case(pattern, expr) => write!(f, "case {pattern} = {expr}"),
            Condition::Let(pattern, expr) => write!(f, "let {pattern} = {expr}"),
            Condition::Var(pattern, expr) => write!(f, "var {pattern} = {expr}"),
        }
    }
}
