//! Patterns and pattern initializers.

use std::fmt;

use super::{write_comma_separated, Expr, Type};

#[derive(Clone, Debug, PartialEq)]
pub enum Pattern {
    /// `_` or `_: Int`
    Wildcard { type_annotation: Option<Type> },
    /// `x` or `x: Int`
    Identifier {
        name: String,
        type_annotation: Option<Type>,
    },
    /// `(a, b)`
    Tuple(Vec<Pattern>),
    /// `.some(x)`, `Shape.circle`
    EnumCase {
        type_name: Option<String>,
        case_name: String,
        associated: Option<Vec<Pattern>>,
    },
    /// `x?`
    Optional(Box<Pattern>),
    /// An expression pattern, matched with `~=`.
    Expression(Box<Expr>),
}

impl Pattern {
    pub fn identifier(name: impl Into<String>) -> Self {
        Pattern::Identifier {
            name: name.into(),
            type_annotation: None,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Wildcard { type_annotation } => {
                f.write_str("_")?;
                write_annotation(f, type_annotation.as_ref())
            }
            Pattern::Identifier {
                name,
                type_annotation,
            } => {
                f.write_str(name)?;
                write_annotation(f, type_annotation.as_ref())
            }
            Pattern::Tuple(elements) => {
                f.write_str("(")?;
                write_comma_separated(f, elements)?;
                f.write_str(")")
            }
            Pattern::EnumCase {
                type_name,
                case_name,
                associated,
            } => {
                if let Some(type_name) = type_name {
                    f.write_str(type_name)?;
                }
                write!(f, ".{case_name}")?;
                if let Some(associated) = associated {
                    f.write_str("(")?;
                    write_comma_separated(f, associated)?;
                    f.write_str(")")?;
                }
                Ok(())
            }
            Pattern::Optional(inner) => write!(f, "{inner}?"),
            Pattern::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

fn write_annotation(f: &mut fmt::Formatter<'_>, ty: Option<&Type>) -> fmt::Result {
    match ty {
        Some(ty) => write!(f, ": {ty}"),
        None => Ok(()),
    }
}

/// `pattern` or `pattern = initializer`, as in `let a = 1, b: Int`.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternInitializer {
    pub pattern: Pattern,
    pub initializer: Option<Expr>,
}

impl PatternInitializer {
    pub fn new(pattern: Pattern, initializer: Option<Expr>) -> Self {
        PatternInitializer {
            pattern,
            initializer,
        }
    }
}

impl fmt::Display for PatternInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pattern)?;
        if let Some(initializer) = &self.initializer {
            write!(f, " = {initializer}")?;
        }
        Ok(())
    }
}
