//! Type annotations and attributes, kept only in their textual shape.

use std::fmt;

use super::write_comma_separated;

/// A written type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// `Int`, `Array<Element>`
    Named {
        name: String,
        generic_arguments: Vec<Type>,
    },
    /// `Int?`
    Optional(Box<Type>),
    /// `[Int]`
    Array(Box<Type>),
    /// `[String: Int]`
    Dictionary { key: Box<Type>, value: Box<Type> },
    /// `(Int, String)`
    Tuple(Vec<Type>),
}

impl Type {
    pub fn named(name: impl Into<String>) -> Self {
        Type::Named {
            name: name.into(),
            generic_arguments: Vec::new(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Named {
                name,
                generic_arguments,
            } => {
                f.write_str(name)?;
                if !generic_arguments.is_empty() {
                    f.write_str("<")?;
                    write_comma_separated(f, generic_arguments)?;
                    f.write_str(">")?;
                }
                Ok(())
            }
            Type::Optional(inner) => write!(f, "{inner}?"),
            Type::Array(element) => write!(f, "[{element}]"),
            Type::Dictionary { key, value } => write!(f, "[{key}: {value}]"),
            Type::Tuple(elements) => {
                f.write_str("(")?;
                write_comma_separated(f, elements)?;
                f.write_str(")")
            }
        }
    }
}

/// `@name` or `@name(argument text)`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Attribute {
    pub name: String,
    pub argument: Option<String>,
}

impl Attribute {
    pub fn new(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            argument: None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if let Some(argument) = &self.argument {
            write!(f, "({argument})")?;
        }
        Ok(())
    }
}

/// An attribute set; renders space separated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Attributes(pub Vec<Attribute>);

impl Attributes {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, attribute) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{attribute}")?;
        }
        Ok(())
    }
}
