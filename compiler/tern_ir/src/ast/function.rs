//! Function signatures.

use std::fmt;

use super::{write_comma_separated, Attributes, Expr, Type};

/// Whether, and how, a function propagates errors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThrowsKind {
    #[default]
    Nothrowing,
    Throwing,
    Rethrowing,
}

impl fmt::Display for ThrowsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThrowsKind::Nothrowing => "nothrowing",
            ThrowsKind::Throwing => "throws",
            ThrowsKind::Rethrowing => "rethrows",
        })
    }
}

/// One parameter clause entry: `external local: Type = default`.
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    pub external_name: Option<String>,
    pub local_name: String,
    pub type_annotation: Type,
    pub default_argument: Option<Expr>,
    pub variadic: bool,
}

impl Parameter {
    pub fn new(local_name: impl Into<String>, type_annotation: Type) -> Self {
        Parameter {
            external_name: None,
            local_name: local_name.into(),
            type_annotation,
            default_argument: None,
            variadic: false,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(external) = &self.external_name {
            write!(f, "{external} ")?;
        }
        write!(f, "{}: {}", self.local_name, self.type_annotation)?;
        if self.variadic {
            f.write_str("...")?;
        }
        if let Some(default) = &self.default_argument {
            write!(f, " = {default}")?;
        }
        Ok(())
    }
}

/// `-> @attributes Type`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FunctionResult {
    pub attributes: Attributes,
    pub ty: Type,
}

impl FunctionResult {
    pub fn new(ty: Type) -> Self {
        FunctionResult {
            attributes: Attributes::default(),
            ty,
        }
    }
}

impl fmt::Display for FunctionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("-> ")?;
        if !self.attributes.is_empty() {
            write!(f, "{} ", self.attributes)?;
        }
        write!(f, "{}", self.ty)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FunctionSignature {
    pub parameters: Vec<Parameter>,
    pub throws_kind: ThrowsKind,
    pub result: Option<FunctionResult>,
}

impl fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        write_comma_separated(f, &self.parameters)?;
        f.write_str(")")?;
        if self.throws_kind != ThrowsKind::Nothrowing {
            write!(f, " {}", self.throws_kind)?;
        }
        if let Some(result) = &self.result {
            write!(f, " {result}")?;
        }
        Ok(())
    }
}
