//! Tern IR - tokens, spans and AST nodes.
//!
//! This crate contains the data shared by every front-end phase:
//! - Spans for source locations
//! - Tokens and `TokenList` for lexer output
//! - The expression tree and its auxiliary shapes (patterns, types,
//!   function signatures, conditions)
//!
//! Nothing here depends on the parser or the renderer; both consume these
//! types through their public fields.

pub mod ast;
mod span;
mod token;

pub use ast::{
    Attribute, Attributes, AvailabilityArgument, AvailabilityCondition, Condition, ConditionList,
    Expr, ExprKind, ExpressionList, FunctionResult, FunctionSignature, LiteralKind, Parameter,
    Pattern, PatternInitializer, SelfKind, SuperclassKind, ThrowsKind, Type,
};
pub use span::{Span, SpanError, Spanned};
pub use token::{Token, TokenKind, TokenList};
