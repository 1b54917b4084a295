//! Grammar productions.
//!
//! Only the expression grammar lives here; statements and declarations are
//! parsed by callers that build on `recognize_expression`.

pub(crate) mod expr;
