//! Diagnostic support shared by the parser and the dump renderer.
//!
//! - [`ErrorCode`]: stable, searchable codes for every reported problem
//! - [`span_utils`]: byte offset to line/column conversion and the textual
//!   form of source ranges used in dumps and snapshot tests

mod error_code;
pub mod span_utils;

pub use error_code::ErrorCode;
pub use span_utils::{LineOffsetTable, SourceLocation, SourceRange, SourceUnit};
