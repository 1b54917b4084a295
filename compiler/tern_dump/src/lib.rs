//! Range-annotated tree dumps for Tern ASTs.
//!
//! Every node renders as a colored heading (`kind <range: ...>`) followed by
//! its fields, with children nested one indentation level deeper. Color tags
//! are the only thing `DumpOptions` changes; `strip_colors` of a colored dump
//! equals the plain dump.

mod color;
mod dumper;
mod error;
mod expr;
mod indent;

pub use color::{colored, strip_colors, Color, ColorMode, DumpOptions};
pub use dumper::{Dumper, NO_PATTERN_INITIALIZERS};
pub use error::DumpError;
pub use expr::TtyDump;
pub use indent::{indent, INDENT_WIDTH};

use tern_diagnostic::SourceUnit;
use tern_ir::Expr;

/// Render `expr`, whose spans point into `unit`.
pub fn dump_expr(expr: &Expr, unit: &SourceUnit, options: DumpOptions) -> String {
    expr.tty_dump(&Dumper::new(unit, options))
}
