//! Span utility functions.
//!
//! Converts byte-offset spans into 1-based line/column locations and
//! produces the fixed `line:column-line:column` textual form that dumps
//! embed inside `<range: ...>` annotations. Snapshot tests compare that text
//! literally, so the format must stay stable.

use std::fmt;

use tern_ir::Span;

/// Pre-computed line offset table for efficient line/column lookup.
///
/// ```
/// use tern_diagnostic::span_utils::LineOffsetTable;
///
/// let source = "line1\nline2\nline3";
/// let table = LineOffsetTable::build(source);
///
/// assert_eq!(table.offset_to_line_col(source, 0), (1, 1));
/// assert_eq!(table.offset_to_line_col(source, 6), (2, 1));
/// assert_eq!(table.offset_to_line_col(source, 12), (3, 1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct LineOffsetTable {
    /// Byte offset of each line start; `offsets[0] == 0`.
    offsets: Vec<u32>,
}

impl LineOffsetTable {
    pub fn build(source: &str) -> Self {
        let mut offsets = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                offsets.push(u32::try_from(i + 1).unwrap_or(u32::MAX));
            }
        }
        LineOffsetTable { offsets }
    }

    /// 1-based line number containing `offset`.
    #[inline]
    pub fn line_from_offset(&self, offset: u32) -> u32 {
        let line_idx = match self.offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        u32::try_from(line_idx).unwrap_or(u32::MAX - 1) + 1
    }

    /// 1-based (line, column); columns count characters, not bytes.
    pub fn offset_to_line_col(&self, source: &str, offset: u32) -> (u32, u32) {
        let line = self.line_from_offset(offset);
        let line_start = self
            .offsets
            .get((line - 1) as usize)
            .copied()
            .unwrap_or(0) as usize;
        let offset = (offset as usize).min(source.len());

        let chars = source
            .get(line_start..offset)
            .map_or(offset.saturating_sub(line_start), |text| {
                text.chars().count()
            });
        let col = u32::try_from(chars).unwrap_or(u32::MAX - 1) + 1;

        (line, col)
    }

    pub fn line_count(&self) -> usize {
        self.offsets.len()
    }
}

/// A 1-based line/column position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Start and (exclusive) end location of a node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourceRange {
    pub start: SourceLocation,
    pub end: SourceLocation,
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// One source text plus the metadata needed to describe spans into it.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    name: String,
    source: String,
    lines: LineOffsetTable,
}

impl SourceUnit {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let lines = LineOffsetTable::build(&source);
        SourceUnit {
            name: name.into(),
            source,
            lines,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn location(&self, offset: u32) -> SourceLocation {
        let (line, column) = self.lines.offset_to_line_col(&self.source, offset);
        SourceLocation { line, column }
    }

    pub fn range(&self, span: Span) -> SourceRange {
        SourceRange {
            start: self.location(span.start),
            end: self.location(span.end),
        }
    }

    /// `name:line:col-line:col`, the form used inside dump range annotations.
    pub fn describe(&self, span: Span) -> String {
        format!("{}:{}", self.name, self.range(span))
    }
}
