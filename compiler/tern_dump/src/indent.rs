//! Structural indentation of nested renderings.

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

/// Indent every line of `text` by one level. Empty lines stay empty.
pub fn indent(text: &str) -> String {
    let pad = " ".repeat(INDENT_WIDTH);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
