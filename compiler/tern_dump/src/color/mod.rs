//! Semantic color tags for dump output.

/// Color tags used by the renderer.
///
/// Node names and source ranges get distinct tags so a terminal can tell
/// them apart; the text between the tags never depends on the color mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Magenta,
    Yellow,
}

impl Color {
    pub fn ansi_code(self) -> &'static str {
        match self {
            Color::Magenta => "\x1b[35m",
            Color::Yellow => "\x1b[33m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Color output mode for dumps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Rendering options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DumpOptions {
    pub color: ColorMode,
    /// Whether the output goes to a terminal (CLI layer detection).
    pub is_tty: bool,
}

impl DumpOptions {
    pub fn new(color: ColorMode, is_tty: bool) -> Self {
        DumpOptions { color, is_tty }
    }

    pub fn plain() -> Self {
        DumpOptions::new(ColorMode::Never, false)
    }

    pub fn use_colors(self) -> bool {
        self.color.should_use_colors(self.is_tty)
    }
}

/// Wrap `text` in `color` when `enabled`.
pub fn colored(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}{text}{RESET}", color.ansi_code())
    } else {
        text.to_owned()
    }
}

/// Remove ANSI SGR sequences (`ESC [ ... m`) from `text`.
pub fn strip_colors(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
