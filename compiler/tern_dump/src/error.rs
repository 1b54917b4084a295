//! Renderer errors.

use tern_diagnostic::ErrorCode;

/// Structural problems found while rendering.
///
/// These are bugs in whatever built the tree, never bad user input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DumpError {
    #[error("pattern initializer list is empty")]
    EmptyPatternInitializers,
}

impl DumpError {
    pub fn code(&self) -> ErrorCode {
        match self {
            DumpError::EmptyPatternInitializers => ErrorCode::E9001,
        }
    }
}
