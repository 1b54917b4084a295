//! Result of a cursor-free recognizer.
//!
//! Recognizers are pure functions over a token slice. They either build a
//! node and say how many tokens it spans, or report that nothing at this
//! position matches. A no-match is ordinary control flow: it consumes
//! nothing, so the caller can try the next alternative without any
//! rollback machinery.
//!
//! | Variant | Tokens consumed | Meaning |
//! |---------|-----------------|---------|
//! | `Matched` | `advanced_by >= 1` | A node was recognized |
//! | `NoMatch` | 0 | Try another production |

/// Outcome of recognizing a node at the front of a token slice.
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub enum Recognized<T> {
    Matched {
        /// The recognized node.
        node: T,
        /// Number of tokens the node spans, counted from the head token.
        advanced_by: usize,
    },
    NoMatch,
}

impl<T> Recognized<T> {
    #[inline]
    pub fn matched(node: T, advanced_by: usize) -> Self {
        debug_assert!(advanced_by >= 1, "a match must consume at least one token");
        Recognized::Matched { node, advanced_by }
    }

    #[inline]
    pub fn no_match() -> Self {
        Recognized::NoMatch
    }

    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Recognized::Matched { .. })
    }

    /// Tokens consumed; 0 for `NoMatch`.
    #[inline]
    pub fn advanced_by(&self) -> usize {
        match self {
            Recognized::Matched { advanced_by, .. } => *advanced_by,
            Recognized::NoMatch => 0,
        }
    }

    pub fn node(&self) -> Option<&T> {
        match self {
            Recognized::Matched { node, .. } => Some(node),
            Recognized::NoMatch => None,
        }
    }

    pub fn into_node(self) -> Option<T> {
        self.into_parts().0
    }

    /// The `(node, advanced_by)` pair; `(None, 0)` for `NoMatch`.
    pub fn into_parts(self) -> (Option<T>, usize) {
        match self {
            Recognized::Matched { node, advanced_by } => (Some(node), advanced_by),
            Recognized::NoMatch => (None, 0),
        }
    }

    /// Map the node, keeping the consumed count.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Recognized<U> {
        match self {
            Recognized::Matched { node, advanced_by } => Recognized::Matched {
                node: f(node),
                advanced_by,
            },
            Recognized::NoMatch => Recognized::NoMatch,
        }
    }

    /// Try an alternative if this did not match.
    pub fn or_else<F: FnOnce() -> Recognized<T>>(self, f: F) -> Recognized<T> {
        match self {
            Recognized::Matched { .. } => self,
            Recognized::NoMatch => f(),
        }
    }
}

/// Try recognizers in order, returning the first match.
///
/// Alternatives after the first match are never evaluated.
///
/// ```ignore
/// fn recognize_primary(tokens: &[Token]) -> Recognized<Expr> {
///     one_of!(
///         recognize_literal(tokens),
///         recognize_identifier(tokens),
///         recognize_superclass(tokens),
///     )
/// }
/// ```
#[macro_export]
macro_rules! one_of {
    ($first:expr $(, $rest:expr)* $(,)?) => {{
        let outcome = $first;
        $(
            let outcome = outcome.or_else(|| $rest);
        )*
        outcome
    }};
}

#[cfg(test)]
mod tests;
