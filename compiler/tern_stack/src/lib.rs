//! Stack growth for recursion over nested expressions.
//!
//! Subscript arguments are themselves expressions, so parsing, printing and
//! dumping `super[super[super[...]]]` recurse once per nesting level. Every
//! such recursion goes through [`ensure_sufficient_stack`].
//!
//! - Native targets grow the stack with `stacker`.
//! - WASM calls through directly.

/// Grow when less than this remains (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
