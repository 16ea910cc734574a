//! On-demand stack growth.
//!
//! O'ahu programs nest as deeply as their authors like: `((((x))))`,
//! recursive functions, chains of `else if`. The parser and the evaluator
//! are plain recursive descent, so every recursive entry point runs inside
//! [`ensure_sufficient_stack`], which moves execution onto a fresh stack
//! segment when the current one is nearly exhausted.
//!
//! On `wasm32` the wrapper is a passthrough.

/// Remaining stack below which a new segment is allocated (100 KiB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment (1 MiB).
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
