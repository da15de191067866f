//! Stack growth for the recursive compiler passes.
//!
//! The parser, the type checker and the code generator all recurse once per
//! nesting level of the source program. A pathological input such as
//! `((((...1...))))` or a long chain of `-` operators would otherwise blow the
//! native stack long before any other limit is hit.
//!
//! Each recursive entry point wraps its body in [`ensure_sufficient_stack`].

/// Grow when less than this much stack remains (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each new stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; call straight through.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
