//! Stack safety for recursive shape walks.
//!
//! Nested arrays and records are unfolded recursively. Very deep or very
//! wide generic shapes (`[[[T; 4]; 4]; 4]` and friends nested further) can
//! exhaust a small thread stack, so every recursive step runs through
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: uses `stacker` to grow the stack on demand.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deep_recursion_does_not_overflow() {
        fn depth(n: u64) -> u64 {
            ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
        }

        assert_eq!(depth(100_000), 100_000);
    }

    #[test]
    fn returns_closure_result() {
        assert_eq!(ensure_sufficient_stack(|| 7), 7);
    }
}
