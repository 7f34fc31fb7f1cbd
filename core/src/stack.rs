//! Stack growth for the recursive parser and evaluator.
//!
//! Inputs nested up to the configured depth limit must not overflow a
//! default-sized thread stack, so recursive steps run through
//! [`ensure_sufficient_stack`], which moves onto a fresh segment when the
//! remaining stack drops below a red zone.

/// Minimum stack space to keep available before recursing.
const RED_ZONE: usize = 100 * 1024;

/// Size of each additional stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Stack reserved per nesting level for the grammar's recursive descent.
const GRAMMAR_STACK_PER_LEVEL: usize = 16 * 1024;

/// Upper bound on the stack reserved for a single grammar run.
const MAX_GRAMMAR_STACK: usize = 256 * 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
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

/// Run `f` with enough stack for input nested `max_depth` levels deep.
///
/// Pest recurses inside the generated parser, out of reach of
/// [`ensure_sufficient_stack`], so the whole run gets its headroom up front.
#[cfg(not(target_arch = "wasm32"))]
pub fn with_stack_for_depth<R>(max_depth: usize, f: impl FnOnce() -> R) -> R {
    let needed = max_depth
        .saturating_mul(GRAMMAR_STACK_PER_LEVEL)
        .saturating_add(RED_ZONE)
        .min(MAX_GRAMMAR_STACK);
    stacker::maybe_grow(needed, needed, f)
}

#[cfg(target_arch = "wasm32")]
pub fn with_stack_for_depth<R>(_max_depth: usize, f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recurse(depth: usize) -> usize {
        ensure_sufficient_stack(|| {
            let frame = std::hint::black_box([depth as u8; 1024]);
            if depth == 0 {
                0
            } else {
                let below = recurse(depth - 1);
                std::hint::black_box(&frame);
                below + 1
            }
        })
    }

    #[test]
    fn test_deep_recursion_grows_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| recurse(10_000))
            .expect("failed to spawn thread");
        assert_eq!(handle.join().expect("thread panicked"), 10_000);
    }

    #[test]
    fn test_with_stack_for_depth_returns_value() {
        assert_eq!(with_stack_for_depth(500, || 42), 42);
        assert_eq!(with_stack_for_depth(0, || 7), 7);
    }
}
