//! Core of the Lispy prefix-arithmetic interpreter.
//!
//! The pipeline is `parser::parse` → `evaluator::eval` → `values::format`.
//! Every input is parsed into its own [`bumpalo::Bump`] arena, which owns the
//! syntax tree until the caller drops it after evaluation.

pub mod api;
pub mod evaluator;
pub mod parser;
pub mod stack;
pub mod values;

pub use evaluator::{Evaluator, apply_operator, eval};
pub use parser::{ParseError, ParseErrorKind, ParsedExpr, parse};
pub use values::{ErrorKind, Value, format};

/// Test utilities for enabling logging in tests
#[cfg(test)]
pub mod test_utils {
    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
