//! Tree-walking evaluator for Lispy expressions.
//!
//! Evaluation is strict and left to right: every operand is evaluated once,
//! then folded into the accumulator, so `(- 10 1 2 3)` is `((10 - 1) - 2) - 3`.
//! Errors are values (see [`Value::Error`]); once the accumulator holds an
//! error, the remaining operands are still evaluated but cannot replace it.
//!
//! ## Example
//!
//! ```
//! use bumpalo::Bump;
//! use lispy_core::{evaluator, parser, values::Value};
//!
//! let arena = Bump::new();
//! let parsed = parser::parse(&arena, "(* 2 (+ 1 2))").unwrap();
//! assert_eq!(evaluator::eval(&parsed), Value::Number(6));
//! ```

mod error;
mod eval;
mod operators;


pub use eval::Evaluator;
pub use operators::{apply, apply_operator};

use crate::{parser::ParsedExpr, values::Value};

/// Evaluate a parsed input to a value.
pub fn eval(parsed: &ParsedExpr<'_>) -> Value {
    Evaluator::new(parsed).eval()
}
