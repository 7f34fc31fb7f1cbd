//! Lispy - a prefix-notation integer calculator
//!
//! # Overview
//!
//! Lispy reads one line of prefix arithmetic such as `(* 2 (+ 1 2))` or the
//! bare form `+ 1 2 3`, evaluates it over 64-bit integers and renders either
//! the number or an error value such as `Error: Division By Zero!`.
//!
//! Two kinds of failure are kept apart:
//!
//! - Malformed text is an [`Error`] (see [`ParseError`]); no tree is built.
//! - Well-formed input that cannot produce a number evaluates to
//!   [`Value::Error`], which is an ordinary result.
//!
//! # Quick Start
//!
//! ```
//! use lispy::{Interpreter, InterpreterOptions, Value};
//!
//! let interpreter = Interpreter::new(InterpreterOptions::default());
//!
//! let evaluation = interpreter.evaluate("(- 10 1 2 3)").unwrap();
//! assert_eq!(evaluation.value, Value::Number(4));
//!
//! let evaluation = interpreter.evaluate("(+ (/ 1 0) 5)").unwrap();
//! assert_eq!(evaluation.render(), "Error: Division By Zero!");
//!
//! assert!(interpreter.evaluate("(+ 1 2").is_err());
//! ```

mod error_renderer;
mod interpreter;

pub use error_renderer::{
    render_diagnostic, render_diagnostic_to_string_no_color, render_error, render_error_to,
    render_error_to_string, render_error_to_string_no_color,
};
pub use interpreter::{Error, Evaluation, Interpreter, InterpreterOptions, run};

// Re-export the core pipeline
pub use lispy_core::api::{Diagnostic, ParseOptions, Severity};
pub use lispy_core::evaluator::{Evaluator, apply_operator, eval};
pub use lispy_core::parser::{self, Expr, Operator, ParseError, ParseErrorKind, ParsedExpr, Span, parse};
pub use lispy_core::values::{ErrorKind, Value, format};
