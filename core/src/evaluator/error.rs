//! Diagnostics for error values.
//!
//! Error values are not Rust errors: they are results the user asked for.
//! When the caller wants to explain one, it is turned into a [`Diagnostic`]
//! anchored at the subexpression that produced it.

use crate::api::{Diagnostic, Severity};
use crate::parser::Span;
use crate::values::ErrorKind;

pub(super) fn error_diagnostic(kind: ErrorKind, span: Span, source: &str) -> Diagnostic {
    let snippet = source.get(span.0.clone()).unwrap_or_default();
    let (message, help) = match kind {
        ErrorKind::DivisionByZero => (
            format!("`{}` divides by zero", snippet),
            "The divisor of `/` and `%` must be non-zero",
        ),
        ErrorKind::BadOperator => (
            format!("`{}` has no valid operator application", snippet),
            "Use one of + - * / % ^ min max with at least one operand",
        ),
        ErrorKind::BadNumber => (
            format!("`{}` is not a 64-bit integer", snippet),
            "Numbers must be whole and between -9223372036854775808 and 9223372036854775807",
        ),
    };

    Diagnostic {
        severity: Severity::Error,
        message,
        span,
        help: vec![help.to_string()],
        code: Some(kind.code().to_string()),
    }
}
