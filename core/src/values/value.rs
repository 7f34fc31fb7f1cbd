use core::fmt;

use thiserror::Error;

/// Result of evaluating an expression: an integer or an error value.
///
/// Errors are ordinary values so they can flow through operator
/// applications; the first operand that is an error wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Number(i64),
    Error(ErrorKind),
}

/// Reasons an expression can evaluate to an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ErrorKind {
    #[error("Division By Zero!")]
    DivisionByZero,
    #[error("Invalid Operator!")]
    BadOperator,
    #[error("Invalid Number!")]
    BadNumber,
}

impl ErrorKind {
    /// Stable code used in diagnostics.
    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::DivisionByZero => "E001",
            ErrorKind::BadOperator => "E002",
            ErrorKind::BadNumber => "E003",
        }
    }
}

impl Value {
    pub fn as_number(self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(n),
            Value::Error(_) => None,
        }
    }

    pub fn as_error(self) -> Option<ErrorKind> {
        match self {
            Value::Number(_) => None,
            Value::Error(kind) => Some(kind),
        }
    }

    pub fn is_error(self) -> bool {
        matches!(self, Value::Error(_))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Value::Error(kind)
    }
}

impl From<Result<i64, ErrorKind>> for Value {
    fn from(result: Result<i64, ErrorKind>) -> Self {
        match result {
            Ok(n) => Value::Number(n),
            Err(kind) => Value::Error(kind),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Error(kind) => write!(f, "Error: {}", kind),
        }
    }
}

/// Render a value the way the REPL prints it.
pub fn format(value: Value) -> String {
    value.to_string()
}

/// Parse a numeric literal as a base-10 `i64`.
///
/// Literals that overflow, or that carry a fractional part, are not integers.
pub fn parse_number(text: &str) -> Result<i64, ErrorKind> {
    text.parse::<i64>().map_err(|_| ErrorKind::BadNumber)
}
