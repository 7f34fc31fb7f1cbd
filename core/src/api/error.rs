//! Diagnostics for the Lispy API.

use crate::parser::Span;
use core::fmt;

/// A diagnostic message with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "E001") for documentation lookup.
    pub code: Option<String>,
}

/// Severity level for diagnostics.
///
/// Every diagnostic Lispy produces is an error: either the input does not
/// parse or it evaluates to an error value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error - the input cannot produce a number.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)?;

        if let Some(ref code) = self.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &self.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_with_code_and_help() {
        let diagnostic = Diagnostic {
            severity: Severity::Error,
            message: "`(/ 1 0)` divides by zero".to_string(),
            span: Span::new(0, 7),
            help: vec!["make the divisor non-zero".to_string()],
            code: Some("E001".to_string()),
        };
        assert_eq!(
            diagnostic.to_string(),
            "error: `(/ 1 0)` divides by zero [E001]\nhelp: make the divisor non-zero"
        );
    }
}
