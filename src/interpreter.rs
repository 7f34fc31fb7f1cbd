//! One-call evaluation of input lines.

use bumpalo::Bump;
use lispy_core::{
    api::{Diagnostic, ParseOptions},
    evaluator::Evaluator,
    parser::{self, ParseError},
    values::Value,
};
use miette::Diagnostic as MietteDiagnostic;
use thiserror::Error;

/// Public error type for Lispy inputs that cannot be evaluated at all.
///
/// Error values such as division by zero are not errors here; they are
/// returned as [`Value::Error`] inside an [`Evaluation`].
#[derive(Debug, Error, MietteDiagnostic)]
pub enum Error {
    /// The input does not match the grammar.
    #[error("{0}")]
    #[diagnostic(code(lispy::parse))]
    Parse(#[from] ParseError),
}

impl Error {
    /// Source diagnostics for rendering.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        match self {
            Error::Parse(err) => vec![err.to_diagnostic()],
        }
    }

    /// The input the error refers to.
    pub fn source_text(&self) -> &str {
        match self {
            Error::Parse(err) => &err.source,
        }
    }
}

/// Configuration options for the interpreter.
#[derive(Debug, Clone, Default)]
pub struct InterpreterOptions {
    pub parse: ParseOptions,
}

/// Result of evaluating one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub value: Value,
    /// Location and explanation of an error value, if the value is one.
    pub diagnostic: Option<Diagnostic>,
    pub source: String,
}

impl Evaluation {
    /// The text printed for this result.
    pub fn render(&self) -> String {
        lispy_core::values::format(self.value)
    }
}

/// Evaluates input lines; holds no state between them.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    options: InterpreterOptions,
}

impl Interpreter {
    pub fn new(options: InterpreterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &InterpreterOptions {
        &self.options
    }

    /// Parse and evaluate one line.
    ///
    /// The syntax tree lives in an arena owned by this call and is released
    /// before returning, on success and on parse failure alike.
    pub fn evaluate(&self, source: &str) -> Result<Evaluation, Error> {
        let arena = Bump::new();
        let parsed = parser::parse_with_options(&arena, source, &self.options.parse)?;

        let mut evaluator = Evaluator::new(&parsed);
        let value = evaluator.eval();
        let diagnostic = evaluator.diagnostic(value);

        Ok(Evaluation {
            value,
            diagnostic,
            source: source.to_string(),
        })
    }
}

/// Evaluate one line with default options.
pub fn run(source: &str) -> Result<Value, Error> {
    Interpreter::default().evaluate(source).map(|e| e.value)
}
