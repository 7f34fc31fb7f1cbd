//! Configuration options for parsing.

/// Default maximum parenthesis nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 500;

/// Configuration options for parsing an input line.
///
/// # Example
///
/// ```
/// use lispy_core::api::ParseOptions;
///
/// let options = ParseOptions { max_depth: 64 };
/// assert_eq!(ParseOptions::default().max_depth, 500);
/// # let _ = options;
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting depth of parenthesized expressions.
    ///
    /// Bounds the recursion of both the parser and the evaluator. Both grow
    /// their stack on demand, so any depth up to this limit is safe on a
    /// default-sized thread.
    ///
    /// Default: 500
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
