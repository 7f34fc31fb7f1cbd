use crate::parser::{Operator, syntax::AnnotatedSource};

/// A parsed input line: the root expression and the spans of its nodes.
#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    /// Numeric literal, kept as written. Converted to an integer on
    /// evaluation, where an out-of-range or fractional literal becomes an
    /// error value instead of a parse failure.
    Number(&'a str),

    /// Left fold of `op` over the operands.
    // REQUIRES: !operands.is_empty()
    Apply {
        op: Operator,
        operands: &'a [&'a Expr<'a>],
    },
}
