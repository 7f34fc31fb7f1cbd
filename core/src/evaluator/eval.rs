//! Core evaluation logic.

use tracing::trace;

use crate::{
    api::Diagnostic,
    evaluator::{error::error_diagnostic, operators},
    parser::{Expr, ParsedExpr, Span},
    stack::ensure_sufficient_stack,
    values::{ErrorKind, Value, parse_number},
};

/// Evaluator for parsed expressions.
///
/// Besides the result, the evaluator remembers which node first produced an
/// error value, so the caller can point at it in the source.
pub struct Evaluator<'p, 'a> {
    parsed: &'p ParsedExpr<'a>,
    error_origin: Option<(ErrorKind, Span)>,
}

impl<'p, 'a> Evaluator<'p, 'a> {
    pub fn new(parsed: &'p ParsedExpr<'a>) -> Self {
        Self {
            parsed,
            error_origin: None,
        }
    }

    /// Evaluate the whole input.
    pub fn eval(&mut self) -> Value {
        self.error_origin = None;
        self.eval_expr(self.parsed.expr)
    }

    /// Span of the node that produced the first error value.
    ///
    /// Errors only ever propagate from earlier operands to later folds, so
    /// the first error created is the one the input evaluates to.
    pub fn error_origin(&self) -> Option<&Span> {
        self.error_origin.as_ref().map(|(_, span)| span)
    }

    /// Describe an error value returned by [`Evaluator::eval`].
    ///
    /// Returns `None` for numbers.
    pub fn diagnostic(&self, value: Value) -> Option<Diagnostic> {
        let kind = value.as_error()?;
        let span = match &self.error_origin {
            Some((origin_kind, span)) if *origin_kind == kind => span.clone(),
            _ => self.span_of(self.parsed.expr),
        };
        Some(error_diagnostic(kind, span, self.parsed.ann.source))
    }

    pub(crate) fn eval_expr(&mut self, expr: &'a Expr<'a>) -> Value {
        ensure_sufficient_stack(|| self.eval_expr_inner(expr))
    }

    fn eval_expr_inner(&mut self, expr: &'a Expr<'a>) -> Value {
        match expr {
            Expr::Number(text) => {
                let value = Value::from(parse_number(text));
                self.note_fresh_error(expr, value);
                value
            }

            Expr::Apply { op, operands } => {
                let Some((&first, rest)) = operands.split_first() else {
                    // The grammar requires at least one operand.
                    let value = Value::Error(ErrorKind::BadOperator);
                    self.note_fresh_error(expr, value);
                    return value;
                };

                let mut acc = self.eval_expr(first);
                for &operand in rest {
                    let rhs = self.eval_expr(operand);
                    let result = operators::apply(*op, acc, rhs);
                    if !acc.is_error() && !rhs.is_error() {
                        self.note_fresh_error(expr, result);
                    }
                    acc = result;
                }
                trace!(op = op.symbol(), result = %acc, "applied operator");
                acc
            }
        }
    }

    fn note_fresh_error(&mut self, expr: &'a Expr<'a>, value: Value) {
        if self.error_origin.is_some() {
            return;
        }
        if let Value::Error(kind) = value {
            let span = self.span_of(expr);
            trace!(?kind, start = span.0.start, end = span.0.end, "error value created");
            self.error_origin = Some((kind, span));
        }
    }

    fn span_of(&self, expr: &Expr<'a>) -> Span {
        self.parsed
            .ann
            .span_of(expr)
            .unwrap_or_else(|| Span::new(0, self.parsed.ann.source.len()))
    }
}
