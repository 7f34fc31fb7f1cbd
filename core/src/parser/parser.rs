use bumpalo::Bump;
use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;
use tracing::{debug, trace};

use crate::api::ParseOptions;
use crate::stack::{ensure_sufficient_stack, with_stack_for_depth};
use crate::parser::{
    Expr, Operator, ParseError, ParseErrorKind, ParsedExpr, Span,
    error::convert_pest_error, syntax::AnnotatedSource,
};

#[derive(Parser)]
#[grammar = "parser/lispy.pest"]
pub struct ExpressionParser;

/// Parse one input line with the default options.
pub fn parse<'a>(arena: &'a Bump, source: &'a str) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_options(arena, source, &ParseOptions::default())
}

pub fn parse_with_options<'a>(
    arena: &'a Bump,
    source: &'a str,
    options: &ParseOptions,
) -> Result<ParsedExpr<'a>, ParseError> {
    parse_with_max_depth(arena, source, options.max_depth)
}

/// Parse one input line, rejecting parenthesis nesting deeper than `max_depth`.
///
/// The nesting check runs before the grammar, so pathological input never
/// reaches the recursive descent in pest or the evaluator.
pub fn parse_with_max_depth<'a>(
    arena: &'a Bump,
    source: &'a str,
    max_depth: usize,
) -> Result<ParsedExpr<'a>, ParseError> {
    check_nesting(source, max_depth)?;

    let mut pairs = with_stack_for_depth(max_depth, || {
        ExpressionParser::parse(Rule::main, source)
    })
    .map_err(|e| convert_pest_error(e, source))?;
    let main = pairs.next().ok_or_else(|| missing_pair(source, Span::new(0, 0)))?;
    let main_span = Span::from(main.as_span());
    let program = main
        .into_inner()
        .next()
        .ok_or_else(|| missing_pair(source, main_span))?;

    let ann: &'a AnnotatedSource<'a, Expr<'a>> = arena.alloc(AnnotatedSource::new(arena, source));
    let builder = TreeBuilder { arena, ann, source };
    let expr = builder.program(program)?;
    debug!(source, "parsed input");

    Ok(ParsedExpr { expr, ann })
}

/// Scan parentheses for excessive nesting and unclosed groups.
fn check_nesting(source: &str, max_depth: usize) -> Result<(), ParseError> {
    let mut open = Vec::new();
    for (pos, c) in source.char_indices() {
        match c {
            '(' => {
                open.push(pos);
                if open.len() > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded {
                            depth: open.len(),
                            max_depth,
                        },
                        source,
                        Span::new(pos, pos + 1),
                    ));
                }
            }
            ')' => {
                // A stray `)` is reported by the grammar with better context.
                if open.pop().is_none() {
                    return Ok(());
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(pos) => Err(ParseError::new(
            ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
            source,
            Span::new(pos, pos + 1),
        )),
        None => Ok(()),
    }
}

fn missing_pair(source: &str, span: Span) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: "missing expected pair in rule".to_string(),
        },
        source,
        span,
    )
}

/// Lowers the pest concrete tree into arena-allocated [`Expr`] nodes.
struct TreeBuilder<'a> {
    arena: &'a Bump,
    ann: &'a AnnotatedSource<'a, Expr<'a>>,
    source: &'a str,
}

impl<'a> TreeBuilder<'a> {
    fn program(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        let mut inner = pair.into_inner().peekable();
        match inner.peek().map(|p| p.as_rule()) {
            Some(Rule::expr) => {
                let expr = inner.next().ok_or_else(|| missing_pair(self.source, span.clone()))?;
                self.expr(expr)
            }
            Some(Rule::operator) => self.apply(span, inner),
            _ => Err(missing_pair(self.source, span)),
        }
    }

    fn expr(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        ensure_sufficient_stack(|| self.expr_inner(pair))
    }

    fn expr_inner(&self, pair: Pair<'a, Rule>) -> Result<&'a Expr<'a>, ParseError> {
        let span = Span::from(pair.as_span());
        let mut inner = pair.into_inner().peekable();
        match inner.peek().map(|p| p.as_rule()) {
            Some(Rule::number) => {
                let number = inner.next().ok_or_else(|| missing_pair(self.source, span.clone()))?;
                trace!(text = number.as_str(), "number literal");
                Ok(self.alloc(Expr::Number(number.as_str()), span))
            }
            Some(Rule::operator) => self.apply(span, inner),
            _ => Err(missing_pair(self.source, span)),
        }
    }

    /// Build an operator application from `operator expr+`.
    fn apply(
        &self,
        span: Span,
        mut pairs: impl Iterator<Item = Pair<'a, Rule>>,
    ) -> Result<&'a Expr<'a>, ParseError> {
        let operator = pairs
            .next()
            .ok_or_else(|| missing_pair(self.source, span.clone()))?;
        let symbol = operator.as_str();
        let op = Operator::from_symbol(symbol).ok_or_else(|| {
            ParseError::new(
                ParseErrorKind::UnknownOperator {
                    symbol: symbol.to_string(),
                },
                self.source,
                operator.as_span().into(),
            )
        })?;

        let operands = pairs
            .map(|pair| self.expr(pair))
            .collect::<Result<Vec<_>, _>>()?;
        if operands.is_empty() {
            return Err(ParseError::new(
                ParseErrorKind::MissingOperand {
                    operator: symbol.to_string(),
                },
                self.source,
                span,
            ));
        }

        let operands = self.arena.alloc_slice_copy(&operands);
        Ok(self.alloc(Expr::Apply { op, operands }, span))
    }

    fn alloc(&self, expr: Expr<'a>, span: Span) -> &'a Expr<'a> {
        let expr = self.arena.alloc(expr);
        self.ann.add_span(expr, span);
        expr
    }
}
