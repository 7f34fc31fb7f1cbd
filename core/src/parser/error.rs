use crate::api::{Diagnostic, Severity};
use crate::parser::{Rule, Span};

/// Parser error with context
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// Unclosed delimiter
    UnclosedDelimiter { delimiter: char },
    /// Operator text that no operator answers to
    UnknownOperator { symbol: String },
    /// Operator application without operands
    MissingOperand { operator: String },
    /// Maximum nesting depth exceeded
    MaxDepthExceeded { depth: usize, max_depth: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        Self {
            kind,
            source: source.to_string(),
            span,
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                vec![],
            ),
            ParseErrorKind::UnclosedDelimiter { delimiter } => (
                format!("Unclosed delimiter '{}'", delimiter),
                "P002",
                vec!["Add the missing closing delimiter".to_string()],
            ),
            ParseErrorKind::UnknownOperator { symbol } => (
                format!("Unknown operator '{}'", symbol),
                "P003",
                vec!["Use one of + - * / % ^ min max".to_string()],
            ),
            ParseErrorKind::MissingOperand { operator } => (
                format!("Operator '{}' needs at least one operand", operator),
                "P004",
                vec![],
            ),
            ParseErrorKind::MaxDepthExceeded { max_depth, .. } => (
                format!(
                    "Expression nesting depth exceeds maximum of {} levels",
                    max_depth
                ),
                "P005",
                vec!["Reduce nesting or simplify the expression".to_string()],
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", vec![]),
        };

        Diagnostic {
            severity: Severity::Error,
            message,
            span: self.span.clone(),
            help,
            code: Some(code.to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_diagnostic())
    }
}

impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::ErrorVariant;

    let span = match err.location {
        pest::error::InputLocation::Pos(pos) => Span(pos..pos),
        pest::error::InputLocation::Span((start, end)) => Span(start..end),
    };

    let kind = match err.variant {
        ErrorVariant::ParsingError {
            positives,
            negatives: _,
        } => ParseErrorKind::UnexpectedToken {
            expected: format_expected_rules(&positives),
            found: describe_found(source, span.0.start),
        },
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, span)
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();

    for rule in rules {
        let concept = match rule {
            Rule::number => "number",
            Rule::operator | Rule::keyword => "operator",
            Rule::EOI => "end of input",
            _ => "expression",
        };
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, rest)) => format!("{} or {}", rest.join(", "), last),
    }
}

/// Describe the text at the failure position
fn describe_found(source: &str, pos: usize) -> String {
    let rest = source.get(pos..).unwrap_or_default().trim_start();
    match rest.chars().next() {
        None => "end of input".to_string(),
        Some(c) => format!("'{}'", c),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "expression".to_string(),
                found: "')'".to_string(),
            },
            "(+ )",
            Span(3..3),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.message, "Expected expression, found ')'");
        assert_eq!(diagnostic.code, Some("P001".to_string()));
        assert_eq!(diagnostic.span, Span(3..3));
    }

    #[test]
    fn test_display_includes_code_and_help() {
        let error = ParseError::new(
            ParseErrorKind::UnclosedDelimiter { delimiter: '(' },
            "(+ 1 2",
            Span(0..1),
        );
        assert_eq!(
            error.to_string(),
            "error: Unclosed delimiter '(' [P002]\nhelp: Add the missing closing delimiter"
        );
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[]), "something else");
        assert_eq!(format_expected_rules(&[Rule::number]), "number");
        assert_eq!(
            format_expected_rules(&[Rule::expr, Rule::number, Rule::operator]),
            "expression, number or operator"
        );
        assert_eq!(
            format_expected_rules(&[Rule::operator, Rule::keyword]),
            "operator"
        );
    }

    #[test]
    fn test_describe_found() {
        assert_eq!(describe_found("(+ 1 x)", 5), "'x'");
        assert_eq!(describe_found("(+ 1", 4), "end of input");
        assert_eq!(describe_found("(+ 1   ", 4), "end of input");
    }

    #[test]
    fn test_custom_pest_error_is_kept() {
        let pest_err = pest::error::Error::<Rule>::new_from_pos(
            pest::error::ErrorVariant::CustomError {
                message: "something odd".to_string(),
            },
            pest::Position::from_start("test"),
        );

        let parse_err = convert_pest_error(pest_err, "test");
        assert_eq!(
            parse_err.kind,
            ParseErrorKind::Other {
                message: "something odd".to_string()
            }
        );
        assert_eq!(parse_err.span, Span(0..0));
    }
}
