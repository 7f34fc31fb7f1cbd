pub mod error;
mod parsed_expr;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ExpressionParser;
pub use parser::Rule;
pub use parser::{parse, parse_with_max_depth, parse_with_options};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, ParsedExpr};
pub use syntax::AnnotatedSource;
pub use syntax::{Operator, Span};
