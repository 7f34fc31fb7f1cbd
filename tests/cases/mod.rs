//! Shared helpers for the end-to-end test files.

pub use lispy::{ErrorKind, Interpreter, ParseErrorKind, Value};

/// Declare an end-to-end test for one input line.
///
/// ```ignore
/// test_case!(name, input: "(+ 1 2)", value: Value::Number(3), rendered: "3");
/// test_case!(name, input: "(+ 1", parse_error: ParseErrorKind::UnclosedDelimiter { .. });
/// ```
#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        input: $input:expr,
        value: $value:expr,
        rendered: $rendered:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let evaluation = $crate::cases::Interpreter::default()
                .evaluate($input)
                .unwrap_or_else(|e| panic!("Failed to evaluate {:?}: {}", $input, e));
            pretty_assertions::assert_eq!(evaluation.value, $value, "value of {:?}", $input);
            pretty_assertions::assert_eq!(
                evaluation.render(),
                $rendered,
                "rendering of {:?}",
                $input
            );
        }
    };
    (
        $name:ident,
        input: $input:expr,
        parse_error: $kind:pat $(,)?
    ) => {
        #[test]
        fn $name() {
            match $crate::cases::Interpreter::default().evaluate($input) {
                Ok(evaluation) => panic!(
                    "Expected a parse error for {:?}, got {:?}",
                    $input, evaluation.value
                ),
                Err(lispy::Error::Parse(err)) => assert!(
                    matches!(err.kind, $kind),
                    "Unexpected parse error for {:?}: {:?}",
                    $input,
                    err.kind
                ),
            }
        }
    };
}
