use bumpalo::Bump;
use lispy::{Expr, Operator, eval, format, parse};
use pretty_assertions::assert_eq;

#[test]
fn parse_eval_format_pipeline() {
    let arena = Bump::new();
    let parsed = parse(&arena, "(* 2 (+ 1 2))").unwrap();
    assert_eq!(format(eval(&parsed)), "6");
}

#[test]
fn tree_shape_matches_input() {
    let arena = Bump::new();
    let parsed = parse(&arena, "(- 10 (min 1 2) 3)").unwrap();
    assert_eq!(
        parsed.expr,
        &Expr::Apply {
            op: Operator::Sub,
            operands: &[
                &Expr::Number("10"),
                &Expr::Apply {
                    op: Operator::Min,
                    operands: &[&Expr::Number("1"), &Expr::Number("2")],
                },
                &Expr::Number("3"),
            ],
        }
    );
}

#[test]
fn malformed_input_yields_no_tree() {
    let arena = Bump::new();
    for input in ["(+ 1 2", ")", "(+ 1 2))", "(1 2)", "min", "(+ 1 2) (+ 3 4)"] {
        assert!(parse(&arena, input).is_err(), "expected {:?} to fail", input);
    }
}

#[test]
fn parse_error_display_is_human_readable() {
    let arena = Bump::new();
    let err = parse(&arena, "(+ 1 2").unwrap_err();
    assert_eq!(
        err.to_string(),
        "error: Unclosed delimiter '(' [P002]\nhelp: Add the missing closing delimiter"
    );
}
