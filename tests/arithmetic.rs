mod cases;

use cases::*;

test_case!(
    simple_addition,
    input: "(+ 1 2)",
    value: Value::Number(3),
    rendered: "3",
);

test_case!(
    nested_expression,
    input: "(* 2 (+ 1 2))",
    value: Value::Number(6),
    rendered: "6",
);

test_case!(
    bare_program,
    input: "+ 5 (* 2 2)",
    value: Value::Number(9),
    rendered: "9",
);

test_case!(
    bare_program_many_operands,
    input: "* 10 (/ 10 2)",
    value: Value::Number(50),
    rendered: "50",
);

test_case!(
    single_number,
    input: "42",
    value: Value::Number(42),
    rendered: "42",
);

test_case!(
    negative_number,
    input: "-7",
    value: Value::Number(-7),
    rendered: "-7",
);

test_case!(
    negative_operands,
    input: "(+ -1 -2)",
    value: Value::Number(-3),
    rendered: "-3",
);

test_case!(
    left_associative_subtraction,
    input: "(- 10 1 2 3)",
    value: Value::Number(4),
    rendered: "4",
);
// ((10 - 1) - 2) - 3

test_case!(
    left_associative_power,
    input: "(^ 2 3 2)",
    value: Value::Number(64),
    rendered: "64",
);
// (2 ^ 3) ^ 2, not 2 ^ (3 ^ 2)

test_case!(
    truncating_division,
    input: "(/ -7 2)",
    value: Value::Number(-3),
    rendered: "-3",
);

test_case!(
    remainder_sign_follows_dividend,
    input: "(% -7 3)",
    value: Value::Number(-1),
    rendered: "-1",
);

test_case!(
    power,
    input: "(^ 2 10)",
    value: Value::Number(1024),
    rendered: "1024",
);

test_case!(
    negative_exponent_is_one,
    input: "(^ 5 -2)",
    value: Value::Number(1),
    rendered: "1",
);

test_case!(
    minimum,
    input: "(min 3 5 1)",
    value: Value::Number(1),
    rendered: "1",
);

test_case!(
    maximum,
    input: "(max 3 5 1)",
    value: Value::Number(5),
    rendered: "5",
);

test_case!(
    single_operand,
    input: "(- 5)",
    value: Value::Number(5),
    rendered: "5",
);
// No unary negation: a lone operand is the result.

test_case!(
    whitespace_is_insignificant,
    input: "  (+\t1\n   (* 2   3))  ",
    value: Value::Number(7),
    rendered: "7",
);

test_case!(
    overflow_wraps,
    input: "(* 9223372036854775807 2)",
    value: Value::Number(-2),
    rendered: "-2",
);

test_case!(
    smallest_integer,
    input: "(+ -9223372036854775808 0)",
    value: Value::Number(i64::MIN),
    rendered: "-9223372036854775808",
);
