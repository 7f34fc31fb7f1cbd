//! Operator dispatch over values.

use crate::{
    parser::Operator,
    values::{ErrorKind, Value},
};

/// Combine two values under an operator given by its source symbol.
///
/// An error operand is returned unchanged, checking `x` before `y`.
/// Otherwise an unrecognised symbol yields `Error(BadOperator)`.
pub fn apply_operator(op: &str, x: Value, y: Value) -> Value {
    match Operator::from_symbol(op) {
        Some(op) => apply(op, x, y),
        None => match operands(x, y) {
            Ok(_) => Value::Error(ErrorKind::BadOperator),
            Err(error) => error,
        },
    }
}

/// Combine two values under a resolved operator.
pub fn apply(op: Operator, x: Value, y: Value) -> Value {
    match operands(x, y) {
        Ok((left, right)) => eval_binary_int(op, left, right).into(),
        Err(error) => error,
    }
}

/// Unwrap two numeric operands, or return the error value to propagate.
///
/// `x` is checked before `y`.
fn operands(x: Value, y: Value) -> Result<(i64, i64), Value> {
    match (x, y) {
        (Value::Error(_), _) => Err(x),
        (_, Value::Error(_)) => Err(y),
        (Value::Number(left), Value::Number(right)) => Ok((left, right)),
    }
}

/// Evaluate a binary operation on two integers.
///
/// Uses wrapping arithmetic to prevent panics on overflow.
/// Division and remainder by zero return an error.
pub(super) fn eval_binary_int(op: Operator, left: i64, right: i64) -> Result<i64, ErrorKind> {
    match op {
        Operator::Add => Ok(left.wrapping_add(right)),
        Operator::Sub => Ok(left.wrapping_sub(right)),
        Operator::Mul => Ok(left.wrapping_mul(right)),
        Operator::Div => {
            if right == 0 {
                Err(ErrorKind::DivisionByZero)
            } else {
                // Use wrapping_div to handle i64::MIN / -1 case
                Ok(left.wrapping_div(right))
            }
        }
        Operator::Rem => {
            if right == 0 {
                Err(ErrorKind::DivisionByZero)
            } else {
                Ok(left.wrapping_rem(right))
            }
        }
        Operator::Pow => Ok(int_pow(left, right)),
        Operator::Min => Ok(left.min(right)),
        Operator::Max => Ok(left.max(right)),
    }
}

/// `base` multiplied by itself `exp` times, wrapping on overflow.
///
/// A non-positive exponent is the empty product, 1.
fn int_pow(base: i64, exp: i64) -> i64 {
    if exp <= 0 {
        return 1;
    }
    let mut result: i64 = 1;
    let mut base = base;
    let mut exp = exp as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        exp >>= 1;
        if exp > 0 {
            base = base.wrapping_mul(base);
        }
    }
    result
}
