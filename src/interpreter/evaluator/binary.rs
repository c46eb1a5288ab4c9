use std::rc::Rc;

use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies an infix operator to two evaluated operands.
///
/// Rules, in order:
/// - two integers: arithmetic and comparisons;
/// - two strings: `+` concatenates, `==`/`!=` compare contents;
/// - `==`/`!=` on anything else: identity, see [`Value::is_identical`];
/// - operands of different types: type mismatch;
/// - otherwise: the operator is unknown for that type.
///
/// # Errors
/// - [`RuntimeError::DivisionByZero`] for `x / 0`.
/// - [`RuntimeError::TypeMismatch`] and [`RuntimeError::UnknownInfixOperator`]
///   as described above.
pub fn eval_infix(left: &Value, operator: InfixOperator, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(*l, operator, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(l, operator, r),
        _ => match operator {
            InfixOperator::Equal => Ok(left.is_identical(right).into()),
            InfixOperator::NotEqual => Ok((!left.is_identical(right)).into()),
            _ if left.type_name() != right.type_name() => {
                Err(RuntimeError::TypeMismatch { left:     left.type_name(),
                                                 operator: operator.to_string(),
                                                 right:    right.type_name(), })
            },
            _ => Err(unknown_operator(left, operator, right)),
        },
    }
}

/// Integer arithmetic wraps on overflow.
fn eval_integer_infix(left: i64, operator: InfixOperator, right: i64) -> EvalResult<Value> {
    let value = match operator {
        InfixOperator::Add => Value::Integer(left.wrapping_add(right)),
        InfixOperator::Sub => Value::Integer(left.wrapping_sub(right)),
        InfixOperator::Mul => Value::Integer(left.wrapping_mul(right)),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { dividend: left });
            }
            Value::Integer(left.wrapping_div(right))
        },
        InfixOperator::Less => (left < right).into(),
        InfixOperator::Greater => (left > right).into(),
        InfixOperator::Equal => (left == right).into(),
        InfixOperator::NotEqual => (left != right).into(),
    };
    Ok(value)
}

fn eval_string_infix(left: &Rc<str>, operator: InfixOperator, right: &Rc<str>) -> EvalResult<Value> {
    match operator {
        InfixOperator::Add => Ok(format!("{left}{right}").into()),
        InfixOperator::Equal => Ok((left == right).into()),
        InfixOperator::NotEqual => Ok((left != right).into()),
        _ => Err(RuntimeError::UnknownInfixOperator { left:     "STRING",
                                                      operator: operator.to_string(),
                                                      right:    "STRING", }),
    }
}

fn unknown_operator(left: &Value, operator: InfixOperator, right: &Value) -> RuntimeError {
    RuntimeError::UnknownInfixOperator { left:     left.type_name(),
                                         operator: operator.to_string(),
                                         right:    right.type_name(), }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infix(left: impl Into<Value>, operator: InfixOperator, right: impl Into<Value>) -> EvalResult<Value> {
        eval_infix(&left.into(), operator, &right.into())
    }

    #[test]
    fn integer_arithmetic_wraps() {
        assert_eq!(infix(i64::MAX, InfixOperator::Add, 1_i64), Ok(Value::Integer(i64::MIN)));
        assert_eq!(infix(i64::MIN, InfixOperator::Div, -1_i64), Ok(Value::Integer(i64::MIN)));
        assert_eq!(infix(7_i64, InfixOperator::Div, 2_i64), Ok(Value::Integer(3)));
        assert_eq!(infix(7_i64, InfixOperator::Div, 0_i64), Err(RuntimeError::DivisionByZero { dividend: 7 }));
    }

    #[test]
    fn strings() {
        assert_eq!(infix("ab", InfixOperator::Add, "cd"), Ok(Value::from("abcd")));
        assert_eq!(infix("ab", InfixOperator::Equal, "ab"), Ok(Value::Boolean(true)));
        assert_eq!(infix("ab", InfixOperator::Sub, "cd").unwrap_err().to_string(),
                   "unknown operator: STRING - STRING");
    }

    #[test]
    fn mixed_operands() {
        assert_eq!(infix(1_i64, InfixOperator::Equal, "1"), Ok(Value::Boolean(false)));
        assert_eq!(infix(true, InfixOperator::NotEqual, false), Ok(Value::Boolean(true)));
        assert_eq!(infix(5_i64, InfixOperator::Add, true).unwrap_err().to_string(),
                   "type mismatch: INTEGER + BOOLEAN");
        assert_eq!(infix(true, InfixOperator::Add, false).unwrap_err().to_string(),
                   "unknown operator: BOOLEAN + BOOLEAN");
    }
}
