use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` works on truthiness and accepts any value. `-` and `+` are only
/// defined for integers; negation wraps, so `-x` of the smallest integer is
/// itself.
///
/// # Errors
/// [`RuntimeError::UnknownPrefixOperator`] for `-` or `+` on a non-integer.
///
/// # Example
/// ```
/// use lainoa::{
///     ast::PrefixOperator,
///     interpreter::{evaluator::unary::eval_prefix, value::core::Value},
/// };
///
/// assert_eq!(eval_prefix(PrefixOperator::Not, &Value::Integer(0)).unwrap(), Value::Boolean(false));
/// assert_eq!(eval_prefix(PrefixOperator::Negate, &Value::Integer(5)).unwrap(), Value::Integer(-5));
/// assert!(eval_prefix(PrefixOperator::Negate, &Value::Boolean(true)).is_err());
/// ```
pub fn eval_prefix(operator: PrefixOperator, operand: &Value) -> EvalResult<Value> {
    match (operator, operand) {
        (PrefixOperator::Not, value) => Ok((!value.is_truthy()).into()),
        (PrefixOperator::Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
        (PrefixOperator::Plus, Value::Integer(n)) => Ok(Value::Integer(*n)),
        (operator, value) => Err(RuntimeError::UnknownPrefixOperator { operator: operator.to_string(),
                                                                       operand:  value.type_name(), }),
    }
}
