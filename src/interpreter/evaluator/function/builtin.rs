use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::usize_to_i64_saturating,
};

/// Number of characters of a string or elements of an array.
///
/// Strings are measured in Unicode scalar values, not UTF-8 bytes, so
/// `len("héllo")` is 5.
///
/// # Example
/// ```
/// use lainoa::interpreter::{evaluator::function::builtin::len, value::core::Value};
///
/// assert_eq!(len(&[Value::from("four")]).unwrap(), Value::Integer(4));
/// assert!(len(&[Value::Integer(4)]).is_err());
/// ```
pub fn len(args: &[Value]) -> EvalResult<Value> {
    let count = match &args[0] {
        Value::String(s) => s.chars().count(),
        Value::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { function: "len",
                                                           got:      other.type_name(), });
        },
    };
    Ok(Value::Integer(usize_to_i64_saturating(count)))
}

/// Converts an integer to its decimal string. Strings are returned as they
/// are.
pub fn to_string(args: &[Value]) -> EvalResult<Value> {
    match &args[0] {
        Value::Integer(n) => Ok(n.to_string().into()),
        value @ Value::String(_) => Ok(value.clone()),
        other => Err(RuntimeError::UnsupportedArgument { function: "to_string",
                                                         got:      other.type_name(), }),
    }
}

/// Returns a new array with the second argument appended. The original array
/// is left untouched.
pub fn push(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("push", &args[0])?;

    let mut pushed = Vec::with_capacity(elements.len() + 1);
    pushed.extend(elements.iter().cloned());
    pushed.push(args[1].clone());
    Ok(pushed.into())
}

/// First element of an array, or `nil` if it is empty.
pub fn head(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("head", &args[0])?;
    Ok(elements.first().cloned().unwrap_or(Value::Nil))
}

/// A new array with every element but the first, or `nil` if the array is
/// empty.
pub fn rest(args: &[Value]) -> EvalResult<Value> {
    let elements = expect_array("rest", &args[0])?;
    Ok(match elements.split_first() {
        Some((_, tail)) => tail.to_vec().into(),
        None => Value::Nil,
    })
}

fn expect_array<'a>(function: &'static str, value: &'a Value) -> EvalResult<&'a Rc<Vec<Value>>> {
    match value {
        Value::Array(elements) => Ok(elements),
        other => Err(RuntimeError::WrongArgumentType { function,
                                                       expected: "ARRAY",
                                                       got: other.type_name() }),
    }
}
