use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Prints a value to standard output and returns it unchanged.
///
/// Strings are printed without quotes; integers, booleans and `nil` in their
/// usual form. Other values are rejected.
///
/// # Example
/// ```
/// use lainoa::interpreter::{evaluator::function::print::puts, value::core::Value};
///
/// // The function prints the value to stdout, but the doctest
/// // only checks the returned result.
/// let result = puts(&[Value::Integer(42)]).unwrap();
///
/// assert_eq!(result, Value::Integer(42));
/// ```
pub fn puts(args: &[Value]) -> EvalResult<Value> {
    let value = &args[0];
    match value {
        Value::String(s) => println!("{s}"),
        Value::Integer(_) | Value::Boolean(_) | Value::Nil => println!("{value}"),
        other => {
            return Err(RuntimeError::UnsupportedArgument { function: "puts",
                                                           got:      other.type_name(), });
        },
    }

    Ok(value.clone())
}
