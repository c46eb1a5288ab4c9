use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
    util::num::index_within,
};

/// Evaluates `collection[index]`.
///
/// Only arrays can be indexed, and only with integers. Indices outside the
/// array, negative ones included, yield `nil`.
///
/// # Errors
/// - [`RuntimeError::IndexNotSupported`] if `collection` is not an array.
/// - [`RuntimeError::InvalidIndex`] if `index` is not an integer.
pub fn eval_index(collection: &Value, index: &Value) -> EvalResult<Value> {
    let Value::Array(elements) = collection else {
        return Err(RuntimeError::IndexNotSupported { got: collection.type_name() });
    };
    let Value::Integer(index) = index else {
        return Err(RuntimeError::InvalidIndex { got: index.type_name() });
    };

    Ok(index_within(*index, elements.len()).map_or(Value::Nil, |i| elements[i].clone()))
}
