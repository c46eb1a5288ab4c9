use std::ops::ControlFlow;

use crate::{
    ast::Expr,
    interpreter::{
        environment::Environment,
        evaluator::core::{EvalResult, Evaluate},
        value::core::Value,
    },
};

/// Outcome of evaluating an operand: either its value, or a `return`
/// wrapper that must unwind to the enclosing call.
pub(crate) type Operand<T> = EvalResult<ControlFlow<Value, T>>;

/// Takes the value out of an [`Operand`], handing a `return` wrapper straight
/// back to the caller of the surrounding `eval`.
macro_rules! proceed {
    ($operand:expr) => {
        match $operand? {
            ::std::ops::ControlFlow::Continue(value) => value,
            ::std::ops::ControlFlow::Break(unwind) => return Ok(unwind),
        }
    };
}

pub(crate) use proceed;

/// Evaluates an expression whose value feeds another computation.
pub(crate) fn eval_operand(expr: &Expr, env: &Environment) -> Operand<Value> {
    match expr.eval(env)? {
        unwind @ Value::ReturnValue(_) => Ok(ControlFlow::Break(unwind)),
        value => Ok(ControlFlow::Continue(value)),
    }
}

/// Evaluates expressions left to right, stopping at the first error or
/// `return`.
///
/// Used for call arguments and array elements.
pub(crate) fn eval_all(expressions: &[Expr], env: &Environment) -> Operand<Vec<Value>> {
    let mut values = Vec::with_capacity(expressions.len());

    for expr in expressions {
        match eval_operand(expr, env)? {
            ControlFlow::Continue(value) => values.push(value),
            ControlFlow::Break(unwind) => return Ok(ControlFlow::Break(unwind)),
        }
    }

    Ok(ControlFlow::Continue(values))
}
