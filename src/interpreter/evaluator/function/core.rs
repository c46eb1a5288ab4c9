use std::{fmt, rc::Rc};

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            core::{EvalResult, Evaluate},
            function::{builtin, print},
        },
        value::{
            core::Value,
            function::{CurriedFunction, Function},
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives a slice of evaluated argument values whose length has
/// already been checked against its arity.
type BuiltinFn = fn(&[Value]) -> EvalResult<Value>;

/// A function provided by the interpreter.
pub struct BuiltinDef {
    /// The name programs call it by.
    pub name:  &'static str,
    /// The exact number of arguments it takes.
    pub arity: usize,
    func:      BuiltinFn,
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the number of arguments,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE`, the static table [`lookup_builtin`]
/// searches.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "len"       => { arity: 1, func: builtin::len },
    "to_string" => { arity: 1, func: builtin::to_string },
    "puts"      => { arity: 1, func: print::puts },
    "push"      => { arity: 2, func: builtin::push },
    "head"      => { arity: 1, func: builtin::head },
    "rest"      => { arity: 1, func: builtin::rest },
}

impl BuiltinDef {
    /// Checks the argument count, then runs the builtin.
    ///
    /// # Errors
    /// [`RuntimeError::WrongArgumentCount`] before anything else, then
    /// whatever type errors the builtin reports.
    pub fn call(&self, args: &[Value]) -> EvalResult<Value> {
        if args.len() != self.arity {
            return Err(RuntimeError::WrongArgumentCount { got:  args.len(),
                                                          want: self.arity, });
        }
        (self.func)(args)
    }
}

impl fmt::Debug for BuiltinDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuiltinDef")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Finds the builtin called `name`.
///
/// # Example
/// ```
/// use lainoa::interpreter::evaluator::function::core::lookup_builtin;
///
/// assert_eq!(lookup_builtin("push").map(|b| b.arity), Some(2));
/// assert!(lookup_builtin("pop").is_none());
/// ```
#[must_use]
pub fn lookup_builtin(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|b| b.name == name)
}

/// Calls `callee` with already evaluated arguments.
///
/// User functions bind their leading parameters in a new scope chained to the
/// environment they captured. With fewer arguments than parameters the result
/// is a [`CurriedFunction`] waiting for the rest; otherwise the body runs and
/// a `return` inside it is unwrapped. Surplus arguments are ignored.
///
/// # Errors
/// - [`RuntimeError::AlreadyBound`] if a parameter name is already visible
///   from the captured environment.
/// - [`RuntimeError::NotAFunction`] if `callee` cannot be called.
/// - Any error raised by the body or the builtin.
pub fn apply(callee: Value, arguments: Vec<Value>) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => {
            let env = function.env.clone();
            let parameters = Rc::clone(&function.parameters);
            apply_function(&function, &env, &parameters, arguments)
        },
        Value::CurriedFunction(curried) => {
            apply_function(&curried.function, &curried.env, &curried.remaining, arguments)
        },
        Value::Builtin(builtin) => {
            tracing::trace!(builtin = builtin.name, arguments = arguments.len(), "calling builtin");
            builtin.call(&arguments)
        },
        other => Err(RuntimeError::NotAFunction { value: other.to_string(),
                                                  got:   other.type_name(), }),
    }
}

fn apply_function(function: &Rc<Function>,
                  env: &Environment,
                  parameters: &Rc<[String]>,
                  arguments: Vec<Value>)
                  -> EvalResult<Value> {
    tracing::trace!(parameters = parameters.len(), arguments = arguments.len(), "applying function");

    let scope = env.push_scope();
    let supplied = arguments.len().min(parameters.len());
    for (name, value) in parameters.iter().zip(arguments) {
        scope.bind(name, value)?;
    }

    if supplied < parameters.len() {
        let remaining: Rc<[String]> = Rc::from(&parameters[supplied..]);
        tracing::trace!(remaining = remaining.len(), "currying");
        return Ok(Value::CurriedFunction(Rc::new(CurriedFunction { function: Rc::clone(function),
                                                                   env: scope,
                                                                   remaining })));
    }

    Ok(function.body.eval(&scope)?.unwrap_return())
}
