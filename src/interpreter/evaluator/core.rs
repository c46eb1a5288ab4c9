use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::{
            binary::eval_infix,
            function::core::{apply, lookup_builtin},
            index::eval_index,
            unary::eval_prefix,
            utils::{eval_all, eval_operand, proceed},
        },
        value::{core::Value, function::Function},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure. `?` gives the "stop at the first
/// error" rule for every operand.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A syntax tree node that can be evaluated in an environment.
pub trait Evaluate {
    /// Evaluates the node.
    ///
    /// A `return` surfaces as [`Value::ReturnValue`] until a call boundary
    /// (or the program) unwraps it. Operand positions never consume the
    /// wrapper: they hand it on to the enclosing block.
    ///
    /// # Errors
    /// The first [`RuntimeError`] raised while evaluating the node.
    fn eval(&self, env: &Environment) -> EvalResult<Value>;
}

/// Evaluates `node` in `env`, folding failures into [`Value::Error`].
///
/// This is the public entry point of the evaluator: the result is always a
/// value, and a `return` wrapper never escapes it.
///
/// # Example
/// ```
/// use lainoa::{
///     interpreter::{environment::Environment, evaluator::core::evaluate, value::core::Value},
///     parse,
/// };
///
/// let (program, errors) = parse("let double = fun(x) { x * 2 }; double(21)", "example.ln");
/// assert!(errors.is_empty());
///
/// let env = Environment::new();
/// assert_eq!(evaluate(&program, &env), Value::Integer(42));
/// assert!(matches!(evaluate(&program, &env), Value::Error(_)));
/// ```
pub fn evaluate<N: Evaluate + ?Sized>(node: &N, env: &Environment) -> Value {
    match node.eval(env) {
        Ok(value) => value.unwrap_return(),
        Err(error) => Value::Error(error),
    }
}

impl Evaluate for Program {
    fn eval(&self, env: &Environment) -> EvalResult<Value> {
        let mut result = Value::Nil;

        for statement in &self.statements {
            result = statement.eval(env)?;
            if matches!(result, Value::ReturnValue(_)) {
                return Ok(result.unwrap_return());
            }
        }

        Ok(result)
    }
}

/// Unlike a program, a block hands a `return` wrapper to its caller so the
/// enclosing function can stop too.
impl Evaluate for BlockStatement {
    fn eval(&self, env: &Environment) -> EvalResult<Value> {
        let mut result = Value::Nil;

        for statement in &self.statements {
            result = statement.eval(env)?;
            if matches!(result, Value::ReturnValue(_)) {
                break;
            }
        }

        Ok(result)
    }
}

impl Evaluate for Statement {
    fn eval(&self, env: &Environment) -> EvalResult<Value> {
        match self {
            Self::Let { name, value } => {
                let value = proceed!(eval_operand(value, env));
                env.bind(name, value.clone())?;
                Ok(value)
            },
            Self::Return { value } => {
                Ok(Value::ReturnValue(Box::new(proceed!(eval_operand(value, env)))))
            },
            Self::Expression { expr } => expr.eval(env),
        }
    }
}

impl Evaluate for Expr {
    fn eval(&self, env: &Environment) -> EvalResult<Value> {
        match self {
            Self::Identifier { name } => eval_identifier(name, env),
            Self::IntegerLiteral(value) => Ok(Value::Integer(*value)),
            Self::StringLiteral(value) => Ok(value.as_str().into()),
            Self::BooleanLiteral(value) => Ok((*value).into()),
            Self::NilLiteral => Ok(Value::Nil),
            Self::ArrayLiteral { elements } => Ok(proceed!(eval_all(elements, env)).into()),
            Self::Prefix { operator, operand } => {
                eval_prefix(*operator, &proceed!(eval_operand(operand, env)))
            },
            Self::Infix { left, operator, right } => {
                let left = proceed!(eval_operand(left, env));
                let right = proceed!(eval_operand(right, env));
                eval_infix(&left, *operator, &right)
            },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                eval_if(condition, consequence, alternative.as_ref(), env)
            },
            Self::Function { parameters, body } => {
                Ok(Value::Function(Rc::new(Function { parameters: Rc::clone(parameters),
                                                      body:       Rc::clone(body),
                                                      env:        env.clone(), })))
            },
            Self::Call { callee, arguments } => {
                let callee = proceed!(eval_operand(callee, env));
                let arguments = proceed!(eval_all(arguments, env));
                apply(callee, arguments)
            },
            Self::Index { collection, index } => {
                let collection = proceed!(eval_operand(collection, env));
                let index = proceed!(eval_operand(index, env));
                eval_index(&collection, &index)
            },
            Self::Assign { name, value } => {
                let value = proceed!(eval_operand(value, env));
                env.rebind(name, value.clone())?;
                Ok(value)
            },
        }
    }
}

/// Resolves a name: user bindings first, then builtins.
fn eval_identifier(name: &str, env: &Environment) -> EvalResult<Value> {
    env.lookup(name)
       .or_else(|| lookup_builtin(name).map(Value::Builtin))
       .ok_or_else(|| RuntimeError::IdentifierNotFound { name: name.to_string() })
}

/// Evaluates a conditional. The chosen branch runs in its own scope, so its
/// bindings do not outlive it.
fn eval_if(condition: &Expr,
           consequence: &BlockStatement,
           alternative: Option<&BlockStatement>,
           env: &Environment)
           -> EvalResult<Value> {
    if proceed!(eval_operand(condition, env)).is_truthy() {
        consequence.eval(&env.push_scope())
    } else if let Some(alternative) = alternative {
        alternative.eval(&env.push_scope())
    } else {
        Ok(Value::Nil)
    }
}
