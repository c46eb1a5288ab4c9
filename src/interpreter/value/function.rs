use std::{fmt, rc::Rc};

use crate::{
    ast::{BlockStatement, write_separated},
    interpreter::environment::Environment,
};

/// A closure: the parameters and body of a function literal together with
/// the environment that was active where the literal was evaluated.
#[derive(Debug)]
pub struct Function {
    /// The parameter names, in order.
    pub parameters: Rc<[String]>,
    /// The body, shared with the syntax tree.
    pub body:       Rc<BlockStatement>,
    /// The captured environment.
    pub env:        Environment,
}

/// A function that received fewer arguments than it has parameters.
///
/// `env` already binds the parameters that were supplied; calling the value
/// binds the next ones in order.
#[derive(Debug)]
pub struct CurriedFunction {
    /// The function being applied.
    pub function:  Rc<Function>,
    /// The function's environment extended with the supplied arguments.
    pub env:       Environment,
    /// Parameters still waiting for an argument.
    pub remaining: Rc<[String]>,
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fun(")?;
        write_separated(f, &self.parameters)?;
        write!(f, ") {{ {} }}", self.body)
    }
}

impl fmt::Display for CurriedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "curried fun(")?;
        write_separated(f, &self.remaining)?;
        write!(f, ") {{ {} }}", self.function.body)
    }
}
