use std::{fmt, ptr, rc::Rc};

use crate::{
    ast::write_separated,
    error::RuntimeError,
    interpreter::{
        evaluator::function::core::BuiltinDef,
        value::function::{CurriedFunction, Function},
    },
};

/// Represents a runtime value in the interpreter.
///
/// Values are cheap to clone: arrays, strings and functions are reference
/// counted. Arrays are never mutated in place; builtins that "change" an
/// array return a new one.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64 bit signed integer.
    Integer(i64),
    /// An immutable string.
    String(Rc<str>),
    /// `true` or `false`.
    Boolean(bool),
    /// The absence of a value. Also the result of an `if` without a matching
    /// branch.
    Nil,
    /// An array of values.
    Array(Rc<Vec<Self>>),
    /// A closure created by a function literal.
    Function(Rc<Function>),
    /// A partially applied function.
    CurriedFunction(Rc<CurriedFunction>),
    /// A function implemented by the interpreter, such as `len`.
    Builtin(&'static BuiltinDef),
    /// Marks a value produced by `return` while it unwinds to the nearest
    /// call boundary. Never observable from programs.
    ReturnValue(Box<Self>),
    /// The result of a failed evaluation.
    Error(RuntimeError),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(Rc::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl Value {
    /// The type name used in error messages.
    ///
    /// # Example
    /// ```
    /// use lainoa::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    /// assert_eq!(Value::from(vec![Value::Nil]).type_name(), "ARRAY");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "INTEGER",
            Self::String(_) => "STRING",
            Self::Boolean(_) => "BOOLEAN",
            Self::Nil => "NIL",
            Self::Array(_) => "ARRAY",
            Self::Function(_) => "FUNCTION",
            Self::CurriedFunction(_) => "CURRIED_FUNCTION",
            Self::Builtin(_) => "BUILTIN",
            Self::ReturnValue(_) => "RETURN_VALUE",
            Self::Error(_) => "ERROR",
        }
    }

    /// `nil` and `false` are falsy; everything else, `0` included, is truthy.
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }

    /// Identity comparison, the fallback of `==` for operands that are not
    /// both integers or both strings.
    ///
    /// Booleans and `nil` compare by value. Arrays and functions are only
    /// identical to themselves, so two separately built `[1]` are not.
    #[must_use]
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::String(a), Self::String(b)) => Rc::ptr_eq(a, b),
            (Self::Array(a), Self::Array(b)) => Rc::ptr_eq(a, b),
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::CurriedFunction(a), Self::CurriedFunction(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => ptr::eq(*a, *b),
            _ => false,
        }
    }

    /// Strips a [`Value::ReturnValue`] wrapper, if any.
    #[must_use]
    pub fn unwrap_return(self) -> Self {
        match self {
            Self::ReturnValue(inner) => *inner,
            other => other,
        }
    }
}

/// Structural equality for data, identity for functions. Used by tests and
/// hosts; the language's own `==` goes through the evaluator.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Nil, Self::Nil) => true,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::ReturnValue(a), Self::ReturnValue(b)) => a == b,
            (Self::Error(a), Self::Error(b)) => a == b,
            _ => self.is_identical(other),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Nil => write!(f, "nil"),
            Self::Array(elements) => {
                write!(f, "[")?;
                write_separated(f, elements)?;
                write!(f, "]")
            },
            Self::Function(function) => write!(f, "{function}"),
            Self::CurriedFunction(curried) => write!(f, "{curried}"),
            Self::Builtin(builtin) => write!(f, "builtin function {}", builtin.name),
            Self::ReturnValue(inner) => write!(f, "{inner}"),
            Self::Error(error) => write!(f, "ERROR: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inspect_forms() {
        let array = Value::from(vec![Value::Integer(1), Value::from("a"), Value::Nil]);

        assert_eq!(array.to_string(), r#"[1, "a", nil]"#);
        assert_eq!(Value::Boolean(false).to_string(), "false");
        assert_eq!(Value::Error(RuntimeError::IdentifierNotFound { name: "x".to_string() }).to_string(),
                   "ERROR: identifier not found: x");
    }

    #[test]
    fn truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::from("").is_truthy());
        assert!(Value::from(Vec::new()).is_truthy());
        assert!(!Value::Nil.is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
    }

    #[test]
    fn identity_versus_structure() {
        let a = Value::from(vec![Value::Integer(1)]);
        let b = Value::from(vec![Value::Integer(1)]);

        assert!(a.is_identical(&a.clone()));
        assert!(!a.is_identical(&b));
        assert_eq!(a, b);
        assert!(Value::Nil.is_identical(&Value::Nil));
        assert!(!Value::Nil.is_identical(&Value::Boolean(false)));
    }
}
