use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Runtime errors travel through the evaluator as the `Err` side of
/// [`EvalResult`](crate::interpreter::evaluator::core::EvalResult) and surface
/// to callers as [`Value::Error`](crate::interpreter::value::core::Value).
/// Type names in the messages are the language's own (`INTEGER`, `ARRAY`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The identifier is neither bound in scope nor a builtin.
    #[error("identifier not found: {name}")]
    IdentifierNotFound {
        /// The name that was looked up.
        name: String,
    },
    /// `let` (or a parameter) tried to bind a name that is already reachable.
    #[error("can't re-bind already bound identifier `{name}`")]
    AlreadyBound {
        /// The name being bound.
        name: String,
    },
    /// `=` targeted a name that no enclosing scope has bound.
    #[error("can't assign identifier `{name}` because it doesn't exist, you need to do `let {name} = {value}` first")]
    NotBound {
        /// The name being assigned.
        name:  String,
        /// Inspection form of the value that was being assigned.
        value: String,
    },
    /// An infix operator was applied to operands of different types.
    #[error("type mismatch: {left} {operator} {right}")]
    TypeMismatch {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// An infix operator has no rule for this pair of operand types.
    #[error("unknown operator: {left} {operator} {right}")]
    UnknownInfixOperator {
        /// Type name of the left operand.
        left:     &'static str,
        /// The operator symbol.
        operator: String,
        /// Type name of the right operand.
        right:    &'static str,
    },
    /// A prefix operator has no rule for this operand type.
    #[error("unknown operator: {operator}{operand}")]
    UnknownPrefixOperator {
        /// The operator symbol.
        operator: String,
        /// Type name of the operand.
        operand:  &'static str,
    },
    /// Integer division with a zero divisor.
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero {
        /// The left operand of the division.
        dividend: i64,
    },
    /// A builtin was called with the wrong number of arguments.
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgumentCount {
        /// Number of arguments supplied.
        got:  usize,
        /// Number of arguments the builtin takes.
        want: usize,
    },
    /// A builtin accepts several types for this argument, none of which matched.
    #[error("argument to `{function}` not supported, got {got}")]
    UnsupportedArgument {
        /// The builtin's name.
        function: &'static str,
        /// Type name of the argument.
        got:      &'static str,
    },
    /// A builtin requires one specific type for this argument.
    #[error("argument to `{function}` must be {expected}, got {got}")]
    WrongArgumentType {
        /// The builtin's name.
        function: &'static str,
        /// Type name the builtin requires.
        expected: &'static str,
        /// Type name of the argument.
        got:      &'static str,
    },
    /// The callee of a call expression is not callable.
    #[error("expected {value} to be a function, got {got}")]
    NotAFunction {
        /// Inspection form of the callee.
        value: String,
        /// Type name of the callee.
        got:   &'static str,
    },
    /// Only arrays can be indexed.
    #[error("type {got} doesn't support index operations")]
    IndexNotSupported {
        /// Type name of the indexed value.
        got: &'static str,
    },
    /// Arrays must be indexed with integers.
    #[error("expected INTEGER as index for array, got {got}")]
    InvalidIndex {
        /// Type name of the index value.
        got: &'static str,
    },
}
