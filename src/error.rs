/// Parsing errors.
///
/// Defines every error the parser can record while turning tokens into an
/// AST. Parse errors never abort parsing: they are collected and returned
/// alongside the (possibly partial) program.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error kinds that can be produced during evaluation, such as
/// unbound identifiers, type mismatches, wrong arities or calls on values
/// that are not functions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
