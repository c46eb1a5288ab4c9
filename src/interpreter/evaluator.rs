/// Core evaluation logic.
///
/// Contains the [`Evaluate`](core::Evaluate) trait, its implementations for
/// programs, blocks, statements and expressions, and the public
/// [`evaluate`](core::evaluate) entry point.
pub mod core;

/// Prefix operator evaluation.
///
/// Implements `!` on truthiness and `-`/`+` on integers.
pub mod unary;

/// Infix operator evaluation.
///
/// Integer arithmetic and comparisons, string concatenation and equality,
/// and the identity fallback of `==`/`!=`.
pub mod binary;

/// Index expressions on arrays.
pub mod index;

/// Function application and the builtin functions.
pub mod function;

/// Utility functions for the evaluator.
pub mod utils;
