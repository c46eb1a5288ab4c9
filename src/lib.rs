//! # lainoa
//!
//! lainoa is a small expression-oriented language written in Rust.
//! It has integers, strings, booleans, `nil`, arrays, closures and automatic
//! currying: calling a function with fewer arguments than it declares returns
//! a function waiting for the rest.
//!
//! Source goes through the [`lexer`](interpreter::lexer), the error-recovering
//! [`parser`](interpreter::parser) and finally the tree-walking
//! [`evaluator`](interpreter::evaluator), which runs against an
//! [`Environment`] that outlives single runs (one per REPL session).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt::Write;

pub use crate::interpreter::{environment::Environment, value::core::Value};
use crate::{
    ast::Program,
    error::ParseError,
    interpreter::{evaluator::core::evaluate, lexer::Lexer},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent source code as a tree. The AST is built by the parser and
/// traversed by the evaluator. Every node prints back to a canonical, fully
/// parenthesized text form.
pub mod ast;
/// Provides error types for parsing and evaluation.
///
/// Parse errors carry the source position they refer to; runtime errors are
/// surfaced to programs as error values.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, the environment model, the
/// value representation and evaluation.
pub mod interpreter;
/// General utilities for integer conversions.
pub mod util;

/// Parses `source`, naming it `file` in error positions.
///
/// # Returns
/// The (possibly partial) program and every parse error found.
///
/// # Examples
/// ```
/// use lainoa::parse;
///
/// let (program, errors) = parse("-a * b", "example.ln");
/// assert!(errors.is_empty());
/// assert_eq!(program.to_string(), "((-a) * b)");
///
/// let (_, errors) = parse("let 5;", "example.ln");
/// assert_eq!(errors.len(), 1);
/// ```
#[must_use]
pub fn parse(source: &str, file: &str) -> (Program, Vec<ParseError>) {
    interpreter::parser::parse(Lexer::new(source, file))
}

/// Parses and evaluates `source` in `env`.
///
/// Nothing is evaluated if the source has parse errors. Runtime failures are
/// not Rust errors: they come back as [`Value::Error`].
///
/// # Errors
/// All parse errors, if there were any.
///
/// # Examples
/// ```
/// use lainoa::{Environment, Value, run};
///
/// let env = Environment::new();
/// run("let mul = fun(a, b, c, d) { a * b * c * d };", "example.ln", &env).unwrap();
///
/// let result = run("mul(5, 10)(3)(2)", "example.ln", &env).unwrap();
/// assert_eq!(result, Value::Integer(300));
///
/// // Runtime errors are values.
/// let result = run("x = 1;", "example.ln", &env).unwrap();
/// assert!(matches!(result, Value::Error(_)));
///
/// // Parse errors are not.
/// assert!(run("let = 1;", "example.ln", &env).is_err());
/// ```
pub fn run(source: &str, file: &str, env: &Environment) -> Result<Value, Vec<ParseError>> {
    let (program, errors) = parse(source, file);
    if !errors.is_empty() {
        return Err(errors);
    }

    tracing::debug!(file, statements = program.statements.len(), "evaluating program");
    Ok(evaluate(&program, env))
}

/// Formats parse errors for people, one `- file:line: message` line each,
/// under a short heading.
///
/// # Examples
/// ```
/// use lainoa::{format_parse_errors, parse};
///
/// let (_, errors) = parse("let 5;", "main.ln");
///
/// assert_eq!(format_parse_errors(&errors),
///            "Oops! Something is wrong here:\n\
///             - main.ln:1: expected next token to be IDENT, got INT instead\n");
/// ```
#[must_use]
pub fn format_parse_errors(errors: &[ParseError]) -> String {
    let mut report = String::from("Oops! Something is wrong here:\n");
    for error in errors {
        let _ = writeln!(report, "- {}", error.report());
    }
    report
}
