/// Parser state, the precedence table and the Pratt expression loop.
///
/// Also contains the program entry point and the error bookkeeping shared by
/// every production.
pub mod core;

/// Prefix handlers.
///
/// Literals, identifiers, prefix operators, grouping, `if`, function literals
/// and array literals.
pub mod unary;

/// Infix handlers: binary operators, calls, indexing and assignment.
pub mod binary;

/// Brace-delimited blocks.
pub mod block;

/// Statement dispatch: `let`, `return` and expression statements.
pub mod statement;

/// Comma-separated lists shared by calls, array literals and parameters.
pub mod utils;

pub use self::core::{Parser, Precedence, parse};
