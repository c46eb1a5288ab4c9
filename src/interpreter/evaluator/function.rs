/// Array and conversion builtins: `len`, `to_string`, `push`, `head` and
/// `rest`.
pub mod builtin;

/// The `puts` builtin.
///
/// Writes a value to standard output.
pub mod print;

pub mod core;
