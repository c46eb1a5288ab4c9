/// The `Value` enum and its rendering, truthiness and identity rules.
pub mod core;

/// User function values.
///
/// Defines closures produced by function literals and the partially applied
/// functions produced when a call supplies fewer arguments than parameters.
pub mod function;
