/// Integer conversion helpers.
///
/// The language only has `i64` integers while Rust collections are measured
/// in `usize`. These helpers convert between the two without panicking or
/// silently truncating.
pub mod num;
