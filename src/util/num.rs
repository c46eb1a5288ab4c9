/// Converts a length or count to the language's integer type.
///
/// Lengths that do not fit in an `i64` saturate at `i64::MAX`.
///
/// ## Example
/// ```
/// use lainoa::util::num::usize_to_i64_saturating;
///
/// assert_eq!(usize_to_i64_saturating(3), 3);
/// assert_eq!(usize_to_i64_saturating(usize::MAX), i64::MAX);
/// ```
#[must_use]
pub fn usize_to_i64_saturating(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Turns a language integer into a position inside a collection of `len`
/// elements.
///
/// ## Returns
/// - `Some(usize)`: If `0 <= index < len`.
/// - `None`: For negative or out of range indices.
///
/// ## Example
/// ```
/// use lainoa::util::num::index_within;
///
/// assert_eq!(index_within(1, 3), Some(1));
/// assert_eq!(index_within(3, 3), None);
/// assert_eq!(index_within(-1, 3), None);
/// ```
#[must_use]
pub fn index_within(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}
