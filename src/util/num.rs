use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Safely converts a `usize` length or position to an `i64`.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the value exceeds `i64::MAX`.
///
/// ## Parameters
/// - `value`: The length or position to convert.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use xmas::util::num::usize_to_i64_checked;
///
/// assert_eq!(usize_to_i64_checked(42, 1).unwrap(), 42);
/// ```
pub fn usize_to_i64_checked(value: usize, line: usize) -> EvalResult<i64> {
    i64::try_from(value).map_err(|_| RuntimeError::Overflow { line })
}

/// Converts an index into a position inside a sequence of `length` elements.
///
/// Valid positions are `0..length`.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfRange` for negative indices and indices
/// at or beyond `length`.
///
/// ## Parameters
/// - `index`: The index as written in the program.
/// - `length`: Number of elements in the indexed value.
/// - `line`: Source code line number for error reporting.
///
/// ## Example
/// ```
/// use xmas::{error::RuntimeError, util::num::element_position};
///
/// assert_eq!(element_position(2, 3, 1).unwrap(), 2);
///
/// let err = element_position(3, 3, 4).unwrap_err();
/// assert!(matches!(err, RuntimeError::IndexOutOfRange { index: 3, length: 3, line: 4 }));
///
/// assert!(element_position(-1, 3, 1).is_err());
/// ```
pub fn element_position(index: i64, length: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(index).ok()
                          .filter(|position| *position < length)
                          .ok_or(RuntimeError::IndexOutOfRange { index, length, line })
}

/// Converts a slice bound into an offset inside a sequence of `length`
/// elements.
///
/// Unlike [`element_position`], the offset `length` itself is valid, since
/// slices are half-open.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfRange` for negative bounds and bounds
/// beyond `length`.
///
/// ## Example
/// ```
/// use xmas::util::num::slice_bound;
///
/// assert_eq!(slice_bound(3, 3, 1).unwrap(), 3);
/// assert!(slice_bound(4, 3, 1).is_err());
/// ```
pub fn slice_bound(bound: i64, length: usize, line: usize) -> EvalResult<usize> {
    usize::try_from(bound).ok()
                          .filter(|offset| *offset <= length)
                          .ok_or(RuntimeError::IndexOutOfRange { index: bound,
                                                                 length,
                                                                 line })
}

/// Number of elements in the inclusive integer range between `start` and
/// `end`, in either direction.
///
/// ## Errors
/// Returns `RuntimeError::Overflow` if the count does not fit in a `usize`.
///
/// ## Example
/// ```
/// use xmas::util::num::range_length;
///
/// assert_eq!(range_length(3, 1, 1).unwrap(), 3);
/// assert_eq!(range_length(-2, 2, 1).unwrap(), 5);
/// assert!(range_length(i64::MIN, i64::MAX, 1).is_err());
/// ```
pub fn range_length(start: i64, end: i64, line: usize) -> EvalResult<usize> {
    usize::try_from(end.abs_diff(start)).ok()
                                        .and_then(|span| span.checked_add(1))
                                        .ok_or(RuntimeError::Overflow { line })
}
