//! Arrays read as functional graphs.
//!
//! An array of length `n + 1` holding values in `[1, n]` defines a graph in
//! which position `i` has a single outgoing edge to position `array[i]`. No
//! value is `0`, so position `0` has no incoming edge and every walk from it
//! ends in the cycle whose entry point is the duplicated value.

use std::fmt::Display;

use num_traits::PrimInt;

use crate::cs::error::{Error, Result};

/// Position every array walk starts from.
pub const ROOT: usize = 0;

/// Rejects arrays too short to hold a duplicate.
#[inline]
pub fn ensure_len<T>(array: &[T]) -> Result<()> {
    if array.len() < 2 {
        return Err(Error::EmptyInput { len: array.len() });
    }
    Ok(())
}

/// Follows the edge out of `index`.
///
/// The target must be a valid position other than the root, i.e. a value in
/// `[1, len - 1]`. Anything else is reported as malformed input rather than
/// wrapped or clamped, and an `index` past the end as out of bounds.
#[inline]
pub fn successor<T>(array: &[T], index: usize) -> Result<usize>
where
    T: PrimInt + Display,
{
    let len = array.len();
    let value = match array.get(index) {
        Some(v) => *v,
        None => return Err(Error::IndexOutOfBounds { index, len }),
    };
    match value.to_usize() {
        Some(next) if next >= 1 && next < len => Ok(next),
        _ => {
            log::warn!("rejecting element {value} at index {index} of a {len}-element array");
            Err(Error::malformed(index, value, len))
        }
    }
}

/// Converts a position reached by a walk back into the element type.
#[inline]
pub(crate) fn to_value<T: PrimInt>(position: usize) -> Result<T> {
    T::from(position).ok_or_else(|| {
        let reason = format!("position {position} does not fit the element type");
        Error::invalid_parameter("array", reason)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successor_follows_value() {
        let array = [3u32, 1, 3, 4, 2];
        assert_eq!(successor(&array, 0), Ok(3));
        assert_eq!(successor(&array, 3), Ok(4));
        assert_eq!(successor(&array, 4), Ok(2));
    }

    #[test]
    fn test_successor_rejects_zero() {
        let array = [1i64, 0, 2];
        assert_eq!(successor(&array, 1), Err(Error::malformed(1, 0, 3)));
    }

    #[test]
    fn test_successor_rejects_out_of_range() {
        let array = [1u8, 3, 2];
        assert_eq!(successor(&array, 1), Err(Error::malformed(1, 3, 3)));
    }

    #[test]
    fn test_successor_rejects_negative() {
        let array = [1i32, -1, 2];
        assert_eq!(successor(&array, 1), Err(Error::malformed(1, -1, 3)));
        assert!(matches!(
            successor(&array, 1),
            Err(Error::MalformedInput { index: 1, value: -1, len: 3 })
        ));
    }

    #[test]
    fn test_successor_rejects_index_past_end() {
        let array = [1u16, 1];
        assert_eq!(successor(&array, 2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn test_ensure_len() {
        assert_eq!(ensure_len::<u32>(&[]), Err(Error::EmptyInput { len: 0 }));
        assert_eq!(ensure_len(&[1u32]), Err(Error::EmptyInput { len: 1 }));
        assert!(ensure_len(&[1u32, 1]).is_ok());
    }
}
