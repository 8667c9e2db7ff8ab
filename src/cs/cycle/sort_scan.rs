//! Sort-then-scan duplicate detection.
//!
//! Serves as the performance baseline for the functional-graph strategies:
//! \( O(n \log n) \) time and \( O(n) \) extra space for the sorted copy. The
//! input is left untouched.

use crate::cs::error::{Error, Result};

/// Sorts a copy of `array` and returns the first value equal to its neighbour.
///
/// Unlike the graph walks this places no range requirement on the values.
///
/// # Errors
/// `NoDuplicate` if every value is distinct.
///
/// # Examples
/// ```
/// use cycle_finder::cycle::find_duplicate_sort;
///
/// assert_eq!(find_duplicate_sort(&[3u32, 1, 3, 4, 2]).unwrap(), 3);
/// ```
pub fn find_duplicate_sort<T>(array: &[T]) -> Result<T>
where
    T: Ord + Copy,
{
    let mut sorted = array.to_vec();
    sorted.sort_unstable();
    sorted
        .windows(2)
        .find(|w| w[0] == w[1])
        .map(|w| w[0])
        .ok_or(Error::NoDuplicate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_array() {
        assert_eq!(find_duplicate_sort(&[3u32, 1, 3, 4, 2]), Ok(3));
    }

    #[test]
    fn test_input_not_modified() {
        let array = vec![4u32, 2, 1, 3, 2];
        assert_eq!(find_duplicate_sort(&array), Ok(2));
        assert_eq!(array, vec![4, 2, 1, 3, 2]);
    }

    #[test]
    fn test_no_duplicate() {
        assert_eq!(find_duplicate_sort(&[1u32, 2, 3]), Err(Error::NoDuplicate));
        assert_eq!(find_duplicate_sort::<u32>(&[]), Err(Error::NoDuplicate));
    }

    #[test]
    fn test_minimal_array() {
        assert_eq!(find_duplicate_sort(&[1u64, 1]), Ok(1));
    }
}
