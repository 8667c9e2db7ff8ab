//! Error types shared by the cycle and duplicate finders.

use num_traits::ToPrimitive;
use thiserror::Error;

use crate::cs::cycle::list::NodeId;

/// Errors raised when an input violates the contract of a detection strategy
/// or when a problem cannot be generated from the given parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The array is too short to encode a functional graph with a duplicate.
    #[error("input must contain at least 2 elements, got {len}")]
    EmptyInput { len: usize },

    /// A traversal reached a value that is not a valid successor index.
    /// Values beyond the `i128` range saturate.
    #[error("malformed input: element at index {index} is {value}, expected a value in 1..{len}")]
    MalformedInput { index: usize, value: i128, len: usize },

    /// A traversal tried to read past the end of the array.
    #[error("index {index} is out of bounds for an array of {len} elements")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A scan finished without seeing any value twice.
    #[error("no duplicate value present")]
    NoDuplicate,

    /// A generator or harness parameter cannot produce a valid problem.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A node handle does not belong to the arena it was used with.
    #[error("unknown node {0:?}")]
    UnknownNode(NodeId),
}

impl Error {
    pub fn malformed<V: ToPrimitive>(index: usize, value: V, len: usize) -> Self {
        let value = value.to_i128().unwrap_or(i128::MAX);
        Error::MalformedInput { index, value, len }
    }

    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Result type for cycle detection operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message() {
        let err = Error::malformed(4, 9, 5);
        assert_eq!(
            err.to_string(),
            "malformed input: element at index 4 is 9, expected a value in 1..5"
        );
    }

    #[test]
    fn test_malformed_keeps_numeric_value() {
        assert!(matches!(
            Error::malformed(2, -7i32, 3),
            Error::MalformedInput { index: 2, value: -7, len: 3 }
        ));
        assert!(matches!(
            Error::malformed(0, u128::MAX, 2),
            Error::MalformedInput { value: i128::MAX, .. }
        ));
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = Error::IndexOutOfBounds { index: 5, len: 5 };
        assert_eq!(err.to_string(), "index 5 is out of bounds for an array of 5 elements");
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = Error::invalid_parameter("n", "must be at least 1");
        assert_eq!(err.to_string(), "invalid parameter `n`: must be at least 1");
    }
}
