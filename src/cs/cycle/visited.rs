//! # Visited-set cycle detection
//!
//! Walks forward with a single pointer and records every node it passes. The
//! first node seen a second time is the cycle entry point: nodes before the
//! cycle are passed exactly once, and the walk enters the cycle at its entry
//! and goes around it in order until it arrives back at that same entry.
//!
//! Runs in \( O(n) \) time and \( O(n) \) extra space, where \( n \) is the
//! number of distinct nodes reached before the first repeat.

use std::collections::HashSet;
use std::fmt::Display;

use bitvec::prelude::*;
use num_traits::PrimInt;

use crate::cs::cycle::functional::{ensure_len, successor, to_value, ROOT};
use crate::cs::cycle::list::Successors;
use crate::cs::error::Result;

/// Returns the node where the cycle reachable from `start` begins, or `None`
/// if the walk reaches the end of the chain.
///
/// Visited nodes are keyed by handle, so nodes holding equal values are still
/// told apart.
pub fn find_cycle_set<S: Successors>(list: &S, start: S::Node) -> Option<S::Node> {
    let mut visited = HashSet::new();
    let mut current = Some(start);
    while let Some(node) = current {
        if !visited.insert(node) {
            return Some(node);
        }
        current = list.advance(node);
    }
    None
}

/// Finds the duplicated value of `array` by walking it as a functional graph
/// from index `0` and returning the first position visited twice.
///
/// Values are bounded by the array length, so the visited set is a bit
/// vector with one bit per position.
///
/// # Errors
/// `EmptyInput` if `array` has fewer than 2 elements and `MalformedInput` if
/// the walk reaches a value outside `[1, len - 1]`.
///
/// # Examples
/// ```
/// use cycle_finder::cycle::find_duplicate_set;
///
/// assert_eq!(find_duplicate_set(&[3u32, 1, 3, 4, 2]).unwrap(), 3);
/// ```
pub fn find_duplicate_set<T>(array: &[T]) -> Result<T>
where
    T: PrimInt + Display,
{
    ensure_len(array)?;
    let mut visited = bitvec![0; array.len()];
    let mut current = ROOT;
    while !visited.replace(current, true) {
        current = successor(array, current)?;
    }
    log::debug!("visited walk revisited position {current}");
    to_value(current)
}
