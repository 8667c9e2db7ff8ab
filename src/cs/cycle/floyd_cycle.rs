//! # Floyd's Cycle Detection (Tortoise and Hare)
//!
//! This module provides Floyd's Cycle Detection (a.k.a. Tortoise and Hare) for
//! arena-backed linked chains and for arrays read as functional graphs. It
//! detects whether a cycle exists in \( O(n) \) time and \( O(1) \) extra
//! space, and identifies the node where the cycle begins.
//!
//! ## Overview
//!
//! Two pointers start from the same node. The tortoise advances one node at a
//! time, the hare two. If the hare falls off the end of the chain there is no
//! cycle. Otherwise both end up inside the cycle and the hare gains one node
//! per step, so they meet.
//!
//! Let \( \mu \) be the distance from the start to the cycle entry and
//! \( \lambda \) the cycle length. After \( k \) steps the tortoise is at
//! \( x_k \) and the hare at \( x_{2k} \); they coincide once \( k \ge \mu \)
//! and \( \lambda \mid k \), first at \( k = \mu + (\lambda - \mu \bmod \lambda) \bmod \lambda \)
//! (or \( k = \lambda \) when that is zero). The meeting point then sits
//! \( \mu \bmod \lambda \) nodes before the entry going around the cycle.
//! Putting one pointer back at the start and advancing both one node at a time,
//! after \( \mu \) steps the first is at the entry and the second is at
//! \( x_{k+\mu} \), which is also the entry because \( \lambda \mid k \). That is
//! the first node they share.
//!
//! ## Example Usage
//!
//! ```rust
//! use cycle_finder::cycle::{canonical_example, find_cycle_floyd, has_cycle};
//!
//! // 1 -> 2 -> 3 -> 4 -> 5 -> back to 3
//! let (list, head) = canonical_example();
//!
//! assert!(has_cycle(&list, head));
//! let start = find_cycle_floyd(&list, head).unwrap();
//! assert_eq!(list.value(start), Some(&3)); // The cycle starts at node with value 3
//! ```

use std::fmt::Display;

use num_traits::PrimInt;

use crate::cs::cycle::functional::{ensure_len, successor, to_value, ROOT};
use crate::cs::cycle::list::Successors;
use crate::cs::error::Result;

/// Determines if the chain reachable from `start` has a cycle.
pub fn has_cycle<S: Successors>(list: &S, start: S::Node) -> bool {
    meeting_point(list, start).is_some()
}

/// If a cycle is reachable from `start`, returns the node where it begins.
/// If the chain ends instead, returns `None`.
///
/// A node whose successor is itself is returned immediately.
pub fn find_cycle_floyd<S: Successors>(list: &S, start: S::Node) -> Option<S::Node> {
    if list.advance(start) == Some(start) {
        return Some(start);
    }
    let meeting = meeting_point(list, start)?;
    entry_from_meeting(list, start, meeting)
}

/// Returns the distance \( \mu \) from `start` to the cycle entry and the cycle
/// length \( \lambda \), or `None` if no cycle is reachable.
pub fn cycle_shape<S: Successors>(list: &S, start: S::Node) -> Option<(usize, usize)> {
    let meeting = meeting_point(list, start)?;

    let mut lambda = 1;
    let mut probe = list.advance(meeting)?;
    while probe != meeting {
        probe = list.advance(probe)?;
        lambda += 1;
    }

    let mut mu = 0;
    let mut ptr1 = start;
    let mut ptr2 = meeting;
    while ptr1 != ptr2 {
        ptr1 = list.advance(ptr1)?;
        ptr2 = list.advance(ptr2)?;
        mu += 1;
    }
    Some((mu, lambda))
}

/// Phase 1: advances tortoise by one and hare by two until they land on the
/// same node. Returns `None` as soon as either runs off the chain.
fn meeting_point<S: Successors>(list: &S, start: S::Node) -> Option<S::Node> {
    let mut tortoise = list.advance(start)?;
    let mut hare = list.advance_by_two(start)?;
    while tortoise != hare {
        tortoise = list.advance(tortoise)?;
        hare = list.advance_by_two(hare)?;
    }
    Some(hare)
}

/// Phase 2: one pointer from the start, one from the meeting point, both at
/// the tortoise's pace. They first share a node at the cycle entry.
fn entry_from_meeting<S: Successors>(
    list: &S,
    start: S::Node,
    meeting: S::Node,
) -> Option<S::Node> {
    let mut ptr1 = start;
    let mut ptr2 = meeting;
    while ptr1 != ptr2 {
        ptr1 = list.advance(ptr1)?;
        ptr2 = list.advance(ptr2)?;
    }
    Some(ptr1)
}

/// Finds the duplicated value of `array` with the tortoise and hare walking it
/// as a functional graph from index `0`.
///
/// "Advance" is `i = array[i]` and "advance by two" is `i = array[array[i]]`.
/// Every dereference is bounds checked, so a malformed array is reported as an
/// error instead of looping or panicking.
///
/// # Errors
/// `EmptyInput` if `array` has fewer than 2 elements and `MalformedInput` if
/// either pointer reaches a value outside `[1, len - 1]`.
///
/// # Examples
/// ```
/// use cycle_finder::cycle::find_duplicate_floyd;
///
/// assert_eq!(find_duplicate_floyd(&[3u32, 1, 3, 4, 2]).unwrap(), 3);
/// ```
pub fn find_duplicate_floyd<T>(array: &[T]) -> Result<T>
where
    T: PrimInt + Display,
{
    ensure_len(array)?;

    // Phase 1
    let mut tortoise = successor(array, ROOT)?;
    let mut hare = successor(array, tortoise)?;
    while tortoise != hare {
        tortoise = successor(array, tortoise)?;
        hare = successor(array, successor(array, hare)?)?;
    }
    log::debug!("tortoise and hare met at position {hare}");

    // Phase 2
    let mut ptr = ROOT;
    while ptr != tortoise {
        ptr = successor(array, ptr)?;
        tortoise = successor(array, tortoise)?;
    }
    to_value(ptr)
}
