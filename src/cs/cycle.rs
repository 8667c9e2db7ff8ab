//! Cycle detection over linked chains and duplicate detection over arrays.
//!
//! Both problems are the same problem: find where a chain of single successor
//! links first loops back on itself. The linked form walks [`LinkedArena`]
//! nodes; the array form reads each value as the index of the next element.
//!
//! | Strategy | Linked | Array | Time | Space |
//! |---|---|---|---|---|
//! | visited set | [`find_cycle_set`] | [`find_duplicate_set`] | \( O(n) \) | \( O(n) \) |
//! | Floyd | [`find_cycle_floyd`] | [`find_duplicate_floyd`] | \( O(n) \) | \( O(1) \) |
//! | sort and scan | | [`find_duplicate_sort`] | \( O(n \log n) \) | \( O(n) \) |

pub mod floyd_cycle;
pub mod functional;
pub mod generator;
pub mod harness;
pub mod list;
pub mod sort_scan;
pub mod visited;


pub use crate::cs::error::Result;

pub use floyd_cycle::{cycle_shape, find_cycle_floyd, find_duplicate_floyd, has_cycle};
pub use functional::successor;
pub use generator::{
    generate_problem, generate_problem_with_rng, validate_problem, Problem, ProblemConfig,
};
pub use harness::{time_strategy, BenchConfig, Strategy, Timing};
pub use list::{canonical_example, LinkedArena, Node, NodeId, Successors};
pub use sort_scan::find_duplicate_sort;
pub use visited::{find_cycle_set, find_duplicate_set};
