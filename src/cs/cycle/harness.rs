//! Timing plumbing for the array strategies.
//!
//! Nothing in here is needed to detect a cycle; it exists so the benchmark
//! programs can name, run and time the strategies uniformly.

use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use num_traits::PrimInt;

use crate::cs::cycle::floyd_cycle::find_duplicate_floyd;
use crate::cs::cycle::generator::ProblemConfig;
use crate::cs::cycle::sort_scan::find_duplicate_sort;
use crate::cs::cycle::visited::find_duplicate_set;
use crate::cs::error::{Error, Result};

/// Configuration for a timing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    /// Problem every strategy is run against.
    pub problem: ProblemConfig,
    /// Number of back-to-back runs timed per strategy.
    pub repetitions: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            problem: ProblemConfig::default(),
            repetitions: 10,
        }
    }
}

/// The three array strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Sort,
    Set,
    Floyd,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Sort, Strategy::Set, Strategy::Floyd];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Sort => "find_cycle_sort",
            Strategy::Set => "find_cycle_set",
            Strategy::Floyd => "find_cycle_floyd",
        }
    }

    /// Runs the strategy once on `array`.
    pub fn run<T>(self, array: &[T]) -> Result<T>
    where
        T: PrimInt + Display,
    {
        match self {
            Strategy::Sort => find_duplicate_sort(array),
            Strategy::Set => find_duplicate_set(array),
            Strategy::Floyd => find_duplicate_floyd(array),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of timing one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing<T> {
    pub strategy: Strategy,
    pub duplicate: T,
    /// Wall-clock time summed over all repetitions.
    pub elapsed: Duration,
}

/// Runs `strategy` on `array` `repetitions` times and reports the total time.
///
/// Every run must return the same value; a disagreement means the strategy
/// is not deterministic on this input and is reported as an error.
pub fn time_strategy<T>(strategy: Strategy, array: &[T], repetitions: usize) -> Result<Timing<T>>
where
    T: PrimInt + Display,
{
    if repetitions == 0 {
        return Err(Error::invalid_parameter("repetitions", "must be at least 1"));
    }

    let start = Instant::now();
    let duplicate = strategy.run(array)?;
    for _ in 1..repetitions {
        let again = std::hint::black_box(strategy.run(array)?);
        if again != duplicate {
            return Err(Error::invalid_parameter(
                "array",
                format!("{strategy} returned {again} after returning {duplicate}"),
            ));
        }
    }
    let elapsed = start.elapsed();
    log::debug!("{strategy}: {repetitions} runs in {elapsed:?}");

    Ok(Timing {
        strategy,
        duplicate,
        elapsed,
    })
}
