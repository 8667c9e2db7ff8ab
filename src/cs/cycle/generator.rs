//! Random duplicate-finding problems.
//!
//! A problem of size `n` is an array of `n + 1` values in `[1, n]` with one
//! designated duplicate. The duplicate may be planted at extra positions
//! (decoys), overwriting filler values, before the whole array is shuffled.

use std::fmt::Display;

use num_traits::PrimInt;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::cycle::functional::ensure_len;
use crate::cs::error::{Error, Result};

/// Parameters for [`generate_problem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemConfig {
    /// Largest value in the array; the array holds `n + 1` elements.
    pub n: usize,
    /// Upper bound (inclusive) on the number of extra positions overwritten
    /// with the duplicate.
    pub max_duplicate_count: usize,
    /// Seed for a reproducible problem. `None` uses the thread-local RNG.
    pub seed: Option<u64>,
}

impl Default for ProblemConfig {
    fn default() -> Self {
        Self {
            n: 10_000_000,
            max_duplicate_count: 1_000,
            seed: None,
        }
    }
}

/// A generated array together with the value it duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem<T> {
    pub values: Vec<T>,
    pub duplicate: T,
}

/// Generates a problem described by `config`.
///
/// # Errors
/// `InvalidParameter` if `n` is zero or does not fit in `T`.
pub fn generate_problem<T: PrimInt>(config: &ProblemConfig) -> Result<Problem<T>> {
    match config.seed {
        Some(seed) => {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            generate_problem_with_rng(config.n, config.max_duplicate_count, &mut rng)
        }
        None => generate_problem_with_rng(
            config.n,
            config.max_duplicate_count,
            &mut rand::thread_rng(),
        ),
    }
}

/// Generates a problem of size `n` drawing all randomness from `rng`.
pub fn generate_problem_with_rng<T, R>(
    n: usize,
    max_duplicate_count: usize,
    rng: &mut R,
) -> Result<Problem<T>>
where
    T: PrimInt,
    R: Rng + ?Sized,
{
    if n == 0 {
        return Err(Error::invalid_parameter("n", "must be at least 1"));
    }
    let len = n
        .checked_add(1)
        .ok_or_else(|| Error::invalid_parameter("n", "array length overflows usize"))?;
    if T::from(n).is_none() {
        return Err(Error::invalid_parameter(
            "n",
            format!("{n} does not fit the element type"),
        ));
    }

    let duplicate_position = rng.gen_range(1..=n);
    let duplicate = to_element::<T>(duplicate_position)?;

    let mut values = Vec::with_capacity(len);
    for v in 1..=n {
        values.push(to_element::<T>(v)?);
    }
    values.push(duplicate);

    let decoys = rng.gen_range(0..=max_duplicate_count).min(len);
    for slot in values.iter_mut().take(decoys) {
        *slot = duplicate;
    }

    values.shuffle(rng);
    log::debug!("generated problem n={n} with {decoys} decoy slots");

    Ok(Problem { values, duplicate })
}

/// Checks that `array` is a well-formed problem: at least 2 elements, every
/// value in `[1, len - 1]`. Such an array always holds a duplicate.
pub fn validate_problem<T>(array: &[T]) -> Result<()>
where
    T: PrimInt + Display,
{
    ensure_len(array)?;
    let len = array.len();
    for (index, &value) in array.iter().enumerate() {
        match value.to_usize() {
            Some(v) if v >= 1 && v < len => {}
            _ => return Err(Error::malformed(index, value, len)),
        }
    }
    Ok(())
}

fn to_element<T: PrimInt>(v: usize) -> Result<T> {
    T::from(v).ok_or_else(|| {
        Error::invalid_parameter("n", format!("{v} does not fit the element type"))
    })
}
