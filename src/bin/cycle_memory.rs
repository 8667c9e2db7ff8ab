//! Reports the heap traffic of each duplicate finder on one large generated
//! problem.

use std::process::ExitCode;

use cycle_finder::cycle::{generate_problem, validate_problem, BenchConfig, Strategy};
use cycle_finder::Result;

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

fn mib(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Bytes allocated while running `strategy` once on `values`.
///
/// The strategies free everything they allocate before returning, so this is
/// also the extra memory they hold at their peak.
fn allocated_by(strategy: Strategy, values: &[u32]) -> Result<(u32, u64)> {
    let before = dhat::HeapStats::get().total_bytes;
    let duplicate = strategy.run(values)?;
    let after = dhat::HeapStats::get().total_bytes;
    Ok((duplicate, after - before))
}

fn run(config: &BenchConfig) -> Result<()> {
    let problem = generate_problem::<u32>(&config.problem)?;
    validate_problem(&problem.values)?;
    println!("problem:\t{:.1} MiB", mib(dhat::HeapStats::get().curr_bytes as u64));

    for strategy in Strategy::ALL {
        let (duplicate, bytes) = allocated_by(strategy, &problem.values)?;
        log::debug!("{strategy} found {duplicate}");
        println!("{strategy}(data):\t{:.1} MiB", mib(bytes));
    }
    println!("peak:\t{:.1} MiB", mib(dhat::HeapStats::get().max_bytes as u64));
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let _profiler = dhat::Profiler::builder().testing().build();
    match run(&BenchConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycle_finder::cycle::{generate_problem_with_rng, ProblemConfig};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    // dhat allows one running profiler per process, so everything is checked
    // from a single test.
    #[test]
    fn test_heap_usage_per_strategy() {
        let _profiler = dhat::Profiler::builder().testing().build();

        let mut rng = ChaCha20Rng::seed_from_u64(17);
        let problem = generate_problem_with_rng::<u32, _>(4_096, 10, &mut rng).unwrap();
        let len = problem.values.len() as u64;

        let (found, sort_bytes) = allocated_by(Strategy::Sort, &problem.values).unwrap();
        assert_eq!(found, problem.duplicate);
        assert!(sort_bytes >= len * 4);

        let (found, set_bytes) = allocated_by(Strategy::Set, &problem.values).unwrap();
        assert_eq!(found, problem.duplicate);
        assert!(set_bytes > 0 && set_bytes < sort_bytes);

        let (found, floyd_bytes) = allocated_by(Strategy::Floyd, &problem.values).unwrap();
        assert_eq!(found, problem.duplicate);
        assert_eq!(floyd_bytes, 0);

        assert!(run(&BenchConfig {
            problem: ProblemConfig {
                n: 1_000,
                max_duplicate_count: 5,
                seed: Some(3),
            },
            repetitions: 1,
        })
        .is_ok());
    }
}
