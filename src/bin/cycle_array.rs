//! Times the three duplicate finders on one large generated problem.

use std::process::ExitCode;

use cycle_finder::cycle::{
    generate_problem, time_strategy, validate_problem, BenchConfig, Strategy, Timing,
};
use cycle_finder::Result;

fn run(config: &BenchConfig) -> Result<Vec<Timing<u32>>> {
    log::info!(
        "generating problem n={} max_duplicate_count={}",
        config.problem.n,
        config.problem.max_duplicate_count
    );
    let problem = generate_problem::<u32>(&config.problem)?;
    validate_problem(&problem.values)?;

    let mut timings = Vec::with_capacity(Strategy::ALL.len());
    for strategy in Strategy::ALL {
        let timing = time_strategy(strategy, &problem.values, config.repetitions)?;
        if timing.duplicate != problem.duplicate {
            log::warn!(
                "{strategy} returned {} but the planted duplicate is {}",
                timing.duplicate,
                problem.duplicate
            );
        }
        println!("{strategy}(data):\t{}s", timing.elapsed.as_secs_f64());
        timings.push(timing);
    }
    Ok(timings)
}

fn main() -> ExitCode {
    env_logger::init();
    match run(&BenchConfig::default()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cycle_finder::cycle::ProblemConfig;
    use cycle_finder::Error;

    fn small(n: usize) -> BenchConfig {
        BenchConfig {
            problem: ProblemConfig {
                n,
                max_duplicate_count: 10,
                seed: Some(5),
            },
            repetitions: 2,
        }
    }

    #[test]
    fn test_run_times_every_strategy() {
        let timings = run(&small(1_000)).unwrap();
        let names: Vec<_> = timings.iter().map(|t| t.strategy).collect();
        assert_eq!(names, Strategy::ALL);
        assert!(timings.windows(2).all(|w| w[0].duplicate == w[1].duplicate));
    }

    #[test]
    fn test_run_rejects_invalid_problem() {
        assert!(matches!(
            run(&small(0)),
            Err(Error::InvalidParameter { name: "n", .. })
        ));
    }
}
