//! Selection pressure study on Rastrigin.
//!
//! Runs batches of independent trials for several tournament sizes and
//! prints how the best fitness responds.

use evosearch::{
    EvolutionConfig, Objective, run_trials,
    schema::{RunResult, SelectionConfig, TrialSummary},
};
use std::time::Instant;

fn main() {
    env_logger::init();

    println!("=== Selection Pressure (Rastrigin, 5 dimensions) ===\n");

    let seeds: Vec<u64> = (0..16).collect();

    for generations in [10, 50] {
        println!("Generations: {}", generations);

        for tournament_size in [2, 3, 4, 8, 16] {
            let config = EvolutionConfig {
                generations,
                population_size: 200,
                selection: SelectionConfig { tournament_size },
                objective: Objective::Rastrigin,
                ..Default::default()
            };

            let start = Instant::now();
            let results: Vec<RunResult<Vec<f64>>> = run_trials(&config, &seeds)
                .into_iter()
                .filter_map(Result::ok)
                .collect();
            let elapsed = start.elapsed();

            let Some(summary) = TrialSummary::from_results(&results) else {
                println!("  Tournament {:2}: all trials failed", tournament_size);
                continue;
            };

            println!(
                "  Tournament {:2}: mean {:9.4}  std {:7.4}  range [{:9.4}, {:9.4}]  ({:.2}s)",
                tournament_size,
                summary.mean_best,
                summary.std_best,
                summary.min_best,
                summary.max_best,
                elapsed.as_secs_f64()
            );
        }
        println!();
    }
}
