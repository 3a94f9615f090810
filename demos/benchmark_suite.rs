//! Runs every benchmark objective once and reports the best solution found.

use evosearch::{EvolutionConfig, Objective, optimize};
use std::time::Instant;

fn main() {
    env_logger::init();

    println!("=== Benchmark Suite ===\n");

    for objective in Objective::ALL {
        let config = EvolutionConfig {
            objective,
            generations: 200,
            population_size: 200,
            random_seed: Some(42),
            ..Default::default()
        };

        let start = Instant::now();
        let result = match optimize(&config) {
            Ok(result) => result,
            Err(e) => {
                println!("{:<12} failed: {}", objective.name(), e);
                continue;
            }
        };
        let elapsed = start.elapsed();

        println!("{}", objective.name());
        println!("  Best fitness:   {:.6}", result.best_fitness);
        println!("  Generation:     {}", result.best_generation);
        println!("  Evaluations:    {}", result.evaluations);
        println!("  Elapsed:        {:.2}s", elapsed.as_secs_f64());
        println!("  Best:           {:.4?}", result.best);
        println!();
    }
}
