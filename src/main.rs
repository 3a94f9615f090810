//! Evosearch CLI - Run evolutionary searches from JSON configuration.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use evosearch::{
    EvolutionConfig, optimize, run_trials,
    schema::{RunResult, TrialSummary},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example_config();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json> [--trials N] [--json]", args[0]);
        eprintln!();
        eprintln!("Run an evolutionary search from JSON configuration.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to evolution configuration file");
        eprintln!("  --trials N   Run N independent trials in parallel (seeds 0..N)");
        eprintln!("  --json       Print the result as JSON");
        eprintln!();
        eprintln!("An example configuration is printed with --example.");
        std::process::exit(1);
    }

    let config_path = PathBuf::from(&args[1]);
    let json_output = args.iter().any(|a| a == "--json");
    let trials = parse_trials(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    // Load configuration
    let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
        eprintln!("Error reading config file: {}", e);
        std::process::exit(1);
    });

    let config: EvolutionConfig = serde_json::from_str(&config_str).unwrap_or_else(|e| {
        eprintln!("Error parsing config: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    if !json_output {
        println!("Evolutionary Search");
        println!("===================");
        println!(
            "Objective: {} ({} dimensions in [{}, {}])",
            config.objective.name(),
            config.vector.dimension,
            config.vector.min,
            config.vector.max
        );
        println!(
            "Population: {} x {} generations",
            config.population_size, config.generations
        );
        println!("Tournament size: {}", config.selection.tournament_size);
        println!(
            "Crossover p: {}  Mutation p: {}  Mutation variance: {}",
            config.variation.crossover_probability,
            config.variation.mutation_probability,
            config.variation.mutation_variance
        );
        println!();
    }

    let start = Instant::now();

    match trials {
        Some(n) => run_batch(&config, n, json_output),
        None => run_single(&config, json_output),
    }

    if !json_output {
        println!();
        println!("Time: {:.2}s", start.elapsed().as_secs_f32());
    }
}

/// Read the value following `--trials`, if the flag is present.
fn parse_trials(args: &[String]) -> Result<Option<u64>, String> {
    let Some(i) = args.iter().position(|a| a == "--trials") else {
        return Ok(None);
    };
    let value = args
        .get(i + 1)
        .ok_or_else(|| "--trials requires a trial count".to_string())?;
    value
        .parse()
        .map(Some)
        .map_err(|e| format!("Invalid trial count '{}': {}", value, e))
}

fn run_single(config: &EvolutionConfig, json_output: bool) {
    let result = optimize(config).unwrap_or_else(|e| {
        eprintln!("Evolution failed: {}", e);
        std::process::exit(1);
    });

    if json_output {
        print_json(&result);
        return;
    }

    print_result(&result);
}

fn run_batch(config: &EvolutionConfig, trials: u64, json_output: bool) {
    let seeds: Vec<u64> = (0..trials).collect();
    let results: Vec<RunResult<Vec<f64>>> = run_trials(config, &seeds)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| {
            eprintln!("Evolution failed: {}", e);
            std::process::exit(1);
        });

    let Some(summary) = TrialSummary::from_results(&results) else {
        eprintln!("No trials requested");
        std::process::exit(1);
    };

    if json_output {
        print_json(&summary);
        return;
    }

    for (seed, result) in seeds.iter().zip(&results) {
        println!(
            "  Seed {:4}: best = {:.6} (generation {})",
            seed, result.best_fitness, result.best_generation
        );
    }
    println!();
    println!("Trials: {}", summary.trials);
    println!("  Mean best: {:.6} (std {:.6})", summary.mean_best, summary.std_best);
    println!("  Range:     [{:.6}, {:.6}]", summary.min_best, summary.max_best);
}

fn print_result(result: &RunResult<Vec<f64>>) {
    let history = &result.history;
    let every = (history.len() / 10).max(1);
    for (i, (best, avg)) in history
        .generation_best
        .iter()
        .zip(&history.avg_fitness)
        .enumerate()
    {
        if (i + 1) % every == 0 {
            println!("  Generation {:4}: best = {:.6} avg = {:.6}", i, best, avg);
        }
    }

    println!();
    println!("Best fitness: {:.6}", result.best_fitness);
    println!("Found in generation: {}", result.best_generation);
    println!("Evaluations: {}", result.evaluations);
    println!("Best individual: {:?}", result.best);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_example_config() {
    let config = EvolutionConfig {
        random_seed: Some(42),
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    print_json(&config);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_trials() {
        assert_eq!(parse_trials(&args(&["evosearch", "c.json"])), Ok(None));
        assert_eq!(
            parse_trials(&args(&["evosearch", "c.json", "--trials", "8"])),
            Ok(Some(8))
        );
        assert!(parse_trials(&args(&["evosearch", "c.json", "--trials", "x"])).is_err());
    }

    #[test]
    fn test_trials_flag_without_count() {
        let result = parse_trials(&args(&["evosearch", "c.json", "--trials"]));
        assert_eq!(result, Err("--trials requires a trial count".to_string()));
    }
}
