//! Independent runs executed in parallel.
//!
//! Each trial is a complete run with its own seed and RNG stream, so results
//! do not depend on thread scheduling. Evaluation inside a run stays
//! sequential.

use rayon::prelude::*;

use crate::compute::EvolutionError;
use crate::schema::{EvolutionConfig, RunResult};

use super::{LogReporter, optimize_with_reporter};

/// Run one complete optimization per seed, in parallel.
///
/// Results are returned in seed order. Per-generation logs go to `debug`.
pub fn run_trials(
    config: &EvolutionConfig,
    seeds: &[u64],
) -> Vec<Result<RunResult<Vec<f64>>, EvolutionError>> {
    seeds
        .par_iter()
        .map(|&seed| {
            let trial = EvolutionConfig {
                random_seed: Some(seed),
                ..config.clone()
            };
            optimize_with_reporter(&trial, LogReporter::with_level(log::Level::Debug))
        })
        .collect()
}
