//! Per-generation reporting hooks.

use std::fmt::Debug;

use crate::compute::EvolutionError;
use crate::schema::GenerationProgress;

use super::Reporter;

/// Index and fitness of the best entry, ties going to the first seen.
///
/// Returns `None` for an empty slice.
pub fn generation_best(fitnesses: &[f64]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &fitness) in fitnesses.iter().enumerate() {
        match best {
            Some((_, current)) if fitness <= current => {}
            _ => best = Some((idx, fitness)),
        }
    }
    best
}

fn progress(generation: usize, fitnesses: &[f64]) -> Option<GenerationProgress> {
    let (best_index, generation_best) = generation_best(fitnesses)?;
    Some(GenerationProgress {
        generation,
        best_index,
        generation_best,
        avg_fitness: fitnesses.iter().sum::<f64>() / fitnesses.len() as f64,
        population_size: fitnesses.len(),
    })
}

/// Logs the best individual of each generation.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: log::Level,
}

impl LogReporter {
    /// Log at `info` level.
    pub fn new() -> Self {
        Self {
            level: log::Level::Info,
        }
    }

    /// Log at the given level.
    pub fn with_level(level: log::Level) -> Self {
        Self { level }
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Debug> Reporter<I> for LogReporter {
    fn report(
        &mut self,
        generation: usize,
        population: &[I],
        fitnesses: Vec<f64>,
    ) -> Result<Vec<f64>, EvolutionError> {
        if population.len() != fitnesses.len() {
            return Err(EvolutionError::FitnessCountMismatch {
                population: population.len(),
                fitnesses: fitnesses.len(),
            });
        }
        if let Some(p) = progress(generation, &fitnesses) {
            log::log!(
                self.level,
                "generation {}: best = {:.6} avg = {:.6} individual = {:?}",
                p.generation,
                p.generation_best,
                p.avg_fitness,
                population[p.best_index]
            );
        }
        Ok(fitnesses)
    }
}

/// Calls a closure with a [`GenerationProgress`] every generation.
pub struct ProgressReporter<F> {
    callback: F,
}

impl<F> ProgressReporter<F>
where
    F: FnMut(&GenerationProgress),
{
    /// Wrap a progress callback.
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<I, F> Reporter<I> for ProgressReporter<F>
where
    F: FnMut(&GenerationProgress),
{
    fn report(
        &mut self,
        generation: usize,
        _population: &[I],
        fitnesses: Vec<f64>,
    ) -> Result<Vec<f64>, EvolutionError> {
        if let Some(p) = progress(generation, &fitnesses) {
            (self.callback)(&p);
        }
        Ok(fitnesses)
    }
}
