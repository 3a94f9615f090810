//! Tournament selection.

use crate::compute::{EvolutionError, SearchRng};
use crate::schema::{ConfigError, SelectionConfig};

use super::Selector;

/// Tournament selection with replacement.
///
/// Larger tournaments raise selection pressure: convergence is faster but
/// diversity drops sooner.
#[derive(Debug, Clone, Copy)]
pub struct TournamentSelector {
    size: usize,
}

impl TournamentSelector {
    /// Create a selector. Tournament size must be at least 2.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        SelectionConfig {
            tournament_size: size,
        }
        .validate()?;
        Ok(Self { size })
    }

    /// Create from selection settings.
    pub fn from_config(config: &SelectionConfig) -> Result<Self, ConfigError> {
        Self::new(config.tournament_size)
    }

    /// Tournament size.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Run one tournament and return the winner's index.
    ///
    /// The first contestant is the incumbent; a challenger replaces it only
    /// with strictly greater fitness.
    pub fn select_one(
        &self,
        fitnesses: &[f64],
        rng: &mut SearchRng,
    ) -> Result<usize, EvolutionError> {
        if fitnesses.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }

        let mut best = rng.index(fitnesses.len());
        for _ in 1..self.size {
            let challenger = rng.index(fitnesses.len());
            if fitnesses[challenger] > fitnesses[best] {
                best = challenger;
            }
        }
        Ok(best)
    }
}

impl<I: Clone> Selector<I> for TournamentSelector {
    fn select(
        &self,
        count: usize,
        population: &[I],
        fitnesses: &[f64],
        rng: &mut SearchRng,
    ) -> Result<Vec<I>, EvolutionError> {
        if population.len() != fitnesses.len() {
            return Err(EvolutionError::FitnessCountMismatch {
                population: population.len(),
                fitnesses: fitnesses.len(),
            });
        }

        (0..count)
            .map(|_| {
                self.select_one(fitnesses, rng)
                    .map(|idx| population[idx].clone())
            })
            .collect()
    }
}
