//! Configuration types for the float-vector operators and selection.

use serde::{Deserialize, Serialize};

/// Shape and box bounds of a real-valued individual.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorConfig {
    /// Number of genes per individual.
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    /// Lower bound for every gene (inclusive).
    #[serde(default = "default_min")]
    pub min: f64,
    /// Upper bound for every gene (inclusive).
    #[serde(default = "default_max")]
    pub max: f64,
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self {
            dimension: default_dimension(),
            min: default_min(),
            max: default_max(),
        }
    }
}

fn default_dimension() -> usize {
    5
}
fn default_min() -> f64 {
    -5.12
}
fn default_max() -> f64 {
    5.12
}

impl VectorConfig {
    /// Width of the legal interval.
    #[inline]
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether a gene value is within bounds.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Validate dimension and bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 {
            return Err(ConfigError::InvalidDimension);
        }
        // The width must be finite too, or uniform sampling overflows.
        if !self.min.is_finite() || !self.range().is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidBounds {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Recombination and mutation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VariationConfig {
    /// Per-gene probability of swapping between the two children.
    #[serde(default = "default_crossover_probability")]
    pub crossover_probability: f64,
    /// Per-gene probability of a Gaussian perturbation.
    #[serde(default = "default_mutation_probability")]
    pub mutation_probability: f64,
    /// Variance of the additive Gaussian perturbation.
    #[serde(default = "default_mutation_variance")]
    pub mutation_variance: f64,
}

impl Default for VariationConfig {
    fn default() -> Self {
        Self {
            crossover_probability: default_crossover_probability(),
            mutation_probability: default_mutation_probability(),
            mutation_variance: default_mutation_variance(),
        }
    }
}

fn default_crossover_probability() -> f64 {
    0.7
}
fn default_mutation_probability() -> f64 {
    0.15
}
fn default_mutation_variance() -> f64 {
    0.05
}

impl VariationConfig {
    /// Validate probabilities and variance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability(self.crossover_probability, "crossover_probability")?;
        check_probability(self.mutation_probability, "mutation_probability")?;
        if !self.mutation_variance.is_finite() || self.mutation_variance < 0.0 {
            return Err(ConfigError::InvalidVariance(self.mutation_variance));
        }
        Ok(())
    }
}

/// Parent selection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Number of contestants per tournament.
    #[serde(default = "default_tournament_size")]
    pub tournament_size: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            tournament_size: default_tournament_size(),
        }
    }
}

fn default_tournament_size() -> usize {
    4
}

impl SelectionConfig {
    /// Validate tournament size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tournament_size < 2 {
            return Err(ConfigError::InvalidTournamentSize(self.tournament_size));
        }
        Ok(())
    }
}

fn check_probability(value: f64, name: &'static str) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Population size must be positive")]
    EmptyPopulation,
    #[error("Population size must be even (got {0})")]
    OddPopulation(usize),
    #[error("Generation count must be positive")]
    NoGenerations,
    #[error("Tournament size must be at least 2 (got {0})")]
    InvalidTournamentSize(usize),
    #[error("{name} must be within [0, 1] (got {value})")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Mutation variance must be finite and non-negative (got {0})")]
    InvalidVariance(f64),
    #[error("Vector dimension must be non-zero")]
    InvalidDimension,
    #[error("Gene bounds must be finite with min < max (got [{min}, {max}])")]
    InvalidBounds { min: f64, max: f64 },
    #[error("Resample attempt limit must be non-zero")]
    InvalidAttemptLimit,
}

/// Validate population size and generation count for an engine run.
pub fn validate_run_shape(generations: usize, population_size: usize) -> Result<(), ConfigError> {
    if population_size == 0 {
        return Err(ConfigError::EmptyPopulation);
    }
    if population_size % 2 != 0 {
        return Err(ConfigError::OddPopulation(population_size));
    }
    if generations == 0 {
        return Err(ConfigError::NoGenerations);
    }
    Ok(())
}
