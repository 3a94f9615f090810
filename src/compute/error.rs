//! Error type shared by the operators and the evolution engine.

use crate::schema::ConfigError;

/// Boxed failure raised by a user-supplied strategy.
pub type StrategyError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised while running an evolutionary search.
#[derive(Debug, thiserror::Error)]
pub enum EvolutionError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Vectors must have equal length (got {left} and {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("Rejection sampling gave up after {attempts} attempts")]
    ResampleExhausted { attempts: usize },
    #[error("Could not draw {wanted} distinct items within {attempts} attempts")]
    DuplicateExhausted { wanted: usize, attempts: usize },
    #[error("Probability must be within [0, 1] (got {0})")]
    InvalidProbability(f64),
    #[error("Variance must be finite and non-negative (got {0})")]
    InvalidVariance(f64),
    #[error("Cannot select from an empty population")]
    EmptyPopulation,
    #[error("Population has {population} individuals but {fitnesses} fitness values")]
    FitnessCountMismatch { population: usize, fitnesses: usize },
    #[error("Selector returned no individuals")]
    SelectionFailed,
    #[error("Strategy failed: {0}")]
    Strategy(#[from] StrategyError),
}
