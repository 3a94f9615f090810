//! Evolution configuration and result types for a real-vector search run.

use serde::{Deserialize, Serialize};

use super::{ConfigError, SelectionConfig, VariationConfig, VectorConfig, validate_run_shape};

/// Top-level configuration for a float-vector evolutionary run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Number of generations to run.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Number of individuals per generation. Must be even.
    #[serde(default = "default_population_size")]
    pub population_size: usize,
    /// Parent selection settings.
    #[serde(default)]
    pub selection: SelectionConfig,
    /// Individual shape and bounds.
    #[serde(default)]
    pub vector: VectorConfig,
    /// Crossover and mutation settings.
    #[serde(default)]
    pub variation: VariationConfig,
    /// Objective to maximize.
    #[serde(default)]
    pub objective: Objective,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Attempts allowed for each rejection-sampling loop before giving up.
    #[serde(default = "default_max_resample_attempts")]
    pub max_resample_attempts: usize,
    /// Reject duplicate individuals when seeding the first generation.
    #[serde(default)]
    pub unique_initial_population: bool,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: default_generations(),
            population_size: default_population_size(),
            selection: SelectionConfig::default(),
            vector: VectorConfig::default(),
            variation: VariationConfig::default(),
            objective: Objective::default(),
            random_seed: None,
            max_resample_attempts: default_max_resample_attempts(),
            unique_initial_population: false,
        }
    }
}

fn default_generations() -> usize {
    100
}
fn default_population_size() -> usize {
    200
}
fn default_max_resample_attempts() -> usize {
    10_000
}

impl EvolutionConfig {
    /// Validate evolution configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_run_shape(self.generations, self.population_size)?;
        self.selection.validate()?;
        self.vector.validate()?;
        self.variation.validate()?;
        if self.max_resample_attempts == 0 {
            return Err(ConfigError::InvalidAttemptLimit);
        }
        Ok(())
    }
}

/// Benchmark objective functions. Every objective is maximized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Objective {
    /// Sum of genes.
    #[default]
    Sum,
    /// Floor-discretized sum with plateaus.
    Step,
    /// Negated sphere, peak at the origin.
    Sphere,
    /// Negated Rosenbrock valley.
    Rosenbrock,
    /// Negated Rastrigin.
    Rastrigin,
    /// Negated Schwefel, with genes rescaled by 100.
    Schwefel,
}

// ============================================================================
// Progress and Result Types
// ============================================================================

/// Lifecycle of an evolution engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum EngineState {
    /// No population exists yet.
    #[default]
    Uninitialized,
    /// Processing the given (0-indexed) generation.
    Running { generation: usize },
    /// All generations have run.
    Done,
}

/// Per-generation summary handed to progress callbacks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationProgress {
    /// Current generation number (0-indexed).
    pub generation: usize,
    /// Index of the best individual in this generation.
    pub best_index: usize,
    /// Best fitness in this generation.
    pub generation_best: f64,
    /// Average fitness of this generation.
    pub avg_fitness: f64,
    /// Population size.
    pub population_size: usize,
}

/// Evolution history for plotting.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EvolutionHistory {
    /// Best fitness per generation.
    pub generation_best: Vec<f64>,
    /// Average fitness per generation.
    pub avg_fitness: Vec<f64>,
    /// Best-ever fitness after each generation.
    pub best_ever: Vec<f64>,
}

impl EvolutionHistory {
    /// Number of recorded generations.
    pub fn len(&self) -> usize {
        self.generation_best.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.generation_best.is_empty()
    }

    /// Record one generation.
    pub fn record(&mut self, generation_best: f64, avg_fitness: f64, best_ever: f64) {
        self.generation_best.push(generation_best);
        self.avg_fitness.push(avg_fitness);
        self.best_ever.push(best_ever);
    }
}

/// Final result of an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunResult<I> {
    /// Best individual observed across all generations.
    pub best: I,
    /// Fitness of [`Self::best`].
    pub best_fitness: f64,
    /// Generation in which the best individual was first seen.
    pub best_generation: usize,
    /// Generations executed.
    pub generations: usize,
    /// Fitness evaluations performed.
    pub evaluations: u64,
    /// Full history for analysis.
    pub history: EvolutionHistory,
}

/// Aggregate over a batch of independent runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrialSummary {
    /// Completed runs.
    pub trials: usize,
    /// Mean of the best fitness per run.
    pub mean_best: f64,
    /// Worst best fitness.
    pub min_best: f64,
    /// Best best fitness.
    pub max_best: f64,
    /// Population standard deviation of the best fitness per run.
    pub std_best: f64,
}

impl TrialSummary {
    /// Summarize completed runs. Returns `None` for an empty slice.
    pub fn from_results<I>(results: &[RunResult<I>]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let n = results.len() as f64;
        let mean_best = results.iter().map(|r| r.best_fitness).sum::<f64>() / n;
        let variance = results
            .iter()
            .map(|r| (r.best_fitness - mean_best).powi(2))
            .sum::<f64>()
            / n;
        let min_best = results
            .iter()
            .map(|r| r.best_fitness)
            .fold(f64::INFINITY, f64::min);
        let max_best = results
            .iter()
            .map(|r| r.best_fitness)
            .fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            trials: results.len(),
            mean_best,
            min_best,
            max_best,
            std_best: variance.sqrt(),
        })
    }
}
