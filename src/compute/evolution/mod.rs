//! Evolutionary search module.
//!
//! The engine is generic over six strategy roles, each a trait with a single
//! method:
//!
//! - [`Setup`]: one-off hook before the first population exists
//! - [`Creator`]: builds a fresh individual
//! - [`Selector`]: draws parents from an evaluated population
//! - [`Modifier`]: turns two parents into two children
//! - [`Evaluator`]: scores an individual (higher is better)
//! - [`Reporter`]: observes each evaluated generation
//!
//! The float-vector instantiation lives in [`FloatVectorCreator`],
//! [`FloatVectorModifier`], [`TournamentSelector`] and
//! [`Objective`](crate::schema::Objective).
//!
//! # Example
//!
//! ```rust,no_run
//! use evosearch::compute::evolution::optimize;
//! use evosearch::schema::{EvolutionConfig, Objective};
//!
//! let config = EvolutionConfig {
//!     objective: Objective::Sphere,
//!     generations: 50,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let result = optimize(&config).unwrap();
//! println!("best fitness = {:.4}", result.best_fitness);
//! ```

mod experiment;
mod float_vector;
mod reporter;
mod search;
mod selection;

pub use experiment::run_trials;
pub use float_vector::{
    FloatVectorCreator, FloatVectorModifier, GaussianConvolution, uniform_crossover,
};
pub use reporter::{LogReporter, ProgressReporter, generation_best};
pub use search::{
    Candidate, EvolutionEngine, NoSetup, Strategies, optimize, optimize_with_reporter, run,
};
pub use selection::TournamentSelector;

use super::{EvolutionError, SearchRng};
use crate::schema::Objective;

/// One-off hook run before the initial population is created.
pub trait Setup {
    fn setup(&mut self) -> Result<(), EvolutionError>;
}

impl<F> Setup for F
where
    F: FnMut() -> Result<(), EvolutionError>,
{
    fn setup(&mut self) -> Result<(), EvolutionError> {
        self()
    }
}

/// Produces new individuals for the initial population.
pub trait Creator<I> {
    fn create(&self, rng: &mut SearchRng) -> Result<I, EvolutionError>;
}

/// Chooses parents from an evaluated population.
///
/// Returned individuals are owned copies; the population is never handed out
/// by reference to later stages.
pub trait Selector<I> {
    fn select(
        &self,
        count: usize,
        population: &[I],
        fitnesses: &[f64],
        rng: &mut SearchRng,
    ) -> Result<Vec<I>, EvolutionError>;
}

/// Produces two children from two parents without altering the parents.
pub trait Modifier<I> {
    fn reproduce(&self, a: &I, b: &I, rng: &mut SearchRng) -> Result<(I, I), EvolutionError>;
}

/// Scores an individual. Higher is better.
pub trait Evaluator<I> {
    fn evaluate(&self, individual: &I) -> Result<f64, EvolutionError>;
}

impl<I, F> Evaluator<I> for F
where
    F: Fn(&I) -> f64,
{
    fn evaluate(&self, individual: &I) -> Result<f64, EvolutionError> {
        Ok(self(individual))
    }
}

impl Evaluator<Vec<f64>> for Objective {
    fn evaluate(&self, individual: &Vec<f64>) -> Result<f64, EvolutionError> {
        Ok(Objective::evaluate(self, individual))
    }
}

/// Observes an evaluated generation.
///
/// Returns the fitness vector it was given so reporters can be chained.
pub trait Reporter<I> {
    fn report(
        &mut self,
        generation: usize,
        population: &[I],
        fitnesses: Vec<f64>,
    ) -> Result<Vec<f64>, EvolutionError>;
}

impl<I, A, B> Reporter<I> for (A, B)
where
    A: Reporter<I>,
    B: Reporter<I>,
{
    fn report(
        &mut self,
        generation: usize,
        population: &[I],
        fitnesses: Vec<f64>,
    ) -> Result<Vec<f64>, EvolutionError> {
        let fitnesses = self.0.report(generation, population, fitnesses)?;
        self.1.report(generation, population, fitnesses)
    }
}
