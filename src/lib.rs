//! Evosearch - Generic evolutionary search for real-valued vectors.
//!
//! This crate provides a generational evolutionary engine that maximizes a
//! scalar objective over a fixed-dimension box, together with the operators
//! needed to run it on real vectors.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration and result types (serde-serializable)
//! - `compute`: Random primitives, objective functions, genetic operators
//!   and the evolution engine
//!
//! # Example
//!
//! ```rust,no_run
//! use evosearch::{EvolutionConfig, Objective, optimize};
//!
//! let config = EvolutionConfig {
//!     objective: Objective::Rastrigin,
//!     generations: 100,
//!     random_seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let result = optimize(&config).unwrap();
//! println!("Best fitness: {:.6} at {:?}", result.best_fitness, result.best);
//! ```

pub mod compute;
pub mod schema;

// Re-export commonly used types
pub use compute::evolution::{EvolutionEngine, Strategies, optimize, run, run_trials};
pub use compute::{EvolutionError, SearchRng};
pub use schema::{EvolutionConfig, Objective, RunResult};
