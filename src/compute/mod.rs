//! Compute module - Stochastic primitives, objectives and the evolution engine.

mod error;
mod objective;
mod population;
mod random;

pub mod evolution;

pub use error::*;
pub use objective::*;
pub use population::*;
pub use random::*;
