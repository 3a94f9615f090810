//! Benchmark objective functions.
//!
//! Every function maps a real vector to a scalar where higher is better.
//! Classical minimization benchmarks are negated.

use std::f64::consts::PI;

use crate::schema::Objective;

/// Sum of genes.
pub fn sum(x: &[f64]) -> f64 {
    x.iter().sum()
}

/// Step function: `6n + sum(floor(x_i))`.
pub fn step(x: &[f64]) -> f64 {
    6.0 * x.len() as f64 + x.iter().map(|v| v.floor()).sum::<f64>()
}

/// Negated sphere: `-sum(x_i^2)`.
pub fn sphere(x: &[f64]) -> f64 {
    -x.iter().map(|v| v * v).sum::<f64>()
}

/// Negated Rosenbrock.
pub fn rosenbrock(x: &[f64]) -> f64 {
    -x.windows(2)
        .map(|w| (1.0 - w[0]).powi(2) + 100.0 * (w[1] - w[0] * w[0]).powi(2))
        .sum::<f64>()
}

/// Negated Rastrigin.
pub fn rastrigin(x: &[f64]) -> f64 {
    -(10.0 * x.len() as f64
        + x.iter()
            .map(|v| v * v - 10.0 * (2.0 * PI * v).cos())
            .sum::<f64>())
}

/// Negated Schwefel with genes scaled by 100.
///
/// The scaling maps the usual `[-5.12, 5.12]` domain onto Schwefel's
/// classical `[-512, 512]`.
pub fn schwefel(x: &[f64]) -> f64 {
    x.iter()
        .map(|v| {
            let y = 100.0 * v;
            y * y.abs().sqrt().sin()
        })
        .sum()
}

impl Objective {
    /// All available objectives.
    pub const ALL: [Objective; 6] = [
        Objective::Sum,
        Objective::Step,
        Objective::Sphere,
        Objective::Rosenbrock,
        Objective::Rastrigin,
        Objective::Schwefel,
    ];

    /// Evaluate the objective on a vector.
    pub fn evaluate(&self, x: &[f64]) -> f64 {
        match self {
            Objective::Sum => sum(x),
            Objective::Step => step(x),
            Objective::Sphere => sphere(x),
            Objective::Rosenbrock => rosenbrock(x),
            Objective::Rastrigin => rastrigin(x),
            Objective::Schwefel => schwefel(x),
        }
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Objective::Sum => "sum",
            Objective::Step => "step",
            Objective::Sphere => "sphere",
            Objective::Rosenbrock => "rosenbrock",
            Objective::Rastrigin => "rastrigin",
            Objective::Schwefel => "schwefel",
        }
    }
}
