//! Random primitives for evolutionary search.
//!
//! All stochastic operators draw from a single [`SearchRng`] stream, so a run
//! seeded with the same value replays exactly.

use rand::prelude::*;

use super::EvolutionError;

/// Default attempt limit for rejection-sampling loops.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Seedable random number generator shared by the operators.
#[derive(Debug, Clone)]
pub struct SearchRng {
    rng: StdRng,
    max_attempts: usize,
}

impl SearchRng {
    /// Create from seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create with random seed.
    pub fn random() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create from an optional seed, falling back to entropy.
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::random(),
        }
    }

    /// Override the attempt limit for rejection loops. Zero is treated as one.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Attempt limit for rejection loops.
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Uniform draw in `[0, 1)`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Uniform draw in `[min, max]`.
    #[inline]
    pub fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max)
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Return `true` with probability `p`.
    pub fn random_boolean(&mut self, p: f64) -> Result<bool, EvolutionError> {
        if !(0.0..=1.0).contains(&p) {
            return Err(EvolutionError::InvalidProbability(p));
        }
        Ok(self.unit() < p)
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }

    /// Sample from `Normal(mean, variance)` with the Marsaglia polar method.
    ///
    /// Each attempt draws a point in the square `(-1, 1)^2` and keeps it only
    /// if it falls strictly inside the unit circle (and off the origin). The
    /// acceptance rate is pi/4, so the attempt limit is practically never hit.
    pub fn gaussian(&mut self, mean: f64, variance: f64) -> Result<f64, EvolutionError> {
        if !variance.is_finite() || variance < 0.0 {
            return Err(EvolutionError::InvalidVariance(variance));
        }

        for _ in 0..self.max_attempts {
            let x = self.rng.gen_range(-1.0..1.0);
            let y = self.rng.gen_range(-1.0..1.0);
            let w: f64 = x * x + y * y;
            if w > 0.0 && w < 1.0 {
                return Ok(mean + x * variance.sqrt() * (-2.0 * w.ln() / w).sqrt());
            }
        }

        Err(EvolutionError::ResampleExhausted {
            attempts: self.max_attempts,
        })
    }
}
