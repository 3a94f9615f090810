//! Genetic operators for fixed-length real vectors.
//!
//! Provides random creation, uniform crossover, and bounded Gaussian
//! convolution mutation.

use crate::compute::{EvolutionError, SearchRng};
use crate::schema::{ConfigError, VariationConfig, VectorConfig};

use super::{Creator, Modifier};

/// Creates vectors with every gene drawn uniformly from the bounds.
#[derive(Debug, Clone)]
pub struct FloatVectorCreator {
    vector: VectorConfig,
}

impl FloatVectorCreator {
    /// Create a creator for validated vector settings.
    pub fn new(vector: VectorConfig) -> Result<Self, ConfigError> {
        vector.validate()?;
        Ok(Self { vector })
    }
}

impl Creator<Vec<f64>> for FloatVectorCreator {
    fn create(&self, rng: &mut SearchRng) -> Result<Vec<f64>, EvolutionError> {
        Ok((0..self.vector.dimension)
            .map(|_| rng.uniform(self.vector.min, self.vector.max))
            .collect())
    }
}

/// Swap each gene pair between `a` and `b` with the given probability.
pub fn uniform_crossover(
    a: &mut [f64],
    b: &mut [f64],
    probability: f64,
    rng: &mut SearchRng,
) -> Result<(), EvolutionError> {
    if a.len() != b.len() {
        return Err(EvolutionError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    for (x, y) in a.iter_mut().zip(b.iter_mut()) {
        if rng.random_boolean(probability)? {
            std::mem::swap(x, y);
        }
    }
    Ok(())
}

/// Additive Gaussian mutation that keeps every gene inside the bounds.
#[derive(Debug, Clone)]
pub struct GaussianConvolution {
    bounds: VectorConfig,
    probability: f64,
    variance: f64,
}

impl GaussianConvolution {
    /// Create from vector bounds and variation settings.
    pub fn new(bounds: VectorConfig, variation: &VariationConfig) -> Result<Self, ConfigError> {
        bounds.validate()?;
        variation.validate()?;
        Ok(Self {
            bounds,
            probability: variation.mutation_probability,
            variance: variation.mutation_variance,
        })
    }

    /// Mutate a vector in place.
    ///
    /// Each selected gene gets a perturbation redrawn until the result is in
    /// bounds; the redraw count is capped by the RNG's attempt limit.
    pub fn mutate(&self, v: &mut [f64], rng: &mut SearchRng) -> Result<(), EvolutionError> {
        for gene in v.iter_mut() {
            if rng.random_boolean(self.probability)? {
                *gene += self.bounded_noise(*gene, rng)?;
            }
        }
        Ok(())
    }

    fn bounded_noise(&self, gene: f64, rng: &mut SearchRng) -> Result<f64, EvolutionError> {
        let attempts = rng.max_attempts();
        for attempt in 0..attempts {
            let noise = rng.gaussian(0.0, self.variance)?;
            if self.bounds.contains(gene + noise) {
                if attempt > 0 {
                    log::trace!("mutation accepted after {} redraws", attempt);
                }
                return Ok(noise);
            }
        }
        Err(EvolutionError::ResampleExhausted { attempts })
    }
}

/// Crossover followed by independent mutation of both children.
#[derive(Debug, Clone)]
pub struct FloatVectorModifier {
    crossover_probability: f64,
    mutation: GaussianConvolution,
}

impl FloatVectorModifier {
    /// Create from vector bounds and variation settings.
    pub fn new(bounds: VectorConfig, variation: &VariationConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            crossover_probability: variation.crossover_probability,
            mutation: GaussianConvolution::new(bounds, variation)?,
        })
    }
}

impl Modifier<Vec<f64>> for FloatVectorModifier {
    fn reproduce(
        &self,
        a: &Vec<f64>,
        b: &Vec<f64>,
        rng: &mut SearchRng,
    ) -> Result<(Vec<f64>, Vec<f64>), EvolutionError> {
        let mut first = a.clone();
        let mut second = b.clone();

        uniform_crossover(&mut first, &mut second, self.crossover_probability, rng)?;
        self.mutation.mutate(&mut first, rng)?;
        self.mutation.mutate(&mut second, rng)?;

        Ok((first, second))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds() -> VectorConfig {
        VectorConfig {
            dimension: 8,
            min: -5.12,
            max: 5.12,
        }
    }

    fn vector_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
        (1usize..32).prop_flat_map(|n| {
            (
                prop::collection::vec(-5.12f64..=5.12, n),
                prop::collection::vec(-5.12f64..=5.12, n),
            )
        })
    }

    #[test]
    fn test_creator_shape_and_bounds() {
        let creator = FloatVectorCreator::new(bounds()).unwrap();
        let mut rng = SearchRng::new(42);
        for _ in 0..100 {
            let v = creator.create(&mut rng).unwrap();
            assert_eq!(v.len(), 8);
            assert!(v.iter().all(|g| (-5.12..=5.12).contains(g)));
        }
    }

    #[test]
    fn test_creator_rejects_bad_bounds() {
        let config = VectorConfig {
            min: 2.0,
            max: -2.0,
            ..bounds()
        };
        assert!(FloatVectorCreator::new(config).is_err());
    }

    #[test]
    fn test_crossover_extremes() {
        let mut rng = SearchRng::new(1);
        let mut a = vec![1.0, 2.0, 3.0];
        let mut b = vec![4.0, 5.0, 6.0];

        uniform_crossover(&mut a, &mut b, 0.0, &mut rng).unwrap();
        assert_eq!(a, vec![1.0, 2.0, 3.0]);
        assert_eq!(b, vec![4.0, 5.0, 6.0]);

        uniform_crossover(&mut a, &mut b, 1.0, &mut rng).unwrap();
        assert_eq!(a, vec![4.0, 5.0, 6.0]);
        assert_eq!(b, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_crossover_length_mismatch() {
        let mut rng = SearchRng::new(1);
        let mut a = vec![1.0, 2.0];
        let mut b = vec![1.0];
        assert!(matches!(
            uniform_crossover(&mut a, &mut b, 0.5, &mut rng),
            Err(EvolutionError::LengthMismatch { left: 2, right: 1 })
        ));
    }

    #[test]
    fn test_mutation_probability_zero_is_identity() {
        let variation = VariationConfig {
            mutation_probability: 0.0,
            ..Default::default()
        };
        let mutation = GaussianConvolution::new(bounds(), &variation).unwrap();
        let mut rng = SearchRng::new(3);
        let mut v = vec![0.5; 8];
        mutation.mutate(&mut v, &mut rng).unwrap();
        assert_eq!(v, vec![0.5; 8]);
    }

    #[test]
    fn test_mutation_changes_genes() {
        let variation = VariationConfig {
            mutation_probability: 1.0,
            mutation_variance: 0.5,
            ..Default::default()
        };
        let mutation = GaussianConvolution::new(bounds(), &variation).unwrap();
        let mut rng = SearchRng::new(3);
        let mut v = vec![0.0; 8];
        mutation.mutate(&mut v, &mut rng).unwrap();
        assert!(v.iter().all(|g| *g != 0.0));
    }

    #[test]
    fn test_mutation_gives_up_when_bounds_unreachable() {
        let narrow = VectorConfig {
            dimension: 1,
            min: 0.0,
            max: 1e-9,
        };
        let variation = VariationConfig {
            mutation_probability: 1.0,
            mutation_variance: 100.0,
            ..Default::default()
        };
        let mutation = GaussianConvolution::new(narrow, &variation).unwrap();
        let mut rng = SearchRng::new(3).with_max_attempts(50);
        let mut v = vec![0.0];
        assert!(matches!(
            mutation.mutate(&mut v, &mut rng),
            Err(EvolutionError::ResampleExhausted { attempts: 50 })
        ));
    }

    #[test]
    fn test_modifier_rejects_invalid_probability() {
        let variation = VariationConfig {
            crossover_probability: 2.0,
            ..Default::default()
        };
        assert!(FloatVectorModifier::new(bounds(), &variation).is_err());
    }

    proptest! {
        #[test]
        fn prop_crossover_keeps_length_and_alleles(
            (a, b) in vector_pair(),
            probability in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut rng = SearchRng::new(seed);
            let (mut x, mut y) = (a.clone(), b.clone());
            uniform_crossover(&mut x, &mut y, probability, &mut rng).unwrap();

            prop_assert_eq!(x.len(), a.len());
            prop_assert_eq!(y.len(), b.len());
            for i in 0..a.len() {
                prop_assert!(x[i] == a[i] || x[i] == b[i]);
                prop_assert!(y[i] == a[i] || y[i] == b[i]);
                // A swap moves both alleles together.
                prop_assert!((x[i] == a[i] && y[i] == b[i]) || (x[i] == b[i] && y[i] == a[i]));
            }
        }

        #[test]
        fn prop_mutation_stays_in_bounds(
            v in prop::collection::vec(-1.0f64..=1.0, 1..32),
            variance in 0.0f64..4.0,
            probability in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let bounds = VectorConfig { dimension: v.len(), min: -1.0, max: 1.0 };
            let variation = VariationConfig {
                mutation_probability: probability,
                mutation_variance: variance,
                ..Default::default()
            };
            let mutation = GaussianConvolution::new(bounds, &variation).unwrap();
            let mut rng = SearchRng::new(seed);
            let mut mutated = v.clone();
            mutation.mutate(&mut mutated, &mut rng).unwrap();

            prop_assert_eq!(mutated.len(), v.len());
            prop_assert!(mutated.iter().all(|g| (-1.0..=1.0).contains(g)));
        }

        #[test]
        fn prop_modifier_leaves_parents_untouched(
            (a, b) in vector_pair(),
            seed in any::<u64>(),
        ) {
            let variation = VariationConfig {
                crossover_probability: 0.5,
                mutation_probability: 0.5,
                mutation_variance: 0.5,
            };
            let modifier = FloatVectorModifier::new(bounds(), &variation).unwrap();
            let (a_before, b_before) = (a.clone(), b.clone());
            let mut rng = SearchRng::new(seed);

            let (c1, c2) = modifier.reproduce(&a, &b, &mut rng).unwrap();

            prop_assert_eq!(&a, &a_before);
            prop_assert_eq!(&b, &b_before);
            prop_assert_eq!(c1.len(), a.len());
            prop_assert_eq!(c2.len(), b.len());
            prop_assert!(c1.iter().chain(&c2).all(|g| (-5.12..=5.12).contains(g)));
        }
    }
}
