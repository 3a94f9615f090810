//! Generational evolution engine.

use crate::compute::{EvolutionError, SearchRng, generate};
use crate::schema::{
    EngineState, EvolutionConfig, EvolutionHistory, RunResult, validate_run_shape,
};

use super::{
    Creator, Evaluator, FloatVectorCreator, FloatVectorModifier, LogReporter, Modifier, Reporter,
    Selector, Setup, TournamentSelector, generation_best,
};

/// The best individual seen so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<I> {
    /// The individual.
    pub individual: I,
    /// Fitness score.
    pub fitness: f64,
    /// Generation it was evaluated in.
    pub generation: usize,
}

/// Setup hook that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSetup;

impl Setup for NoSetup {
    fn setup(&mut self) -> Result<(), EvolutionError> {
        Ok(())
    }
}

/// The six strategy roles driving a run.
#[derive(Debug, Clone)]
pub struct Strategies<S, C, Sel, M, E, R> {
    pub setup: S,
    pub creator: C,
    pub selector: Sel,
    pub modifier: M,
    pub evaluator: E,
    pub reporter: R,
}

/// Evolution engine that runs the search.
pub struct EvolutionEngine<I, S, C, Sel, M, E, R> {
    generations: usize,
    population_size: usize,
    unique_initial_population: bool,
    strategies: Strategies<S, C, Sel, M, E, R>,
    rng: SearchRng,
    population: Vec<I>,
    best: Option<Candidate<I>>,
    history: EvolutionHistory,
    evaluations: u64,
    state: EngineState,
}

impl<I, S, C, Sel, M, E, R> EvolutionEngine<I, S, C, Sel, M, E, R>
where
    I: Clone + PartialEq,
    S: Setup,
    C: Creator<I>,
    Sel: Selector<I>,
    M: Modifier<I>,
    E: Evaluator<I>,
    R: Reporter<I>,
{
    /// Create a new evolution engine.
    ///
    /// Fails if `population_size` is zero or odd, or `generations` is zero.
    pub fn new(
        generations: usize,
        population_size: usize,
        strategies: Strategies<S, C, Sel, M, E, R>,
        rng: SearchRng,
    ) -> Result<Self, EvolutionError> {
        validate_run_shape(generations, population_size)?;

        Ok(Self {
            generations,
            population_size,
            unique_initial_population: false,
            strategies,
            rng,
            population: Vec::new(),
            best: None,
            history: EvolutionHistory::default(),
            evaluations: 0,
            state: EngineState::Uninitialized,
        })
    }

    /// Reject duplicates when creating the initial population.
    pub fn with_unique_initial_population(mut self, unique: bool) -> Self {
        self.unique_initial_population = unique;
        self
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Current population.
    pub fn population(&self) -> &[I] {
        &self.population
    }

    /// Best individual seen so far.
    pub fn best(&self) -> Option<&Candidate<I>> {
        self.best.as_ref()
    }

    /// Per-generation history so far.
    pub fn history(&self) -> &EvolutionHistory {
        &self.history
    }

    /// Initialize the population.
    pub fn initialize(&mut self) -> Result<(), EvolutionError> {
        self.best = None;
        self.history = EvolutionHistory::default();
        self.evaluations = 0;

        let max_attempts = self.rng.max_attempts();
        let creator = &self.strategies.creator;
        let rng = &mut self.rng;
        self.population = generate(
            self.population_size,
            || creator.create(rng),
            self.unique_initial_population,
            max_attempts,
        )?;

        self.state = EngineState::Running { generation: 0 };
        Ok(())
    }

    /// Evaluate all candidates in the population.
    fn evaluate_population(&self) -> Result<Vec<f64>, EvolutionError> {
        self.population
            .iter()
            .map(|individual| self.strategies.evaluator.evaluate(individual))
            .collect()
    }

    /// Run a single generation step.
    fn step_generation(&mut self, generation: usize) -> Result<(), EvolutionError> {
        self.state = EngineState::Running { generation };

        let fitnesses = self.evaluate_population()?;
        self.evaluations += fitnesses.len() as u64;

        let fitnesses = self
            .strategies
            .reporter
            .report(generation, &self.population, fitnesses)?;
        if fitnesses.len() != self.population.len() {
            return Err(EvolutionError::FitnessCountMismatch {
                population: self.population.len(),
                fitnesses: fitnesses.len(),
            });
        }

        self.update_best(generation, &fitnesses);

        let gen_best = generation_best(&fitnesses).map_or(f64::NEG_INFINITY, |(_, f)| f);
        let avg_fitness = fitnesses.iter().sum::<f64>() / fitnesses.len() as f64;
        let best_ever = self.best.as_ref().map_or(f64::NEG_INFINITY, |b| b.fitness);
        self.history.record(gen_best, avg_fitness, best_ever);

        log::debug!(
            "generation {}: best = {:.6} avg = {:.6} best ever = {:.6}",
            generation,
            gen_best,
            avg_fitness,
            best_ever
        );

        self.population = self.breed(&fitnesses)?;
        Ok(())
    }

    /// Track the best-ever individual, reusing this generation's fitnesses.
    fn update_best(&mut self, generation: usize, fitnesses: &[f64]) {
        for (individual, &fitness) in self.population.iter().zip(fitnesses) {
            let improved = match &self.best {
                None => true,
                Some(best) => fitness > best.fitness,
            };
            if improved {
                self.best = Some(Candidate {
                    individual: individual.clone(),
                    fitness,
                    generation,
                });
            }
        }
    }

    /// Build the next population from selected parents.
    fn breed(&mut self, fitnesses: &[f64]) -> Result<Vec<I>, EvolutionError> {
        let mut next_gen = Vec::with_capacity(self.population_size);

        for _ in 0..self.population_size / 2 {
            let parent1 = self.select_parent(fitnesses)?;
            let parent2 = self.select_parent(fitnesses)?;

            let (child1, child2) = self
                .strategies
                .modifier
                .reproduce(&parent1, &parent2, &mut self.rng)?;
            next_gen.push(child1);
            next_gen.push(child2);
        }

        Ok(next_gen)
    }

    fn select_parent(&mut self, fitnesses: &[f64]) -> Result<I, EvolutionError> {
        self.strategies
            .selector
            .select(1, &self.population, fitnesses, &mut self.rng)?
            .into_iter()
            .next()
            .ok_or(EvolutionError::SelectionFailed)
    }

    /// Run evolution (blocking).
    pub fn run(&mut self) -> Result<RunResult<I>, EvolutionError> {
        log::info!(
            "starting evolution: {} generations x {} individuals",
            self.generations,
            self.population_size
        );

        self.strategies.setup.setup()?;
        self.initialize()?;

        for generation in 0..self.generations {
            self.step_generation(generation)?;
        }

        self.state = EngineState::Done;

        let best = self.best.clone().ok_or(EvolutionError::EmptyPopulation)?;
        log::info!(
            "evolution done: best fitness {:.6} (generation {}) after {} evaluations",
            best.fitness,
            best.generation,
            self.evaluations
        );

        Ok(RunResult {
            best: best.individual,
            best_fitness: best.fitness,
            best_generation: best.generation,
            generations: self.generations,
            evaluations: self.evaluations,
            history: self.history.clone(),
        })
    }
}

/// Run a complete search with the given strategies.
pub fn run<I, S, C, Sel, M, E, R>(
    generations: usize,
    population_size: usize,
    strategies: Strategies<S, C, Sel, M, E, R>,
    rng: SearchRng,
) -> Result<RunResult<I>, EvolutionError>
where
    I: Clone + PartialEq,
    S: Setup,
    C: Creator<I>,
    Sel: Selector<I>,
    M: Modifier<I>,
    E: Evaluator<I>,
    R: Reporter<I>,
{
    EvolutionEngine::new(generations, population_size, strategies, rng)?.run()
}

/// Optimize a real-vector objective with the default strategies.
pub fn optimize(config: &EvolutionConfig) -> Result<RunResult<Vec<f64>>, EvolutionError> {
    optimize_with_reporter(config, LogReporter::new())
}

/// Optimize a real-vector objective, reporting through `reporter`.
pub fn optimize_with_reporter<R>(
    config: &EvolutionConfig,
    reporter: R,
) -> Result<RunResult<Vec<f64>>, EvolutionError>
where
    R: Reporter<Vec<f64>>,
{
    config.validate()?;

    let strategies = Strategies {
        setup: NoSetup,
        creator: FloatVectorCreator::new(config.vector)?,
        selector: TournamentSelector::from_config(&config.selection)?,
        modifier: FloatVectorModifier::new(config.vector, &config.variation)?,
        evaluator: config.objective,
        reporter,
    };
    let rng = SearchRng::from_seed_option(config.random_seed)
        .with_max_attempts(config.max_resample_attempts);

    EvolutionEngine::new(config.generations, config.population_size, strategies, rng)?
        .with_unique_initial_population(config.unique_initial_population)
        .run()
}
