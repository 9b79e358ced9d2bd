//! The generational evolutionary loop.
//!
//! [`GeneticAlgorithm`] owns the population and steps it one generation at
//! a time: tournament parents produce block-crossover children, the top
//! slice of the combined pool survives verbatim, the rest of the survivors
//! are tournament-selected and probabilistically mutated. The caller drives
//! the loop and enforces the generation budget; the engine itself performs
//! no I/O and reads no clock.

use super::config::GaConfig;
use super::error::FatalError;
use super::selection::tournament_pair;
use crate::board::{cmp_fitness_desc, Genome};
use crate::random::create_rng;
use rand::rngs::StdRng;
use rand::Rng;

/// A genetic algorithm searching for a valid Sudoku board.
///
/// # Usage
///
/// ```
/// use sudoku_evo::ga::{GaConfig, GeneticAlgorithm};
///
/// let config = GaConfig::default().with_population_size(100).with_seed(42);
/// let mut engine = GeneticAlgorithm::new(2, config);
///
/// let mut generations = 0;
/// while !engine.is_solved() && generations < 1000 {
///     engine.step_generation().expect("engine invariant broken");
///     generations += 1;
/// }
/// println!("{}", engine.best_genome());
/// ```
pub struct GeneticAlgorithm {
    base: usize,
    config: GaConfig,
    population: Vec<Genome>,
    best_fitness: f64,
    mutation_rate: u8,
    solved: bool,
    rng: StdRng,
}

impl GeneticAlgorithm {
    /// Creates an engine with a freshly seeded random population, sorted by
    /// descending fitness.
    ///
    /// # Panics
    /// Panics if `base` is zero or the configuration is invalid (call
    /// [`GaConfig::validate`] first to get a descriptive error).
    pub fn new(base: usize, config: GaConfig) -> Self {
        assert!(base >= 1, "block edge length must be at least 1");
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let mut population: Vec<Genome> = (0..config.population_size)
            .map(|_| Genome::random(base, &mut rng))
            .collect();
        population.sort_by(cmp_fitness_desc);

        let best_fitness = population[0].fitness();
        let mutation_rate = config.mutation_rate;

        Self {
            base,
            config,
            population,
            best_fitness,
            mutation_rate,
            solved: best_fitness == 1.0,
            rng,
        }
    }

    /// Runs one generation: recombination, elitism, survivor selection,
    /// mutation, and re-evaluation.
    ///
    /// Returns `Err` when a post-generation invariant check fails. Such an
    /// error signals a defect in the engine itself; the run is invalid and
    /// must be aborted, not retried.
    pub fn step_generation(&mut self) -> Result<(), FatalError> {
        let pop_size = self.config.population_size;
        let tournament_size = self.config.tournament_size;
        let previous_best = self.best_fitness;

        // Recombination: grow a working pool of the current population plus
        // at least pop_size/2 children of tournament-winning pairs. Each
        // pair is crossed in both orientations at one random block point.
        let mut pool = self.population.clone();
        while pool.len() < pop_size + pop_size / 2 {
            let (first, second) =
                tournament_pair(&self.population, tournament_size, &mut self.rng);
            let cross_col = self.rng.random_range(0..self.base);
            let cross_row = self.rng.random_range(0..self.base);

            let a = &self.population[first];
            let b = &self.population[second];
            pool.push(Genome::child(a, b, cross_col, cross_row));
            pool.push(Genome::child(b, a, cross_col, cross_row));
        }

        // Elitism: clone the top 1% (at least one genome) of the pool. The
        // clones bypass mutation entirely, which is what makes best fitness
        // monotone across generations.
        let elite_count = (pop_size / 100).max(1);
        assert!(!pool.is_empty(), "cannot extract elites from an empty pool");
        pool.sort_by(cmp_fitness_desc);
        let elites: Vec<Genome> = pool[..elite_count].to_vec();

        // Survivor selection: tournaments over the full pool, elites
        // included, until the survivor count is exact.
        let survivor_target = pop_size - elite_count;
        let mut survivors: Vec<Genome> = Vec::with_capacity(pop_size);
        while survivors.len() < survivor_target {
            let (first, second) = tournament_pair(&pool, tournament_size, &mut self.rng);
            survivors.push(pool[first].clone());
            if survivors.len() < survivor_target {
                survivors.push(pool[second].clone());
            }
        }

        // Mutation: each survivor independently, gated on the live rate.
        for genome in &mut survivors {
            if self.rng.random_range(0..100) < u32::from(self.mutation_rate) {
                genome.mutate(&mut self.rng);
            }
        }

        // Reunite survivors with the untouched elite clones.
        survivors.extend(elites);
        survivors.sort_by(cmp_fitness_desc);
        self.population = survivors;
        self.best_fitness = self.population[0].fitness();

        if self.best_fitness < previous_best {
            return Err(FatalError::FitnessRegression {
                previous: previous_best,
                current: self.best_fitness,
            });
        }
        if self.population.len() != pop_size {
            return Err(FatalError::PopulationSize {
                expected: pop_size,
                actual: self.population.len(),
            });
        }
        if self.best_fitness > 1.0 {
            return Err(FatalError::FitnessAboveOne(self.best_fitness));
        }

        if self.best_fitness == 1.0 {
            self.solved = true;
        }
        Ok(())
    }

    /// Whether the best genome is a valid Sudoku board.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// The fittest genome of the current generation.
    pub fn best_genome(&self) -> &Genome {
        &self.population[0]
    }

    /// The best fitness of the current generation.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// The current population, sorted by descending fitness.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// The live mutation rate as an integer percentage.
    pub fn mutation_rate(&self) -> u8 {
        self.mutation_rate
    }

    /// Raises the mutation rate by one point, capped at 100%.
    ///
    /// The engine never adapts the rate on its own; the driver calls this
    /// when best fitness has stagnated for long enough.
    pub fn increment_mutation_rate(&mut self) {
        if self.mutation_rate < 100 {
            self.mutation_rate += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config(seed: u64) -> GaConfig {
        GaConfig::default()
            .with_population_size(60)
            .with_mutation_rate(80)
            .with_seed(seed)
    }

    #[test]
    fn test_initial_population_is_sorted() {
        let engine = GeneticAlgorithm::new(2, small_config(42));

        assert_eq!(engine.population().len(), 60);
        for pair in engine.population().windows(2) {
            assert!(pair[0].fitness() >= pair[1].fitness());
        }
        assert_eq!(engine.best_fitness(), engine.population()[0].fitness());
    }

    #[test]
    fn test_step_preserves_population_size() {
        let mut engine = GeneticAlgorithm::new(2, small_config(7));
        for _ in 0..10 {
            engine.step_generation().expect("step failed");
            assert_eq!(engine.population().len(), 60);
        }
    }

    #[test]
    fn test_best_fitness_is_monotone() {
        let mut engine = GeneticAlgorithm::new(3, small_config(11));
        let mut previous = engine.best_fitness();
        for _ in 0..30 {
            engine.step_generation().expect("step failed");
            assert!(
                engine.best_fitness() >= previous,
                "fitness regressed from {previous} to {}",
                engine.best_fitness()
            );
            previous = engine.best_fitness();
        }
    }

    #[test]
    fn test_solves_a_4x4_board() {
        let config = GaConfig::default()
            .with_population_size(150)
            .with_seed(42);
        let mut engine = GeneticAlgorithm::new(2, config);

        let mut generations = 0;
        while !engine.is_solved() && generations < 2000 {
            engine.step_generation().expect("step failed");
            generations += 1;
        }

        assert!(engine.is_solved(), "no solution after {generations} generations");
        assert_eq!(engine.best_fitness(), 1.0);
    }

    #[test]
    fn test_1x1_board_is_solved_at_construction() {
        let config = GaConfig::default().with_population_size(10).with_seed(1);
        let engine = GeneticAlgorithm::new(1, config);
        assert!(engine.is_solved());
        assert_eq!(engine.best_fitness(), 1.0);
    }

    #[test]
    fn test_mutation_rate_increments_and_caps() {
        let config = small_config(3).with_mutation_rate(98);
        let mut engine = GeneticAlgorithm::new(2, config);

        assert_eq!(engine.mutation_rate(), 98);
        engine.increment_mutation_rate();
        engine.increment_mutation_rate();
        assert_eq!(engine.mutation_rate(), 100);
        engine.increment_mutation_rate();
        assert_eq!(engine.mutation_rate(), 100);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let mut first = GeneticAlgorithm::new(2, small_config(99));
        let mut second = GeneticAlgorithm::new(2, small_config(99));

        for _ in 0..5 {
            first.step_generation().expect("step failed");
            second.step_generation().expect("step failed");
            assert_eq!(first.best_fitness(), second.best_fitness());
        }
    }

    #[test]
    #[should_panic(expected = "invalid GaConfig")]
    fn test_invalid_config_panics() {
        let config = GaConfig::default().with_population_size(2);
        GeneticAlgorithm::new(2, config);
    }

    #[test]
    #[should_panic(expected = "block edge length must be at least 1")]
    fn test_zero_base_panics() {
        GeneticAlgorithm::new(0, small_config(0));
    }
}
