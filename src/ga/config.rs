//! Engine configuration.
//!
//! [`GaConfig`] holds the parameters of the generational loop. The
//! generation budget is deliberately absent: bounding a run is the caller's
//! job (see the solver module), the engine itself just steps.

/// Configuration for the genetic algorithm engine.
///
/// # Defaults
///
/// ```
/// use sudoku_evo::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10_000);
/// assert_eq!(config.tournament_size, 5);
/// assert_eq!(config.mutation_rate, 80);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use sudoku_evo::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(500)
///     .with_mutation_rate(60)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GaConfig {
    /// Number of genomes in the population, constant across generations.
    pub population_size: usize,

    /// Number of distinct genomes sampled per tournament.
    pub tournament_size: usize,

    /// Initial mutation probability as an integer percentage (0–100).
    ///
    /// The engine's live rate starts here and can be raised one point at a
    /// time via `increment_mutation_rate`.
    pub mutation_rate: u8,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10_000,
            tournament_size: 5,
            mutation_rate: 80,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    /// Sets the initial mutation rate, clamped to 100%.
    pub fn with_mutation_rate(mut self, rate: u8) -> Self {
        self.mutation_rate = rate.min(100);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tournament_size < 2 {
            return Err("tournament_size must be at least 2".into());
        }
        if self.population_size < self.tournament_size {
            return Err(format!(
                "population_size {} is smaller than tournament_size {}",
                self.population_size, self.tournament_size
            ));
        }
        if self.mutation_rate > 100 {
            return Err("mutation_rate must be in 0..=100".into());
        }
        Ok(())
    }
}
