//! Trial orchestration.
//!
//! A trial is one bounded engine run: step until solved or the generation
//! budget is exhausted. Exhaustion is a normal outcome and the best
//! candidate found is still reported. Trials are fully independent, so a
//! batch can fan out across threads; all timing lives here, never in the
//! engine.

use super::report;
use crate::board::Genome;
use crate::ga::{FatalError, GaConfig, GeneticAlgorithm};
use rayon::prelude::*;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

/// Configuration for a batch of independent trials.
#[derive(Debug, Clone)]
pub struct TrialsConfig {
    /// Block edge length N; the board is N²×N².
    pub base: usize,

    /// Number of independent trials.
    pub runs: usize,

    /// Generation budget per trial.
    pub max_generations: usize,

    /// Generations without a best-fitness improvement before the mutation
    /// rate is raised one point.
    ///
    /// Set to 0 to disable rate adaptation.
    pub stagnation_window: usize,

    /// Whether to run trials on all cores via rayon.
    ///
    /// Trials share nothing but the read-only configuration, so parallel
    /// execution does not change any single trial's outcome.
    pub parallel: bool,

    /// Engine parameters shared by every trial.
    ///
    /// When a seed is set, each run offsets it by its index so trials stay
    /// reproducible yet independent.
    pub engine: GaConfig,
}

impl Default for TrialsConfig {
    fn default() -> Self {
        Self {
            base: 3,
            runs: 30,
            max_generations: 5000,
            stagnation_window: 100,
            parallel: false,
            engine: GaConfig::default(),
        }
    }
}

impl TrialsConfig {
    /// Sets the block edge length.
    pub fn with_base(mut self, base: usize) -> Self {
        self.base = base;
        self
    }

    /// Sets the number of trials.
    pub fn with_runs(mut self, runs: usize) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the generation budget per trial.
    pub fn with_max_generations(mut self, budget: usize) -> Self {
        self.max_generations = budget;
        self
    }

    /// Sets the stagnation window (0 to disable rate adaptation).
    pub fn with_stagnation_window(mut self, window: usize) -> Self {
        self.stagnation_window = window;
        self
    }

    /// Enables or disables parallel trial execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the engine parameters.
    pub fn with_engine(mut self, engine: GaConfig) -> Self {
        self.engine = engine;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.runs == 0 {
            return Err("runs must be at least 1".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        self.engine.validate()
    }
}

/// The outcome of a single trial.
#[derive(Debug, Clone)]
pub struct TrialOutcome {
    /// Whether a zero-error board was found within the budget.
    pub solved: bool,

    /// Generations stepped.
    pub generations: usize,

    /// Wall time for the whole trial, initialization included.
    pub elapsed: Duration,

    /// Best fitness at the end of the trial.
    pub best_fitness: f64,

    /// Mutation rate when the trial ended, after any stagnation bumps.
    pub final_mutation_rate: u8,
}

/// Aggregate results of a batch of trials.
#[derive(Debug, Clone)]
pub struct TrialsReport {
    /// Per-trial outcomes, in run order.
    pub trials: Vec<TrialOutcome>,

    /// How many trials solved their board.
    pub solved_runs: usize,

    /// Average best fitness per epoch across all trials.
    ///
    /// One entry per budgeted generation; trials that solve early
    /// contribute 1.0 for their remaining epochs. This is the series the
    /// CSV report emits.
    pub avg_best_fitness: Vec<f64>,

    /// Fewest generations stepped by any trial.
    pub min_generations: usize,

    /// Most generations stepped by any trial.
    pub max_generations: usize,

    /// Mean generations stepped.
    pub mean_generations: f64,

    /// Shortest trial wall time.
    pub min_elapsed: Duration,

    /// Longest trial wall time.
    pub max_elapsed: Duration,

    /// Mean trial wall time.
    pub mean_elapsed: Duration,

    /// The fittest genome found across all trials.
    pub best: Genome,
}

impl TrialsReport {
    /// Writes the per-epoch average best fitness to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        report::write_csv(path, &self.avg_best_fitness)
    }
}

/// Runs a batch of independent trials and aggregates their statistics.
///
/// Returns `Err` if any trial's engine detects an invariant violation; one
/// poisoned run invalidates the whole batch.
///
/// # Panics
/// Panics if the configuration is invalid (call [`TrialsConfig::validate`]
/// first to get a descriptive error).
pub fn run_trials(config: &TrialsConfig) -> Result<TrialsReport, FatalError> {
    config.validate().expect("invalid TrialsConfig");

    let results: Vec<(TrialOutcome, Vec<f64>, Genome)> = if config.parallel {
        (0..config.runs)
            .into_par_iter()
            .map(|run| run_trial(config, run))
            .collect::<Result<_, _>>()?
    } else {
        (0..config.runs)
            .map(|run| run_trial(config, run))
            .collect::<Result<_, _>>()?
    };

    let runs = results.len();
    let mut avg_best_fitness = vec![0.0; config.max_generations];
    for (_, history, _) in &results {
        for (epoch, best) in history.iter().enumerate() {
            avg_best_fitness[epoch] += best;
        }
    }
    for avg in &mut avg_best_fitness {
        *avg /= runs as f64;
    }

    let best = results
        .iter()
        .map(|(_, _, genome)| genome)
        .max_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("at least one trial ran")
        .clone();

    let trials: Vec<TrialOutcome> = results.into_iter().map(|(outcome, _, _)| outcome).collect();

    let total_elapsed: Duration = trials.iter().map(|t| t.elapsed).sum();
    let report = TrialsReport {
        solved_runs: trials.iter().filter(|t| t.solved).count(),
        avg_best_fitness,
        min_generations: trials.iter().map(|t| t.generations).min().expect("runs >= 1"),
        max_generations: trials.iter().map(|t| t.generations).max().expect("runs >= 1"),
        mean_generations: trials.iter().map(|t| t.generations).sum::<usize>() as f64
            / runs as f64,
        min_elapsed: trials.iter().map(|t| t.elapsed).min().expect("runs >= 1"),
        max_elapsed: trials.iter().map(|t| t.elapsed).max().expect("runs >= 1"),
        mean_elapsed: total_elapsed / runs as u32,
        best,
        trials,
    };
    Ok(report)
}

/// Runs one bounded trial.
fn run_trial(
    config: &TrialsConfig,
    run: usize,
) -> Result<(TrialOutcome, Vec<f64>, Genome), FatalError> {
    let engine_config = match config.engine.seed {
        Some(seed) => config.engine.clone().with_seed(seed.wrapping_add(run as u64)),
        None => config.engine.clone(),
    };

    let started = Instant::now();
    let mut engine = GeneticAlgorithm::new(config.base, engine_config);

    let mut history = Vec::with_capacity(config.max_generations);
    let mut generations = 0;
    let mut stagnation = 0;
    let mut last_best = engine.best_fitness();

    while generations < config.max_generations && !engine.is_solved() {
        engine.step_generation()?;
        generations += 1;
        history.push(engine.best_fitness());

        if config.stagnation_window > 0 {
            if engine.best_fitness() > last_best {
                last_best = engine.best_fitness();
                stagnation = 0;
            } else {
                stagnation += 1;
                if stagnation >= config.stagnation_window {
                    engine.increment_mutation_rate();
                    stagnation = 0;
                }
            }
        }
    }

    // Solved trials count as 1.0 for their remaining epochs so the
    // cross-trial average stays comparable at every index.
    history.resize(config.max_generations, 1.0);

    let outcome = TrialOutcome {
        solved: engine.is_solved(),
        generations,
        elapsed: started.elapsed(),
        best_fitness: engine.best_fitness(),
        final_mutation_rate: engine.mutation_rate(),
    };
    Ok((outcome, history, engine.best_genome().clone()))
}
