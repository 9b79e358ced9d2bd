//! Genetic algorithm engine.
//!
//! The engine evolves a fixed-size population of candidate boards one
//! generation at a time until a zero-error board appears. Each generation
//! runs selection → recombination → elitism → mutation → re-evaluation;
//! see [`GeneticAlgorithm::step_generation`] for the exact ordering.
//!
//! # Key Types
//!
//! - [`GaConfig`]: loop parameters (population size, tournament size,
//!   initial mutation rate, seed)
//! - [`GeneticAlgorithm`]: the stateful engine
//! - [`FatalError`]: post-generation invariant violations; bug signals,
//!   never retried
//!
//! The generation budget lives with the caller: the engine exposes a single
//! step and termination is the driver's decision.

mod config;
mod engine;
mod error;
mod selection;

pub use config::GaConfig;
pub use engine::GeneticAlgorithm;
pub use error::FatalError;
pub use selection::tournament_pair;
