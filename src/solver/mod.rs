//! Trial driver: bounded runs, statistics, and reporting.
//!
//! Everything the engine deliberately excludes lives here: wall-clock
//! timing, repeated independent trials with aggregate statistics, the
//! stagnation policy that raises the mutation rate, and the CSV report.
//!
//! # Key Types
//!
//! - [`TrialsConfig`]: batch parameters (board size, runs, budget,
//!   stagnation window, parallelism)
//! - [`TrialsReport`]: aggregate statistics plus per-trial outcomes
//! - [`write_csv`]: `epoch,avg best fitness` report emission

mod report;
mod runner;

pub use report::write_csv;
pub use runner::{run_trials, TrialOutcome, TrialsConfig, TrialsReport};
