//! Fatal engine errors.
//!
//! These are bug detectors, not expected outcomes: with a correct engine
//! none of them can occur (elitism makes best fitness monotone, the
//! survivor arithmetic keeps the population size exact, and normalization
//! bounds fitness at 1.0). A run that reports one is invalid and must be
//! aborted, never retried.

use std::fmt;

/// An engine invariant violation detected at the end of a generation.
#[derive(Debug, Clone, PartialEq)]
pub enum FatalError {
    /// Best fitness decreased across a generation.
    FitnessRegression {
        /// Best fitness before the generation.
        previous: f64,
        /// Best fitness after the generation.
        current: f64,
    },

    /// The population no longer has the configured size.
    PopulationSize {
        /// Configured population size.
        expected: usize,
        /// Observed population size.
        actual: usize,
    },

    /// A fitness value above the normalized maximum of 1.0.
    FitnessAboveOne(f64),
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::FitnessRegression { previous, current } => write!(
                f,
                "best fitness regressed from {previous} to {current}"
            ),
            FatalError::PopulationSize { expected, actual } => write!(
                f,
                "population size {actual} should equal {expected}"
            ),
            FatalError::FitnessAboveOne(fitness) => {
                write!(f, "best fitness {fitness} cannot be greater than 1.0")
            }
        }
    }
}

impl std::error::Error for FatalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = FatalError::FitnessRegression {
            previous: 0.9,
            current: 0.8,
        };
        assert_eq!(err.to_string(), "best fitness regressed from 0.9 to 0.8");

        let err = FatalError::PopulationSize {
            expected: 100,
            actual: 99,
        };
        assert_eq!(err.to_string(), "population size 99 should equal 100");

        let err = FatalError::FitnessAboveOne(1.5);
        assert_eq!(
            err.to_string(),
            "best fitness 1.5 cannot be greater than 1.0"
        );
    }
}
