use std::fmt;

/// Errors raised when a simulation configuration is rejected.
///
/// Rejection happens up front, before any random draws; a running
/// simulation never fails once its configuration has been accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A rate parameter was negative
    NegativeRate { field: &'static str, value: f64 },
    /// A probability parameter fell outside [0, 1]
    ProbabilityOutOfRange { field: &'static str, value: f64 },
    /// More initial infected than people in the population
    InitialInfectedExceedsPopulation {
        initial_infected: u64,
        population_size: u64,
    },
    /// Zero-step simulations produce no records
    ZeroSteps,
    /// At least one stochastic trial is required for averaging
    ZeroTrials,
    /// A sweep axis contained no candidate values
    EmptySweepAxis { axis: &'static str },
    /// A serial-interval distribution could not be formed
    InvalidSerialInterval {
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// A sampling distribution could not be constructed from the
    /// configured parameters
    InvalidDistributionParameters {
        distribution: &'static str,
        reason: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NegativeRate { field, value } => {
                write!(f, "{field} must be non-negative, got {value}")
            }
            ConfigError::ProbabilityOutOfRange { field, value } => {
                write!(f, "{field} must be within [0, 1], got {value}")
            }
            ConfigError::InitialInfectedExceedsPopulation {
                initial_infected,
                population_size,
            } => {
                write!(
                    f,
                    "initial_infected ({initial_infected}) exceeds population_size ({population_size})"
                )
            }
            ConfigError::ZeroSteps => write!(f, "step_count must be at least 1"),
            ConfigError::ZeroTrials => write!(f, "trial_count must be at least 1"),
            ConfigError::EmptySweepAxis { axis } => {
                write!(f, "sweep axis {axis} has no candidate values")
            }
            ConfigError::InvalidSerialInterval {
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid serial interval (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            ConfigError::InvalidDistributionParameters {
                distribution,
                reason,
            } => {
                write!(f, "invalid {distribution} parameters: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

pub type Result<T> = std::result::Result<T, ConfigError>;
