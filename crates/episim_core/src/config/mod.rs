//! Simulation configuration
//!
//! The main configuration type is `SimulationConfig`, which contains
//! everything needed to run one stochastic outbreak at a single grid point.
//! The two intervention levers (`exposure_rate`, `infection_probability`)
//! have `with_*` variant helpers so the sweep can derive per-point configs
//! from a shared base.
//!
//! # Builder DSL
//!
//! For a more ergonomic way to set up a scenario, use the builder:
//!
//! ```ignore
//! use episim_core::config::ScenarioBuilder;
//!
//! let config = ScenarioBuilder::new()
//!     .population(1_000)
//!     .initial_infected(3)
//!     .exposure_rate(10.0)
//!     .infection_probability(0.05)
//!     .recovery_rate(0.05)
//!     .steps(100)
//!     .trials(10)
//!     .build()?;
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

pub mod builder;

pub use builder::ScenarioBuilder;

fn default_step_count() -> usize {
    100
}

fn default_trial_count() -> usize {
    10
}

/// Per-compartment departure (exit) rates, applied each time step.
///
/// Departures model out-migration and background mortality. Each rate is
/// the per-person probability of leaving the population in one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartureRates {
    #[serde(default)]
    pub susceptible: f64,
    #[serde(default)]
    pub infected: f64,
    #[serde(default)]
    pub recovered: f64,
}

impl DepartureRates {
    /// Uniform departure rate across all compartments
    #[must_use]
    pub fn uniform(rate: f64) -> Self {
        Self {
            susceptible: rate,
            infected: rate,
            recovered: rate,
        }
    }
}

/// Complete configuration for one stochastic outbreak simulation.
///
/// Constructed per grid point by the parameter sweep, consumed once by the
/// engine, then discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    // === Intervention levers (swept) ===
    /// Contacts per susceptible person per time step
    pub exposure_rate: f64,
    /// Probability of transmission per contact with an infected person
    pub infection_probability: f64,

    // === Population ===
    /// People in the population at step 0
    pub population_size: u64,
    /// Index cases seeded at step 0
    pub initial_infected: u64,

    // === Disease course ===
    /// Per-step probability that an infected person recovers
    pub recovery_rate: f64,

    // === Demography ===
    /// Per-capita arrival rate per step; arrivals enter susceptible
    #[serde(default)]
    pub arrival_rate: f64,
    /// Per-compartment departure rates per step
    #[serde(default)]
    pub departure_rates: DepartureRates,

    // === Simulation control ===
    /// Discrete time steps to simulate
    #[serde(default = "default_step_count")]
    pub step_count: usize,
    /// Independent stochastic trials averaged into one result
    #[serde(default = "default_trial_count")]
    pub trial_count: usize,
    /// Base seed; trial seeds are derived from it deterministically
    #[serde(default)]
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            exposure_rate: 0.0,
            infection_probability: 0.0,
            population_size: 0,
            initial_infected: 0,
            recovery_rate: 0.0,
            arrival_rate: 0.0,
            departure_rates: DepartureRates::default(),
            step_count: default_step_count(),
            trial_count: default_trial_count(),
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Check every invariant the engine relies on.
    ///
    /// All rates must be non-negative, probabilities within [0, 1], the
    /// initial infected must fit in the population, and at least one step
    /// and one trial are required.
    pub fn validate(&self) -> Result<()> {
        if self.exposure_rate < 0.0 || !self.exposure_rate.is_finite() {
            return Err(ConfigError::NegativeRate {
                field: "exposure_rate",
                value: self.exposure_rate,
            });
        }
        if self.arrival_rate < 0.0 || !self.arrival_rate.is_finite() {
            return Err(ConfigError::NegativeRate {
                field: "arrival_rate",
                value: self.arrival_rate,
            });
        }
        for (field, value) in [
            ("infection_probability", self.infection_probability),
            ("recovery_rate", self.recovery_rate),
            ("departure_rates.susceptible", self.departure_rates.susceptible),
            ("departure_rates.infected", self.departure_rates.infected),
            ("departure_rates.recovered", self.departure_rates.recovered),
        ] {
            if !(0.0..=1.0).contains(&value) || !value.is_finite() {
                return Err(ConfigError::ProbabilityOutOfRange { field, value });
            }
        }
        if self.initial_infected > self.population_size {
            return Err(ConfigError::InitialInfectedExceedsPopulation {
                initial_infected: self.initial_infected,
                population_size: self.population_size,
            });
        }
        if self.step_count == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.trial_count == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }

    // === Sweep helpers ===

    /// Create a variant with a different exposure rate
    #[must_use]
    pub fn with_exposure_rate(&self, exposure_rate: f64) -> Self {
        let mut config = self.clone();
        config.exposure_rate = exposure_rate;
        config
    }

    /// Create a variant with a different per-contact infection probability
    #[must_use]
    pub fn with_infection_probability(&self, infection_probability: f64) -> Self {
        let mut config = self.clone();
        config.infection_probability = infection_probability;
        config
    }

    /// Create a variant with a different trial count
    #[must_use]
    pub fn with_trial_count(&self, trial_count: usize) -> Self {
        let mut config = self.clone();
        config.trial_count = trial_count;
        config
    }
}

fn default_si_mean() -> f64 {
    7.5
}

fn default_si_std_dev() -> f64 {
    3.4
}

/// Serial-interval distribution parameters for reproduction-number
/// estimation.
///
/// A modeling assumption supplied by the scenario, not a constant baked
/// into the estimator. Defaults follow the early-outbreak literature
/// values of mean 7.5 and standard deviation 3.4 days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SerialInterval {
    #[serde(default = "default_si_mean")]
    pub mean: f64,
    #[serde(default = "default_si_std_dev")]
    pub std_dev: f64,
}

impl Default for SerialInterval {
    fn default() -> Self {
        Self {
            mean: default_si_mean(),
            std_dev: default_si_std_dev(),
        }
    }
}

impl SerialInterval {
    pub fn validate(&self) -> Result<()> {
        if self.mean <= 0.0 || !self.mean.is_finite() {
            return Err(ConfigError::InvalidSerialInterval {
                mean: self.mean,
                std_dev: self.std_dev,
                reason: "mean must be positive and finite",
            });
        }
        if self.std_dev <= 0.0 || !self.std_dev.is_finite() {
            return Err(ConfigError::InvalidSerialInterval {
                mean: self.mean,
                std_dev: self.std_dev,
                reason: "std_dev must be positive and finite",
            });
        }
        Ok(())
    }

    /// Shape parameter of the implied gamma distribution
    #[must_use]
    pub fn gamma_shape(&self) -> f64 {
        (self.mean / self.std_dev).powi(2)
    }

    /// Scale parameter of the implied gamma distribution
    #[must_use]
    pub fn gamma_scale(&self) -> f64 {
        self.std_dev * self.std_dev / self.mean
    }
}
