//! Fluent builder for simulation scenarios.
//!
//! The builder mirrors the shape of `SimulationConfig` but validates on
//! `build()`, so a mistyped rate fails loudly instead of producing a
//! silently degenerate outbreak.

use crate::error::Result;

use super::{DepartureRates, SimulationConfig};

/// Fluent builder for a `SimulationConfig`.
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuilder {
    config: SimulationConfig,
}

impl ScenarioBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Population size at step 0
    #[must_use]
    pub fn population(mut self, size: u64) -> Self {
        self.config.population_size = size;
        self
    }

    /// Index cases seeded at step 0
    #[must_use]
    pub fn initial_infected(mut self, count: u64) -> Self {
        self.config.initial_infected = count;
        self
    }

    /// Contacts per susceptible person per step
    #[must_use]
    pub fn exposure_rate(mut self, rate: f64) -> Self {
        self.config.exposure_rate = rate;
        self
    }

    /// Per-contact transmission probability
    #[must_use]
    pub fn infection_probability(mut self, probability: f64) -> Self {
        self.config.infection_probability = probability;
        self
    }

    /// Per-step recovery probability
    #[must_use]
    pub fn recovery_rate(mut self, rate: f64) -> Self {
        self.config.recovery_rate = rate;
        self
    }

    /// Per-capita arrival rate per step
    #[must_use]
    pub fn arrival_rate(mut self, rate: f64) -> Self {
        self.config.arrival_rate = rate;
        self
    }

    /// Per-compartment departure rates
    #[must_use]
    pub fn departure_rates(mut self, rates: DepartureRates) -> Self {
        self.config.departure_rates = rates;
        self
    }

    /// Number of discrete time steps
    #[must_use]
    pub fn steps(mut self, count: usize) -> Self {
        self.config.step_count = count;
        self
    }

    /// Number of stochastic trials to average
    #[must_use]
    pub fn trials(mut self, count: usize) -> Self {
        self.config.trial_count = count;
        self
    }

    /// Base seed for trial seed derivation
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Validate and produce the configuration
    pub fn build(self) -> Result<SimulationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
