//! Per-trial compartment bookkeeping.
//!
//! One stochastic trial produces an ordered sequence of `StepRecord`s with
//! exact integer counts. The records carry arrivals and departures so the
//! conservation law (compartments sum to the initial population plus net
//! demographic flow) can be checked per step.

use serde::{Deserialize, Serialize};

/// Mutually exclusive health states of the compartmental model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compartment {
    Susceptible,
    Infected,
    Recovered,
}

impl Compartment {
    pub const ALL: [Compartment; 3] = [
        Compartment::Susceptible,
        Compartment::Infected,
        Compartment::Recovered,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Compartment::Susceptible => "susceptible",
            Compartment::Infected => "infected",
            Compartment::Recovered => "recovered",
        }
    }
}

/// State of one trial at the end of a time step.
///
/// `step` 0 is the initial state; flows (`new_infections`, `arrivals`,
/// `departures`) are zero there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: usize,
    pub susceptible: u64,
    pub infected: u64,
    pub recovered: u64,
    /// Incidence: infections that occurred during this step
    pub new_infections: u64,
    /// Demographic inflow during this step
    pub arrivals: u64,
    /// Demographic outflow during this step, all compartments combined
    pub departures: u64,
}

impl StepRecord {
    /// Total people present at the end of this step
    #[must_use]
    pub fn population(&self) -> u64 {
        self.susceptible + self.infected + self.recovered
    }

    #[must_use]
    pub fn count(&self, compartment: Compartment) -> u64 {
        match compartment {
            Compartment::Susceptible => self.susceptible,
            Compartment::Infected => self.infected,
            Compartment::Recovered => self.recovered,
        }
    }
}

/// Complete record of one stochastic trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRun {
    /// Seed this trial was drawn with
    pub seed: u64,
    /// One record per step, index 0 being the initial state
    pub steps: Vec<StepRecord>,
}

impl TrialRun {
    /// Total infections over the whole trial
    #[must_use]
    pub fn total_cases(&self) -> u64 {
        self.steps.iter().map(|s| s.new_infections).sum()
    }

    /// Highest infected count observed at any step
    #[must_use]
    pub fn peak_prevalence(&self) -> u64 {
        self.steps.iter().map(|s| s.infected).max().unwrap_or(0)
    }

    /// Incidence series, one entry per step record
    #[must_use]
    pub fn incidence(&self) -> Vec<u64> {
        self.steps.iter().map(|s| s.new_infections).collect()
    }
}
