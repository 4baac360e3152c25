//! Trial-averaged results and derived summary rows.
//!
//! Averaging `trial_count` integer trials yields fractional per-step means;
//! the averaged series therefore holds `f64` values while per-trial records
//! stay exact integers.

use serde::{Deserialize, Serialize};

/// Mean compartment counts at one step, across all trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeanStep {
    pub step: usize,
    pub susceptible: f64,
    pub infected: f64,
    pub recovered: f64,
    pub new_infections: f64,
}

/// Trial-averaged result of one grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One record per step, index 0 being the initial state
    pub steps: Vec<MeanStep>,
    /// Trials averaged into this series
    pub trial_count: usize,
}

impl SimulationResult {
    /// Mean incidence series, one entry per step record
    #[must_use]
    pub fn incidence(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.new_infections).collect()
    }

    /// Mean prevalence (infected count) series
    #[must_use]
    pub fn prevalence(&self) -> Vec<f64> {
        self.steps.iter().map(|s| s.infected).collect()
    }

    /// Sum of mean incidence over all steps
    #[must_use]
    pub fn total_cases(&self) -> f64 {
        self.steps.iter().map(|s| s.new_infections).sum()
    }

    /// Step index and value of the prevalence peak.
    ///
    /// Ties resolve to the earliest step.
    #[must_use]
    pub fn peak(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for record in &self.steps {
            match best {
                Some((_, value)) if record.infected <= value => {}
                _ => best = Some((record.step, record.infected)),
            }
        }
        best
    }
}

/// Reproduction-number estimate for one grid point.
///
/// `Missing` is a first-class outcome, not an error: strict interventions
/// can produce a growth phase with no observed infections, in which case
/// the estimator is never invoked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum R0Estimate {
    Estimated(f64),
    Missing,
}

impl R0Estimate {
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, R0Estimate::Missing)
    }

    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            R0Estimate::Estimated(value) => Some(*value),
            R0Estimate::Missing => None,
        }
    }
}

/// One row of the sweep table: derived statistics for a single
/// (exposure rate, infection probability) grid point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSummary {
    pub exposure_rate: f64,
    pub infection_probability: f64,
    /// Sum of mean incidence over all steps
    pub total_cases: f64,
    /// Highest mean infected count at any step
    pub peak_prevalence: f64,
    /// Step at which prevalence peaked
    pub peak_step: usize,
    pub estimated_r0: R0Estimate,
}
