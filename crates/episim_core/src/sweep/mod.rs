//! Parameter-sweep driver.
//!
//! A sweep enumerates the Cartesian product of two intervention levers
//! (exposure rate outer, infection probability inner), runs one
//! trial-averaged simulation per grid point, and accumulates one summary
//! row plus the averaged series per point into a [`SweepResults`] table.
//!
//! The grid is walked sequentially; only the trial repetitions inside one
//! grid point parallelize (see `simulation::run_trials`).

use serde::{Deserialize, Serialize};

use crate::config::{SerialInterval, SimulationConfig};
use crate::error::{ConfigError, Result};
use crate::model::{GridSummary, SimulationResult};
use crate::simulation::run_trials;
use crate::summary::summarize;

/// Candidate values for the two swept levers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Outer axis: contacts per person per step
    pub exposure_rates: Vec<f64>,
    /// Inner axis: per-contact transmission probability
    pub infection_probabilities: Vec<f64>,
    /// Serial-interval assumption passed to the estimator
    #[serde(default)]
    pub serial_interval: SerialInterval,
}

impl SweepConfig {
    pub fn validate(&self) -> Result<()> {
        if self.exposure_rates.is_empty() {
            return Err(ConfigError::EmptySweepAxis {
                axis: "exposure_rates",
            });
        }
        if self.infection_probabilities.is_empty() {
            return Err(ConfigError::EmptySweepAxis {
                axis: "infection_probabilities",
            });
        }
        self.serial_interval.validate()
    }

    /// Total number of grid points
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.exposure_rates.len() * self.infection_probabilities.len()
    }
}

/// Lazy, restartable enumeration of the full parameter grid.
///
/// A pure function of its two candidate sets: every call to [`points`] or
/// [`configs`] yields the same deterministic row-major order, outer loop
/// over exposure rates, inner loop over infection probabilities.
///
/// [`points`]: ParameterGrid::points
/// [`configs`]: ParameterGrid::configs
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    exposure_rates: Vec<f64>,
    infection_probabilities: Vec<f64>,
}

impl ParameterGrid {
    #[must_use]
    pub fn new(exposure_rates: Vec<f64>, infection_probabilities: Vec<f64>) -> Self {
        Self {
            exposure_rates,
            infection_probabilities,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exposure_rates.len() * self.infection_probabilities.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lever pairs in grid order
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.exposure_rates.iter().flat_map(move |&rate| {
            self.infection_probabilities
                .iter()
                .map(move |&probability| (rate, probability))
        })
    }

    /// Per-point configurations derived from a shared base config
    pub fn configs<'a>(
        &'a self,
        base: &'a SimulationConfig,
    ) -> impl Iterator<Item = SimulationConfig> + 'a {
        self.points().map(|(rate, probability)| {
            base.with_exposure_rate(rate)
                .with_infection_probability(probability)
        })
    }
}

/// Ordering projections the reporter can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    /// Row-major grid order (default facet layout)
    Grid,
    PeakAscending,
    PeakDescending,
}

/// Accumulated sweep output: one summary row and one averaged series per
/// grid point, stored row-major in grid order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    pub exposure_rates: Vec<f64>,
    pub infection_probabilities: Vec<f64>,
    /// Summary rows, row-major (exposure rate outer)
    pub summaries: Vec<GridSummary>,
    /// Averaged per-step series per grid point, same order as `summaries`
    pub series: Vec<SimulationResult>,
}

impl SweepResults {
    /// Grid shape: (exposure rates, infection probabilities)
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (
            self.exposure_rates.len(),
            self.infection_probabilities.len(),
        )
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }

    /// Summary at (exposure-rate row, infection-probability column)
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&GridSummary> {
        if row >= self.exposure_rates.len() || col >= self.infection_probabilities.len() {
            return None;
        }
        self.summaries
            .get(row * self.infection_probabilities.len() + col)
    }

    /// Indices into `summaries` in the requested presentation order.
    ///
    /// Sorting is a projection; the underlying table keeps grid order.
    #[must_use]
    pub fn sorted_indices(&self, order: SortOrder) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.summaries.len()).collect();
        match order {
            SortOrder::Grid => {}
            SortOrder::PeakAscending => {
                indices.sort_by(|&a, &b| {
                    self.summaries[a]
                        .peak_prevalence
                        .total_cmp(&self.summaries[b].peak_prevalence)
                });
            }
            SortOrder::PeakDescending => {
                indices.sort_by(|&a, &b| {
                    self.summaries[b]
                        .peak_prevalence
                        .total_cmp(&self.summaries[a].peak_prevalence)
                });
            }
        }
        indices
    }
}

/// Walk the full grid sequentially, averaging trials at each point.
///
/// Each grid point reuses the base config's seed, so two sweeps over the
/// same base differ only through their lever values. A failure at any
/// point is surfaced unchanged.
pub fn sweep_run(base: &SimulationConfig, sweep: &SweepConfig) -> Result<SweepResults> {
    sweep.validate()?;
    base.with_exposure_rate(sweep.exposure_rates[0])
        .with_infection_probability(sweep.infection_probabilities[0])
        .validate()?;

    let grid = ParameterGrid::new(
        sweep.exposure_rates.clone(),
        sweep.infection_probabilities.clone(),
    );

    let mut summaries = Vec::with_capacity(grid.len());
    let mut series = Vec::with_capacity(grid.len());
    for config in grid.configs(base) {
        let result = run_trials(&config)?;
        summaries.push(summarize(&result, &config, &sweep.serial_interval));
        series.push(result);
    }

    Ok(SweepResults {
        exposure_rates: sweep.exposure_rates.clone(),
        infection_probabilities: sweep.infection_probabilities.clone(),
        summaries,
        series,
    })
}
