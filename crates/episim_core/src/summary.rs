//! Result aggregation: one summary row per grid point.

use crate::config::{SerialInterval, SimulationConfig};
use crate::estimate::estimate_r0;
use crate::model::{GridSummary, R0Estimate, SimulationResult};

/// Reduce a trial-averaged result to its summary row.
///
/// The incidence series is truncated at the prevalence peak before
/// estimation, restricting the fit to the growth phase. When the truncated
/// series contains no cases at all, the estimator is skipped and the row
/// carries [`R0Estimate::Missing`] instead of an error.
#[must_use]
pub fn summarize(
    result: &SimulationResult,
    config: &SimulationConfig,
    serial_interval: &SerialInterval,
) -> GridSummary {
    let total_cases = result.total_cases();
    let (peak_step, peak_prevalence) = result.peak().unwrap_or((0, 0.0));

    let incidence = result.incidence();
    let end = (peak_step + 1).min(incidence.len());
    let growth_phase = &incidence[..end];

    let estimated_r0 = if growth_phase.iter().sum::<f64>() <= 0.0 {
        R0Estimate::Missing
    } else {
        estimate_r0(growth_phase, serial_interval)
    };

    GridSummary {
        exposure_rate: config.exposure_rate,
        infection_probability: config.infection_probability,
        total_cases,
        peak_prevalence,
        peak_step,
        estimated_r0,
    }
}
