//! Display formatting helpers for summary rows.

use episim_core::model::R0Estimate;

/// Fractional trial-averaged count, one decimal place.
#[must_use]
pub fn format_count(value: f64) -> String {
    format!("{value:.1}")
}

/// Reproduction-number estimate, or a dash when missing.
#[must_use]
pub fn format_r0(estimate: &R0Estimate) -> String {
    match estimate {
        R0Estimate::Estimated(value) => format!("{value:.2}"),
        R0Estimate::Missing => "-".to_string(),
    }
}

/// Facet caption for one grid point.
#[must_use]
pub fn format_levers(exposure_rate: f64, infection_probability: f64) -> String {
    format!("rate {exposure_rate:.1} / prob {infection_probability:.3}")
}
