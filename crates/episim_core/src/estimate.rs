//! Reproduction-number estimation from a growth-phase incidence series.
//!
//! The estimator fits an exponential growth rate `r` by least-squares
//! regression of log-incidence against time, then converts it to R0 with
//! the Wallinga-Lipsitch relation for a gamma-distributed serial interval:
//! `R = (1 + r * scale) ^ shape`, where shape and scale are implied by the
//! serial interval's mean and standard deviation.
//!
//! Degenerate input never errors; it yields [`R0Estimate::Missing`].

use crate::config::SerialInterval;
use crate::model::R0Estimate;

/// Least-squares slope of `y` against `x`. `None` when the x values are
/// all identical or the inputs are too short.
fn regression_slope(points: &[(f64, f64)]) -> Option<f64> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (x, y) in points {
        covariance += (x - mean_x) * (y - mean_y);
        variance += (x - mean_x) * (x - mean_x);
    }
    if variance == 0.0 {
        return None;
    }
    Some(covariance / variance)
}

/// Estimate R0 from a growth-phase incidence series.
///
/// Only strictly positive incidence points enter the regression; fewer
/// than two of them, a non-finite growth rate, or a rate outside the
/// support of the gamma serial interval all produce `Missing`.
#[must_use]
pub fn estimate_r0(incidence: &[f64], serial_interval: &SerialInterval) -> R0Estimate {
    if serial_interval.validate().is_err() {
        return R0Estimate::Missing;
    }

    let points: Vec<(f64, f64)> = incidence
        .iter()
        .enumerate()
        .filter(|&(_, &cases)| cases > 0.0)
        .map(|(step, &cases)| (step as f64, cases.ln()))
        .collect();

    let Some(growth_rate) = regression_slope(&points) else {
        return R0Estimate::Missing;
    };
    if !growth_rate.is_finite() {
        return R0Estimate::Missing;
    }

    let shape = serial_interval.gamma_shape();
    let scale = serial_interval.gamma_scale();

    // Wallinga-Lipsitch: defined only while 1 + r*scale stays positive.
    let base = 1.0 + growth_rate * scale;
    if base <= 0.0 {
        return R0Estimate::Missing;
    }

    let estimate = base.powf(shape);
    if estimate.is_finite() {
        R0Estimate::Estimated(estimate)
    } else {
        R0Estimate::Missing
    }
}
