//! Stochastic epidemic simulation library
//!
//! This crate provides a discrete-time individual-contact simulation engine
//! for studying the effect of public-health interventions on an outbreak.
//! It supports:
//! - Chain-binomial SIR dynamics with demographic arrivals and departures
//! - Trial averaging across independent stochastic repetitions
//! - Growth-phase reproduction-number estimation with a configurable
//!   serial-interval assumption
//! - Two-lever parameter sweeps (exposure rate x infection probability)
//!   producing one summary row per grid point
//!
//! # Builder DSL
//!
//! Use the fluent builder API for ergonomic scenario setup:
//!
//! ```ignore
//! use episim_core::config::ScenarioBuilder;
//! use episim_core::simulation::run_trials;
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
//!
//! let result = run_trials(&config)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod error;
pub mod estimate;
pub mod simulation;
pub mod summary;
pub mod sweep;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DepartureRates, ScenarioBuilder, SerialInterval, SimulationConfig};
pub use model::{GridSummary, R0Estimate, SimulationResult, TrialRun};
pub use sweep::{ParameterGrid, SortOrder, SweepConfig, SweepResults, sweep_run};
