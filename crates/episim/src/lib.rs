//! Terminal reporter for epidemic intervention sweeps.
//!
//! Loads a YAML scenario, drives the `episim_core` parameter sweep, and
//! renders the results as faceted prevalence curves and a summary table.
//! The reporter only projects and orders; every number it shows was
//! computed by the core crate.

// ============================================================================
// Core modules
// ============================================================================

pub mod app;
pub mod charts;
pub mod logging;
pub mod scenario;

// ============================================================================
// Utility modules
// ============================================================================

pub mod util;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use app::App;
pub use logging::init_logging;
pub use scenario::Scenario;
