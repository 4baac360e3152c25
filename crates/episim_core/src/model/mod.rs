mod compartments;
mod results;

pub use compartments::{Compartment, StepRecord, TrialRun};
pub use results::{GridSummary, MeanStep, R0Estimate, SimulationResult};
