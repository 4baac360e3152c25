//! Integration tests for the episim simulation engine
//!
//! Tests are organized by topic:
//! - `basic` - Core engine mechanics, validation, determinism
//! - `conservation` - Compartment conservation under demographic flows
//! - `estimate` - Reproduction-number estimation
//! - `sweep` - Parameter grid and sweep driver

mod conservation;
mod sweep;
