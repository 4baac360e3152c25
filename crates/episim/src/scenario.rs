//! Scenario files: the YAML description of one sweep session.
//!
//! A scenario bundles the shared outbreak parameters with the two lever
//! axes and the serial-interval assumption. It splits into a base
//! `SimulationConfig` and a `SweepConfig` for the core driver.

use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};

use episim_core::config::{DepartureRates, SerialInterval, SimulationConfig};
use episim_core::sweep::SweepConfig;

fn default_step_count() -> usize {
    100
}

fn default_trial_count() -> usize {
    10
}

/// One sweep session as described by a YAML scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    // === Shared outbreak parameters ===
    pub population_size: u64,
    pub initial_infected: u64,
    pub recovery_rate: f64,
    #[serde(default)]
    pub arrival_rate: f64,
    #[serde(default)]
    pub departure_rates: DepartureRates,
    #[serde(default = "default_step_count")]
    pub step_count: usize,
    #[serde(default = "default_trial_count")]
    pub trial_count: usize,
    #[serde(default)]
    pub seed: u64,

    // === Intervention lever axes ===
    pub exposure_rates: Vec<f64>,
    pub infection_probabilities: Vec<f64>,

    // === Estimator assumption ===
    #[serde(default)]
    pub serial_interval: SerialInterval,
}

impl Scenario {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| eyre!("failed to parse scenario: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read scenario file {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// The shared base config; lever values start at the first axis
    /// entries and are overridden per grid point by the sweep.
    #[must_use]
    pub fn base_config(&self) -> SimulationConfig {
        SimulationConfig {
            exposure_rate: self.exposure_rates.first().copied().unwrap_or(0.0),
            infection_probability: self.infection_probabilities.first().copied().unwrap_or(0.0),
            population_size: self.population_size,
            initial_infected: self.initial_infected,
            recovery_rate: self.recovery_rate,
            arrival_rate: self.arrival_rate,
            departure_rates: self.departure_rates,
            step_count: self.step_count,
            trial_count: self.trial_count,
            seed: self.seed,
        }
    }

    #[must_use]
    pub fn sweep_config(&self) -> SweepConfig {
        SweepConfig {
            exposure_rates: self.exposure_rates.clone(),
            infection_probabilities: self.infection_probabilities.clone(),
            serial_interval: self.serial_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const FULL_SCENARIO: &str = "\
population_size: 1000
initial_infected: 3
recovery_rate: 0.05
arrival_rate: 0.001
departure_rates:
  susceptible: 0.0005
  infected: 0.002
  recovered: 0.0005
step_count: 100
trial_count: 10
seed: 42
exposure_rates: [2.0, 6.0, 10.0]
infection_probabilities: [0.01, 0.05, 0.1]
serial_interval:
  mean: 7.5
  std_dev: 3.4
";

    #[test]
    fn test_full_scenario_parses() {
        let scenario = Scenario::from_yaml(FULL_SCENARIO).unwrap();
        assert_eq!(scenario.population_size, 1000);
        assert_eq!(scenario.exposure_rates.len(), 3);
        assert_eq!(scenario.departure_rates.infected, 0.002);
        assert_eq!(scenario.serial_interval.mean, 7.5);

        let base = scenario.base_config();
        assert_eq!(base.exposure_rate, 2.0);
        assert_eq!(base.infection_probability, 0.01);
        assert!(base.validate().is_ok());

        let sweep = scenario.sweep_config();
        assert_eq!(sweep.total_points(), 9);
    }

    #[test]
    fn test_optional_fields_default() {
        let minimal = "\
population_size: 500
initial_infected: 2
recovery_rate: 0.1
exposure_rates: [4.0]
infection_probabilities: [0.05]
";
        let scenario = Scenario::from_yaml(minimal).unwrap();
        assert_eq!(scenario.arrival_rate, 0.0);
        assert_eq!(scenario.departure_rates, DepartureRates::default());
        assert_eq!(scenario.step_count, 100);
        assert_eq!(scenario.trial_count, 10);
        assert_eq!(scenario.seed, 0);
        assert_eq!(scenario.serial_interval, SerialInterval::default());
    }

    #[test]
    fn test_malformed_scenario_is_an_error() {
        assert!(Scenario::from_yaml("population_size: [not, a, count]").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL_SCENARIO.as_bytes()).unwrap();

        let scenario = Scenario::load(file.path()).unwrap();
        assert_eq!(scenario.seed, 42);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = Scenario::load(Path::new("/nonexistent/scenario.yaml")).unwrap_err();
        assert!(err.to_string().contains("scenario file"));
    }
}
