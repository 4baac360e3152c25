//! Tests for the parameter grid and sweep driver

use crate::config::{ScenarioBuilder, SerialInterval, SimulationConfig};
use crate::error::ConfigError;
use crate::model::GridSummary;
use crate::simulation::run_trials;
use crate::summary::summarize;
use crate::sweep::{ParameterGrid, SortOrder, SweepConfig, sweep_run};

fn base_config() -> SimulationConfig {
    ScenarioBuilder::new()
        .population(300)
        .initial_infected(3)
        .recovery_rate(0.1)
        .steps(60)
        .trials(5)
        .seed(7)
        // Lever values come from the grid.
        .exposure_rate(1.0)
        .infection_probability(0.0)
        .build()
        .unwrap()
}

#[test]
fn test_grid_order_is_rate_outer_probability_inner() {
    let grid = ParameterGrid::new(vec![2.0, 6.0], vec![0.01, 0.05, 0.2]);

    let points: Vec<(f64, f64)> = grid.points().collect();
    assert_eq!(
        points,
        vec![
            (2.0, 0.01),
            (2.0, 0.05),
            (2.0, 0.2),
            (6.0, 0.01),
            (6.0, 0.05),
            (6.0, 0.2),
        ]
    );
}

#[test]
fn test_grid_is_restartable() {
    let grid = ParameterGrid::new(vec![1.0, 3.0], vec![0.1, 0.4]);
    let first: Vec<(f64, f64)> = grid.points().collect();
    let second: Vec<(f64, f64)> = grid.points().collect();
    assert_eq!(first, second);
    assert_eq!(grid.len(), 4);
}

#[test]
fn test_grid_configs_carry_the_lever_values() {
    let base = base_config();
    let grid = ParameterGrid::new(vec![4.0], vec![0.25]);
    let configs: Vec<SimulationConfig> = grid.configs(&base).collect();

    assert_eq!(configs.len(), 1);
    assert_eq!(configs[0].exposure_rate, 4.0);
    assert_eq!(configs[0].infection_probability, 0.25);
    // Everything else is the shared base.
    assert_eq!(configs[0].population_size, base.population_size);
    assert_eq!(configs[0].seed, base.seed);
}

#[test]
fn test_sweep_results_are_laid_out_row_major() {
    let base = base_config();
    let sweep = SweepConfig {
        exposure_rates: vec![2.0, 6.0],
        infection_probabilities: vec![0.02, 0.2],
        serial_interval: SerialInterval::default(),
    };

    let results = sweep_run(&base, &sweep).unwrap();

    assert_eq!(results.shape(), (2, 2));
    assert_eq!(results.len(), 4);
    assert_eq!(results.series.len(), 4);

    let grid = ParameterGrid::new(sweep.exposure_rates, sweep.infection_probabilities);
    for ((rate, probability), summary) in grid.points().zip(&results.summaries) {
        assert_eq!(summary.exposure_rate, rate);
        assert_eq!(summary.infection_probability, probability);
    }
    assert_eq!(
        results.get(1, 0).unwrap().exposure_rate,
        6.0,
        "row index selects the exposure rate"
    );
    assert!(results.get(2, 0).is_none());
}

#[test]
fn test_total_cases_monotone_in_infection_probability() {
    // Widely separated lever values: subcritical, critical, strongly
    // supercritical. Directional property, not bit-exact.
    let base = base_config().with_trial_count(30);
    let sweep = SweepConfig {
        exposure_rates: vec![4.0],
        infection_probabilities: vec![0.0, 0.05, 0.25],
        serial_interval: SerialInterval::default(),
    };

    let results = sweep_run(&base, &sweep).unwrap();
    let totals: Vec<f64> = results.summaries.iter().map(|s| s.total_cases).collect();

    assert_eq!(totals[0], 0.0, "zero probability means zero cases");
    for window in totals.windows(2) {
        assert!(
            window[0] <= window[1],
            "total cases should not decrease with infection probability: {totals:?}"
        );
    }
}

#[test]
fn test_grid_reordering_yields_identical_summary_set() {
    let base = base_config();
    let si = SerialInterval::default();
    let rates = vec![2.0, 6.0];
    let probabilities = vec![0.02, 0.1, 0.3];

    let sweep = SweepConfig {
        exposure_rates: rates.clone(),
        infection_probabilities: probabilities.clone(),
        serial_interval: si,
    };
    let mut forward = sweep_run(&base, &sweep).unwrap().summaries;

    // Walk the transposed order: probability outer, rate inner.
    let mut transposed: Vec<GridSummary> = Vec::new();
    for &probability in &probabilities {
        for &rate in &rates {
            let config = base
                .with_exposure_rate(rate)
                .with_infection_probability(probability);
            let result = run_trials(&config).unwrap();
            transposed.push(summarize(&result, &config, &si));
        }
    }

    let key = |s: &GridSummary| (s.exposure_rate, s.infection_probability);
    forward.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    transposed.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap());
    assert_eq!(forward, transposed);
}

#[test]
fn test_sorted_indices_projections() {
    let base = base_config();
    let sweep = SweepConfig {
        exposure_rates: vec![2.0, 8.0],
        infection_probabilities: vec![0.01, 0.3],
        serial_interval: SerialInterval::default(),
    };
    let results = sweep_run(&base, &sweep).unwrap();

    let grid_order = results.sorted_indices(SortOrder::Grid);
    assert_eq!(grid_order, vec![0, 1, 2, 3]);

    let ascending = results.sorted_indices(SortOrder::PeakAscending);
    let peaks: Vec<f64> = ascending
        .iter()
        .map(|&i| results.summaries[i].peak_prevalence)
        .collect();
    for window in peaks.windows(2) {
        assert!(window[0] <= window[1]);
    }

    let descending = results.sorted_indices(SortOrder::PeakDescending);
    let descending_peaks: Vec<f64> = descending
        .iter()
        .map(|&i| results.summaries[i].peak_prevalence)
        .collect();
    for window in descending_peaks.windows(2) {
        assert!(
            window[0] >= window[1],
            "descending projection out of order: {descending_peaks:?}"
        );
    }
    // Both projections must cover every grid point exactly once.
    let mut coverage = descending.clone();
    coverage.sort_unstable();
    assert_eq!(coverage, vec![0, 1, 2, 3]);
}

#[test]
fn test_empty_sweep_axis_rejected() {
    let base = base_config();
    let sweep = SweepConfig {
        exposure_rates: vec![],
        infection_probabilities: vec![0.1],
        serial_interval: SerialInterval::default(),
    };
    assert!(matches!(
        sweep_run(&base, &sweep).unwrap_err(),
        ConfigError::EmptySweepAxis {
            axis: "exposure_rates"
        }
    ));
}
