//! Tests for the compartment conservation law
//!
//! At every step, susceptible + infected + recovered must equal the
//! initial population plus arrivals minus departures accumulated to that
//! step. Checked on per-trial integer records, where it holds exactly.

use crate::config::{DepartureRates, ScenarioBuilder, SimulationConfig};
use crate::model::Compartment;
use crate::simulation::simulate;

fn assert_conserved(config: &SimulationConfig, seed: u64) {
    let run = simulate(config, seed).unwrap();

    let mut net_flow: i64 = 0;
    for record in &run.steps {
        let total: u64 = Compartment::ALL.iter().map(|&c| record.count(c)).sum();
        assert_eq!(total, record.population());

        net_flow += record.arrivals as i64 - record.departures as i64;
        let expected = config.population_size as i64 + net_flow;
        assert_eq!(
            total as i64,
            expected,
            "conservation violated at step {} (seed {seed})",
            record.step
        );
    }
}

#[test]
fn test_closed_population_is_constant() {
    let config = ScenarioBuilder::new()
        .population(500)
        .initial_infected(5)
        .exposure_rate(6.0)
        .infection_probability(0.1)
        .recovery_rate(0.1)
        .steps(60)
        .trials(1)
        .build()
        .unwrap();

    for seed in [1, 2, 3] {
        assert_conserved(&config, seed);
    }
}

#[test]
fn test_open_population_balances_arrivals_and_departures() {
    let config = ScenarioBuilder::new()
        .population(200)
        .initial_infected(4)
        .exposure_rate(5.0)
        .infection_probability(0.08)
        .recovery_rate(0.1)
        .arrival_rate(0.01)
        .departure_rates(DepartureRates::uniform(0.005))
        .steps(50)
        .trials(1)
        .build()
        .unwrap();

    for seed in [11, 12, 13] {
        assert_conserved(&config, seed);
    }
}

#[test]
fn test_asymmetric_departure_rates() {
    let config = ScenarioBuilder::new()
        .population(300)
        .initial_infected(6)
        .exposure_rate(8.0)
        .infection_probability(0.06)
        .recovery_rate(0.08)
        .departure_rates(DepartureRates {
            susceptible: 0.002,
            infected: 0.02,
            recovered: 0.001,
        })
        .steps(40)
        .trials(1)
        .build()
        .unwrap();

    assert_conserved(&config, 99);
}
