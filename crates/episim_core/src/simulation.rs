//! Stochastic individual-contact simulation engine.
//!
//! Discrete-time chain-binomial dynamics: each step, every susceptible
//! person has `exposure_rate` contacts, each transmitting with probability
//! `infection_probability * I/N`. Recoveries, arrivals, and departures are
//! drawn per step from binomial and Poisson distributions. One call to
//! [`simulate`] is a single trial; [`run_trials`] averages `trial_count`
//! independent trials into a [`SimulationResult`].

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::{Binomial, Distribution, Poisson};

use crate::config::SimulationConfig;
use crate::error::{ConfigError, Result};
use crate::model::{MeanStep, SimulationResult, StepRecord, TrialRun};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelIterator, ParallelIterator};

/// Draw from Binomial(n, p), short-circuiting the degenerate tails.
fn draw_binomial<R: Rng + ?Sized>(rng: &mut R, n: u64, p: f64) -> Result<u64> {
    if n == 0 || p <= 0.0 {
        return Ok(0);
    }
    if p >= 1.0 {
        return Ok(n);
    }
    let dist = Binomial::new(n, p).map_err(|_| ConfigError::InvalidDistributionParameters {
        distribution: "Binomial",
        reason: "probability outside [0, 1]",
    })?;
    Ok(dist.sample(rng))
}

/// Draw from Poisson(lambda); zero rate means zero arrivals.
fn draw_poisson<R: Rng + ?Sized>(rng: &mut R, lambda: f64) -> Result<u64> {
    if lambda <= 0.0 {
        return Ok(0);
    }
    let dist = Poisson::new(lambda).map_err(|_| ConfigError::InvalidDistributionParameters {
        distribution: "Poisson",
        reason: "rate must be positive and finite",
    })?;
    Ok(dist.sample(rng) as u64)
}

/// Run one stochastic trial.
///
/// The configuration is validated before any draws; an invalid config is
/// surfaced unchanged with no local recovery. Step 0 records the initial
/// state, followed by one record per simulated step.
pub fn simulate(params: &SimulationConfig, seed: u64) -> Result<TrialRun> {
    params.validate()?;

    let mut rng = SmallRng::seed_from_u64(seed);

    let mut susceptible = params.population_size - params.initial_infected;
    let mut infected = params.initial_infected;
    let mut recovered = 0u64;

    let mut steps = Vec::with_capacity(params.step_count + 1);
    steps.push(StepRecord {
        step: 0,
        susceptible,
        infected,
        recovered,
        new_infections: 0,
        arrivals: 0,
        departures: 0,
    });

    for step in 1..=params.step_count {
        let population = susceptible + infected + recovered;

        // Transmission: per-contact success is attenuated by current
        // prevalence, and each susceptible has exposure_rate contacts.
        let new_infections = if infected > 0 && population > 0 {
            let per_contact = params.infection_probability * infected as f64 / population as f64;
            let escape = (1.0 - per_contact).max(0.0).powf(params.exposure_rate);
            draw_binomial(&mut rng, susceptible, 1.0 - escape)?
        } else {
            0
        };

        let recoveries = draw_binomial(&mut rng, infected, params.recovery_rate)?;

        susceptible -= new_infections;
        infected += new_infections;
        infected -= recoveries;
        recovered += recoveries;

        // Demography: arrivals enter susceptible, departures leave each
        // compartment independently.
        let arrivals = draw_poisson(&mut rng, params.arrival_rate * population as f64)?;
        susceptible += arrivals;

        let dep_s = draw_binomial(&mut rng, susceptible, params.departure_rates.susceptible)?;
        let dep_i = draw_binomial(&mut rng, infected, params.departure_rates.infected)?;
        let dep_r = draw_binomial(&mut rng, recovered, params.departure_rates.recovered)?;
        susceptible -= dep_s;
        infected -= dep_i;
        recovered -= dep_r;

        steps.push(StepRecord {
            step,
            susceptible,
            infected,
            recovered,
            new_infections,
            arrivals,
            departures: dep_s + dep_i + dep_r,
        });
    }

    Ok(TrialRun { seed, steps })
}

/// Derive `count` trial seeds deterministically from the base seed.
fn trial_seeds(base_seed: u64, count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(base_seed);
    (0..count).map(|_| rng.next_u64()).collect()
}

/// Run `trial_count` independent trials and average them per step.
pub fn run_trials(params: &SimulationConfig) -> Result<SimulationResult> {
    params.validate()?;

    let seeds = trial_seeds(params.seed, params.trial_count);

    #[cfg(feature = "parallel")]
    let runs = seeds
        .into_par_iter()
        .map(|seed| simulate(params, seed))
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let runs = seeds
        .into_iter()
        .map(|seed| simulate(params, seed))
        .collect::<Result<Vec<_>>>()?;

    Ok(average_trials(&runs))
}

/// Per-step mean across trials. All trials share the same step count.
fn average_trials(runs: &[TrialRun]) -> SimulationResult {
    let trial_count = runs.len();
    let step_count = runs.first().map_or(0, |run| run.steps.len());
    let scale = 1.0 / trial_count as f64;

    let steps = (0..step_count)
        .map(|idx| {
            let mut mean = MeanStep {
                step: idx,
                susceptible: 0.0,
                infected: 0.0,
                recovered: 0.0,
                new_infections: 0.0,
            };
            for run in runs {
                let record = &run.steps[idx];
                mean.susceptible += record.susceptible as f64 * scale;
                mean.infected += record.infected as f64 * scale;
                mean.recovered += record.recovered as f64 * scale;
                mean.new_infections += record.new_infections as f64 * scale;
            }
            mean
        })
        .collect();

    SimulationResult { steps, trial_count }
}
