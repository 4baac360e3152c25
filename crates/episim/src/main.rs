use std::path::PathBuf;

use clap::Parser;

use episim::{App, Scenario, init_logging};
use episim_core::sweep_run;
use episim_core::sweep::SortOrder;

#[derive(Parser, Debug)]
#[command(name = "episim")]
#[command(about = "A terminal-based epidemic parameter-sweep explorer")]
struct Args {
    /// Path to a YAML scenario file
    scenario: PathBuf,

    /// Directory for log output (default: ~/.episim/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Override the scenario's trial count
    #[arg(short, long)]
    trials: Option<usize>,

    /// Print the summary table and exit instead of opening the UI
    #[arg(long)]
    summary: bool,
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".episim")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    init_logging(&data_dir, &args.log_level)?;

    let scenario = Scenario::load(&args.scenario)?;
    let mut base = scenario.base_config();
    if let Some(trials) = args.trials {
        base = base.with_trial_count(trials);
    }
    let sweep = scenario.sweep_config();

    tracing::info!(
        grid_points = sweep.total_points(),
        trials = base.trial_count,
        steps = base.step_count,
        "Running parameter sweep"
    );
    let results = sweep_run(&base, &sweep)?;
    tracing::info!("Sweep complete");

    if args.summary {
        print_summary(&results);
        return Ok(());
    }

    let mut app = App::new(results);
    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}

fn print_summary(results: &episim_core::SweepResults) {
    println!(
        "{:>8} {:>8} {:>14} {:>12} {:>10} {:>8}",
        "rate", "prob", "total cases", "peak", "peak step", "R0"
    );
    for idx in results.sorted_indices(SortOrder::Grid) {
        let s = &results.summaries[idx];
        println!(
            "{:>8.1} {:>8.3} {:>14.1} {:>12.1} {:>10} {:>8}",
            s.exposure_rate,
            s.infection_probability,
            s.total_cases,
            s.peak_prevalence,
            s.peak_step,
            episim::util::format::format_r0(&s.estimated_r0),
        );
    }
}
