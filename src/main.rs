use std::error::Error;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use solar_tracker_sim::eval::{EnergyComparison, TrackingSummary};
use solar_tracker_sim::io;
use solar_tracker_sim::sim::{self, SimConfig, SimulationRecord};

// Initial angles exercised by the robustness check, deg.
const INITIAL_ANGLES: [f64; 3] = [0.0, -45.0, 45.0];

#[derive(Debug, Default)]
struct Args {
    csv: Option<String>,
    json: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--csv" => args.csv = Some(it.next().ok_or("--csv needs a path")?),
            "--json" => args.json = Some(it.next().ok_or("--json needs a path")?),
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;
    let config = SimConfig::default();

    // -----------------------------------------------------------------------
    // Run all initial conditions
    // -----------------------------------------------------------------------
    let outcomes = sim::run_batch(&config, &INITIAL_ANGLES)?;
    let primary = &outcomes[0];
    let energy = EnergyComparison::from_record(&primary.record, config.sweep_amplitude);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  SINGLE-AXIS SOLAR TRACKER SIMULATION");
    println!("====================================================================");
    println!();
    println!("  Physical Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Inertia:       {:>8.2} kg*m^2  Damping:      {:>8.2} N*m*s",
        config.plant.inertia, config.plant.damping
    );
    println!(
        "  Torque limit:  {:>8.2} N*m     Duration:     {:>8.1} s",
        config.plant.torque_limit, config.duration
    );
    println!(
        "  Timestep:      {:>8.3} s       Sun sweep:    {:>8.1} deg",
        config.dt, config.sweep_amplitude
    );
    println!();
    println!("  Controller Gains");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Kp = {}   Ki = {}   Kd = {}",
        config.gains.kp, config.gains.ki, config.gains.kd
    );
    println!();

    print_check(primary.initial_angle, &primary.summary);
    println!();

    println!("  Energy Analysis");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Tracker energy:      {:>8.2}", energy.tracker);
    println!("  Fixed at 0 deg:      {:>8.2}", energy.fixed_zero);
    println!("  Best fixed angle:    {:>8.1} deg", energy.best_fixed_angle);
    println!("  Best fixed energy:   {:>8.2}", energy.best_fixed);
    println!("  Tracker vs 0 deg:    {:>8.2} %", energy.ratio_vs_zero() * 100.0);
    println!("  Tracker vs best:     {:>8.2} %", energy.ratio_vs_best() * 100.0);
    println!();

    println!("  Robustness");
    println!("  ──────────────────────────────────────────────────────────────────");
    for outcome in &outcomes[1..] {
        print_check(outcome.initial_angle, &outcome.summary);
    }
    println!();

    print_table(&primary.record);

    // -----------------------------------------------------------------------
    // Optional exports
    // -----------------------------------------------------------------------
    if let Some(path) = &args.csv {
        io::write_record_file(path, &primary.record)?;
        println!("  Wrote record: {path}");
    }
    if let Some(path) = &args.json {
        io::write_summary_file(path, &config, &primary.summary, &energy)?;
        println!("  Wrote summary: {path}");
    }

    println!();
    println!("  Simulation: {} steps, dt={} s", primary.record.len(), config.dt);
    println!("====================================================================");
    println!();
    Ok(())
}

fn print_check(initial_angle: f64, summary: &TrackingSummary) {
    println!(
        "  phi(0) = {:>6.1} deg   max |error| after {:.0} s: {:>7.4} deg   [{}]",
        initial_angle,
        summary.settle_time,
        summary.max_error_after_settle,
        if summary.passed { "PASS" } else { "FAIL" }
    );
}

/// Sampled trajectory table.
fn print_table(record: &SimulationRecord) {
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>9}  {:>9}  {:>9}  {:>9}  {:>5}",
        "t (s)", "sun (deg)", "phi (deg)", "err (deg)", "tau (Nm)", "sat"
    );
    println!("  {}", "─".repeat(60));

    let sample_interval = (record.len() / 30).max(1);
    for (i, s) in record.iter().enumerate() {
        if i % sample_interval != 0 && i != record.len() - 1 {
            continue;
        }
        let sat = if s.torque_commanded != s.torque_applied { "SAT" } else { "" };
        println!(
            "  {:>7.2}  {:>9.3}  {:>9.3}  {:>9.4}  {:>9.3}  {:>5}",
            s.time, s.sun_angle, s.angle, s.error, s.torque_applied, sat
        );
    }
    println!();
}
