//! Computes velocity, distance and remaining fuel after one constant-acceleration interval.
//!
//! With no arguments the built-in scenario runs and three lines are printed to
//! stdout. Diagnostics go to stderr; set `RUST_LOG=debug` to trace each update.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kinematics_calculator::export::{self, json, text};
use kinematics_calculator::run_step;
use kinematics_calculator::scenario::{Overrides, load_inputs};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Single-step velocity, distance and fuel calculator"
)]
struct Cli {
    /// Scenario file (YAML, or TOML by extension); absent fields use built-in values
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Initial velocity in km/h
    #[arg(long, allow_hyphen_values = true)]
    initial_velocity_kmh: Option<String>,

    /// Constant acceleration in m/s²
    #[arg(long, allow_hyphen_values = true)]
    acceleration: Option<String>,

    /// Interval length in seconds
    #[arg(long, allow_hyphen_values = true)]
    elapsed: Option<String>,

    /// Initial distance in km
    #[arg(long, allow_hyphen_values = true)]
    initial_distance_km: Option<String>,

    /// Initial fuel in kg
    #[arg(long, allow_hyphen_values = true)]
    initial_fuel_kg: Option<String>,

    /// Fuel burn rate in kg/s
    #[arg(long, allow_hyphen_values = true)]
    burn_rate: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Output path (`-` for stdout)
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let overrides = Overrides {
        initial_velocity_kmh: cli.initial_velocity_kmh,
        acceleration_m_s2: cli.acceleration,
        elapsed_s: cli.elapsed,
        initial_distance_km: cli.initial_distance_km,
        initial_fuel_kg: cli.initial_fuel_kg,
        burn_rate_kg_s: cli.burn_rate,
    };
    let inputs = load_inputs(cli.scenario.as_deref(), &overrides)?;
    let report = run_step(&inputs)?;

    let mut writer = export::writer_for_path(&cli.output)?;
    match cli.format {
        OutputFormat::Text => text::write_report(&mut *writer, &report)?,
        OutputFormat::Json => json::write_report(&mut *writer, &inputs, &report)?,
    }

    Ok(())
}
