use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use drivetrain_patterns::common::heading;
use drivetrain_patterns::config::SimulationConfig;
use drivetrain_patterns::drivetrain::sim::SimulatedDrivetrain;
use drivetrain_patterns::drivetrain::DrivetrainControlPort;
use drivetrain_patterns::TestModeScheduler;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Run a test-mode pattern against the simulated drivetrain
#[derive(Parser, Debug)]
#[command(name = "test_mode")]
#[command(version)]
struct Args {
    /// Pattern to run
    #[arg(short, long, default_value = "Pirouette")]
    pattern: String,

    /// Number of scheduler periods to run
    #[arg(short, long, default_value_t = 200)]
    ticks: u32,

    /// YAML file with simulation parameters
    #[arg(long)]
    params_file: Option<PathBuf>,

    /// Pace ticks at the configured period instead of running flat out
    #[arg(long)]
    realtime: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("drivetrain_patterns=info,test_mode=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.params_file {
        Some(path) => SimulationConfig::from_yaml_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => SimulationConfig::default(),
    };
    info!(?config, "Simulation parameters");

    let period = Duration::try_from_secs_f64(config.period_s)
        .with_context(|| format!("invalid period_s {}", config.period_s))?;
    let mut scheduler = TestModeScheduler::with_test_patterns(SimulatedDrivetrain::with_config(config));
    scheduler.select(&args.pattern)?;

    let mut interval = args.realtime.then(|| tokio::time::interval(period));
    for _ in 0..args.ticks {
        if let Some(interval) = interval.as_mut() {
            interval.tick().await;
        }
        scheduler.run_periodic();
    }

    let drivetrain = scheduler.into_drivetrain();
    let pose = drivetrain.pose();
    info!(
        pattern = %args.pattern,
        ticks = args.ticks,
        x = pose.translation.vector.x,
        y = pose.translation.vector.y,
        heading = %heading(&pose),
        azimuth = %drivetrain.azimuth(),
        brake_mode = drivetrain.brake_mode(),
        "Pattern finished"
    );

    Ok(())
}
