//! Synthetic input generator
//!
//! Writes `traffic.csv`, `temperature.csv`, and `noise.csv` sized for the
//! active scoring configuration, ready for `jointwatch assess`.
//!
//! # Usage
//! ```bash
//! synthetic-series --out-dir /tmp/joint --seed 7 --mean-temperature -2
//! jointwatch assess --traffic /tmp/joint/traffic.csv \
//!     --temperature /tmp/joint/temperature.csv --noise /tmp/joint/noise.csv
//! ```

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use jointwatch::config::ScoringConfig;
use jointwatch::synthetic::{SyntheticScenario, DEFAULT_SEED};

#[derive(Parser, Debug)]
#[command(name = "synthetic-series")]
#[command(about = "Generate synthetic traffic, temperature, and noise series for JointWatch")]
#[command(version)]
struct Args {
    /// Directory for the generated CSV files
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Calibration TOML whose window lengths the series should match
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Mean hourly vehicle count
    #[arg(long)]
    mean_traffic: Option<f64>,

    /// Daily mean temperature (°C)
    #[arg(long, allow_hyphen_values = true)]
    mean_temperature: Option<f64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ScoringConfig::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ScoringConfig::default(),
    };

    let mut scenario = SyntheticScenario::with_seed(args.seed);
    if let Some(mean) = args.mean_traffic {
        scenario.mean_hourly_traffic = mean;
    }
    if let Some(mean) = args.mean_temperature {
        scenario.mean_temperature_c = mean;
    }

    let series = scenario.generate(&config)?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    write_csv(&args.out_dir.join("traffic.csv"), "vehicles", &series.traffic)?;
    write_csv(&args.out_dir.join("temperature.csv"), "temp_c", &series.temperature)?;
    write_csv(&args.out_dir.join("noise.csv"), "noise_db", &series.noise)?;

    info!(
        seed = args.seed,
        out_dir = %args.out_dir.display(),
        traffic = series.traffic.len(),
        temperature = series.temperature.len(),
        noise = series.noise.len(),
        "Synthetic series written"
    );
    Ok(())
}

fn write_csv(path: &Path, column: &str, values: &[f64]) -> Result<()> {
    let mut out = format!("hour,{column}\n");
    for (hour, value) in values.iter().enumerate() {
        writeln!(out, "{hour},{value}")?;
    }
    std::fs::write(path, out).with_context(|| format!("writing {}", path.display()))
}
