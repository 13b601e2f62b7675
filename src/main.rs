//! JointWatch command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Assess one joint from three CSV exports
//! jointwatch assess --traffic traffic.csv --temperature forecast.csv --noise noise.csv
//!
//! # Pick named columns and write a JSON report
//! jointwatch assess --traffic counts.csv --traffic-column vehicles \
//!     --temperature met.csv --temperature-column temp_c \
//!     --noise acoustic.csv --format json --output report.json
//!
//! # Start a calibration file from the defaults
//! jointwatch default-config > jointwatch.toml
//! ```
//!
//! # Environment Variables
//!
//! - `JOINTWATCH_CONFIG`: Path to the calibration TOML (default: ./jointwatch.toml)
//! - `RUST_LOG`: Logging level (default: info)
//! - `JOINTWATCH_LOG_JSON`: Set to "true" for JSON log lines

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use tracing::info;

use jointwatch::config::ScoringConfig;
use jointwatch::ingest::read_series;
use jointwatch::pipeline::ScoringPipeline;
use jointwatch::report;

#[derive(Parser, Debug)]
#[command(name = "jointwatch")]
#[command(about = "Composite health scoring for tunnel asphalt joints")]
#[command(version)]
struct CliArgs {
    /// Emit logs as JSON lines
    #[arg(long, global = true, env = "JOINTWATCH_LOG_JSON")]
    log_json: bool,

    #[command(subcommand)]
    command: SubCommand,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Score one joint from traffic, temperature, and noise series
    Assess {
        /// Hourly vehicle counts (CSV or one number per line)
        #[arg(long)]
        traffic: PathBuf,

        /// Column to read from the traffic file (default: last column)
        #[arg(long)]
        traffic_column: Option<String>,

        /// Hourly temperature forecast in °C
        #[arg(long)]
        temperature: PathBuf,

        #[arg(long)]
        temperature_column: Option<String>,

        /// Noise levels in dB
        #[arg(long)]
        noise: PathBuf,

        #[arg(long)]
        noise_column: Option<String>,

        /// Calibration TOML (default: $JOINTWATCH_CONFIG, then ./jointwatch.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Print the default calibration as TOML
    DefaultConfig,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_logging(args.log_json);

    match args.command {
        SubCommand::Assess {
            traffic,
            traffic_column,
            temperature,
            temperature_column,
            noise,
            noise_column,
            config,
            format,
            output,
        } => {
            let config = match config {
                Some(path) => ScoringConfig::load_from_file(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => ScoringConfig::load().context("loading scoring config")?,
            };

            let traffic = load_series(&traffic, traffic_column.as_deref())?;
            let temperature = load_series(&temperature, temperature_column.as_deref())?;
            let noise = load_series(&noise, noise_column.as_deref())?;

            let asset = config.asset.clone();
            let pipeline = ScoringPipeline::new(config).context("invalid scoring configuration")?;
            let result = pipeline
                .run(&traffic, &temperature, &noise, Utc::now())
                .context("health assessment failed")?;

            let rendered = match format {
                ReportFormat::Text => report::render_text(&result, &asset),
                ReportFormat::Json => {
                    report::render_json(&result, &asset).context("serializing JSON report")?
                }
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing report to {}", path.display()))?;
                    info!(path = %path.display(), "Report written");
                }
                None => print!("{rendered}"),
            }
        }
        SubCommand::DefaultConfig => {
            print!("{}", ScoringConfig::default().to_toml()?);
        }
    }

    Ok(())
}

/// Logs go to stderr so reports can be piped.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn load_series(path: &Path, column: Option<&str>) -> Result<Vec<f64>> {
    read_series(path, column).with_context(|| format!("reading series {}", path.display()))
}
