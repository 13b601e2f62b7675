//! JointWatch: composite structural-health scoring for tunnel asphalt joints
//!
//! Three signal families are reduced to degradation sub-scores in [0, 100]
//! and combined into a health index with a status and maintenance advice.
//!
//! ## Layout
//!
//! - **types**: series, sub-scores, status, and the assessment result
//! - **config**: TOML calibration with defaults and validation
//! - **scoring**: traffic fatigue, thermal stress, noise anomaly, trend, index
//! - **pipeline**: validates inputs and runs the scorers
//! - **report**: text and JSON renderings
//! - **ingest** / **synthetic**: input helpers used by the binaries
//!
//! ```no_run
//! use chrono::Utc;
//! use jointwatch::{run_assessment, ScoringConfig};
//!
//! # fn main() -> Result<(), jointwatch::ScoringError> {
//! let config = ScoringConfig::default();
//! let traffic = vec![420.0; 336];
//! let temperature = vec![3.5; 72];
//! let noise = vec![78.0; 336];
//! let result = run_assessment(&config, &traffic, &temperature, &noise, Utc::now())?;
//! println!("{} ({})", result.health_index(), result.status());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod ingest;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod synthetic;
pub mod types;

pub use config::{ConfigError, ScoringConfig};
pub use pipeline::{run_assessment, ScoringPipeline};
pub use scoring::{HealthIndexCalculator, SubScorer, TrendAnalyzer};
pub use types::{
    HealthAssessmentResult, HealthStatus, ScoreCategory, ScoringError, SignalKind, SignalSeries,
    SubScore, Trend, TrendDirection,
};
