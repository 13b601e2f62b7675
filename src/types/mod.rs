//! Shared data structures for joint health scoring
//!
//! - `SignalSeries`: validated input series (traffic, temperature, noise)
//! - `SubScore`, `HealthStatus`, `Trend`: intermediate and classification values
//! - `HealthAssessmentResult`: the immutable record a pipeline run produces
//! - `ScoringError`: input and configuration failures

mod assessment;
mod error;
mod series;

pub use assessment::*;
pub use error::*;
pub use series::*;
