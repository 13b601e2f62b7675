//! Scoring pipeline
//!
//! ```text
//! raw series ─► SignalSeries (traffic, temperature, noise; fail fast in that order)
//!            ─► traffic │ thermal │ noise │ noise trend   (rayon::join, no shared state)
//!            ─► HealthIndexCalculator
//!            ─► HealthAssessmentResult
//! ```

mod coordinator;

pub use coordinator::{run_assessment, ScoringPipeline};
