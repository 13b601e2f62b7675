//! Scoring error taxonomy

use thiserror::Error;

use super::SignalKind;

/// Errors raised while validating inputs or configuration for a scoring run.
///
/// Series errors are raised on the first violation found. Configuration
/// errors carry every violated rule so an operator can fix them in one pass.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("{kind} series has {actual} samples, expected {expected}")]
    InvalidSeriesLength {
        kind: SignalKind,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} sample {index} = {value} is invalid: {reason}")]
    InvalidSampleValue {
        kind: SignalKind,
        index: usize,
        value: f64,
        reason: &'static str,
    },

    #[error("{kind} series has no samples for {context}")]
    EmptySeries {
        kind: SignalKind,
        context: &'static str,
    },

    #[error("Invalid scoring configuration: {}", .0.join("; "))]
    InvalidConfiguration(Vec<String>),
}
