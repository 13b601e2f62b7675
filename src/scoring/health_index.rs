//! Composite health index and status classification

use serde::Serialize;

use crate::config::{ScoringConfig, StatusThresholds, WeightsConfig};
use crate::types::{HealthStatus, SubScore};

/// Index, status, and advice for one set of sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndexAssessment {
    /// Composite index in [0, 100], one decimal
    pub index: f64,
    pub status: HealthStatus,
    pub advice: &'static str,
}

/// Weighted complement of the three sub-scores.
///
/// ```text
/// raw   = 100 - w_traffic * traffic - w_thermal * thermal - w_noise * noise
/// index = clamp(round(raw, 1), 0, 100)
/// ```
///
/// Pure and stateless: the same sub-scores and configuration always give the
/// same index, status, and advice.
#[derive(Debug, Clone)]
pub struct HealthIndexCalculator {
    weights: WeightsConfig,
    thresholds: StatusThresholds,
}

impl Default for HealthIndexCalculator {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}

impl HealthIndexCalculator {
    pub fn from_config(config: &ScoringConfig) -> Self {
        Self::new(config.weights.clone(), config.status.clone())
    }

    pub const fn new(weights: WeightsConfig, thresholds: StatusThresholds) -> Self {
        Self { weights, thresholds }
    }

    pub fn compute(&self, traffic: SubScore, thermal: SubScore, noise: SubScore) -> IndexAssessment {
        let index = self.index(traffic, thermal, noise);
        let status = self.classify(index);
        IndexAssessment {
            index,
            status,
            advice: status.advice(),
        }
    }

    pub fn index(&self, traffic: SubScore, thermal: SubScore, noise: SubScore) -> f64 {
        let raw = 100.0
            - self.weights.traffic * traffic.value()
            - self.weights.thermal * thermal.value()
            - self.weights.noise * noise.value();
        round_to_tenth(raw).clamp(0.0, 100.0)
    }

    /// Lower bounds are inclusive: an index exactly at `healthy_min` is Healthy,
    /// exactly at `warning_min` is Warning.
    pub fn classify(&self, index: f64) -> HealthStatus {
        if index >= self.thresholds.healthy_min {
            HealthStatus::Healthy
        } else if index >= self.thresholds.warning_min {
            HealthStatus::Warning
        } else {
            HealthStatus::Critical
        }
    }
}

/// Round to the nearest tenth using the exact binary value, ties to even.
/// `-0.0` is normalised to `0.0`.
///
/// Scaling by ten first is not equivalent: `86.35` is stored just below the
/// tie, but `86.35 * 10.0` rounds up to exactly `863.5`.
fn round_to_tenth(value: f64) -> f64 {
    let rounded = format!("{value:.1}").parse::<f64>().unwrap_or(value);
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
