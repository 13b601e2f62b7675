//! Assessment outputs: sub-scores, status classification, and the final result record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which degradation driver a sub-score measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreCategory {
    Traffic,
    Thermal,
    Noise,
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreCategory::Traffic => write!(f, "traffic"),
            ScoreCategory::Thermal => write!(f, "thermal"),
            ScoreCategory::Noise => write!(f, "noise"),
        }
    }
}

/// A single 0-100 degradation indicator (higher = more degraded).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScore {
    category: ScoreCategory,
    value: f64,
}

impl SubScore {
    /// Build a sub-score, clamping the value into [0, 100].
    ///
    /// Clamping happens here so no caller ever has to do it.
    pub fn new(category: ScoreCategory, value: f64) -> Self {
        Self {
            category,
            value: value.clamp(0.0, 100.0),
        }
    }

    pub const fn category(&self) -> ScoreCategory {
        self.category
    }

    pub const fn value(&self) -> f64 {
        self.value
    }
}

/// Discrete joint health classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HealthStatus {
    Critical,
    Warning,
    Healthy,
}

impl HealthStatus {
    /// Maintenance advice shown alongside the status.
    pub const fn advice(self) -> &'static str {
        match self {
            HealthStatus::Healthy => "No maintenance required. Continue monitoring.",
            HealthStatus::Warning => {
                "Joint degradation likely. Plan inspection or maintenance window."
            }
            HealthStatus::Critical => "Preventive maintenance recommended within short term.",
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HealthStatus::Healthy => write!(f, "Healthy"),
            HealthStatus::Warning => write!(f, "Warning"),
            HealthStatus::Critical => write!(f, "Critical"),
        }
    }
}

/// Direction of a trend delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Rising,
    Stable,
    Falling,
}

/// Baseline vs recent comparison for one series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    /// Mean of the earlier part of the series
    pub baseline_mean: f64,
    /// Mean of the later part of the series
    pub recent_mean: f64,
    /// `recent_mean - baseline_mean`
    pub delta: f64,
}

impl Trend {
    /// Deltas smaller than this (in series units) count as stable.
    pub const STABLE_BAND: f64 = 0.05;

    pub fn direction(&self) -> TrendDirection {
        if self.delta.abs() < Self::STABLE_BAND {
            TrendDirection::Stable
        } else if self.delta > 0.0 {
            TrendDirection::Rising
        } else {
            TrendDirection::Falling
        }
    }
}

/// Outcome of one pipeline run, handed to rendering and export collaborators.
///
/// Only the pipeline builds these, so `status` and `advice` always agree with
/// `health_index` under the configuration that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthAssessmentResult {
    health_index: f64,
    status: HealthStatus,
    advice: String,
    traffic: SubScore,
    thermal: SubScore,
    noise: SubScore,
    noise_trend: Trend,
    assessed_at: DateTime<Utc>,
}

impl HealthAssessmentResult {
    pub(crate) fn new(
        health_index: f64,
        status: HealthStatus,
        traffic: SubScore,
        thermal: SubScore,
        noise: SubScore,
        noise_trend: Trend,
        assessed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            health_index,
            status,
            advice: status.advice().to_string(),
            traffic,
            thermal,
            noise,
            noise_trend,
            assessed_at,
        }
    }

    /// Composite index in [0, 100], rounded to one decimal.
    pub const fn health_index(&self) -> f64 {
        self.health_index
    }

    pub const fn status(&self) -> HealthStatus {
        self.status
    }

    pub fn advice(&self) -> &str {
        &self.advice
    }

    pub const fn traffic(&self) -> SubScore {
        self.traffic
    }

    pub const fn thermal(&self) -> SubScore {
        self.thermal
    }

    pub const fn noise(&self) -> SubScore {
        self.noise
    }

    /// Sub-scores in traffic, thermal, noise order.
    pub const fn sub_scores(&self) -> [SubScore; 3] {
        [self.traffic, self.thermal, self.noise]
    }

    pub const fn noise_trend(&self) -> Trend {
        self.noise_trend
    }

    /// Raw noise drift in dB (recent mean minus baseline mean).
    pub const fn noise_trend_delta(&self) -> f64 {
        self.noise_trend.delta
    }

    pub const fn assessed_at(&self) -> DateTime<Utc> {
        self.assessed_at
    }
}
