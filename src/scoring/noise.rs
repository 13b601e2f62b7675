//! Noise anomaly: acoustic drift between the baseline and recent periods

use tracing::debug;

use super::trend::{SplitPoint, TrendAnalyzer};
use super::SubScorer;
use crate::config::NoiseConfig;
use crate::types::{ScoreCategory, ScoringError, SignalSeries, SubScore};

/// Maps acoustic drift onto three coarse severity tiers.
///
/// | drift (dB)        | score |
/// |-------------------|-------|
/// | `< 1`             | 10    |
/// | `1 <= d < 3`      | 40    |
/// | `>= 3`            | 80    |
///
/// Tiers are deliberately discrete so normal sensor wander does not read as
/// gradual degradation. Drift is measured around an explicit split index
/// (168 = first 7 days of a 14-day hourly window by default).
#[derive(Debug, Clone)]
pub struct NoiseAnomalyScorer {
    analyzer: TrendAnalyzer,
    minor_drift_db: f64,
    major_drift_db: f64,
    stable_score: f64,
    minor_score: f64,
    major_score: f64,
}

impl Default for NoiseAnomalyScorer {
    fn default() -> Self {
        Self::from_config(&NoiseConfig::default())
    }
}

impl NoiseAnomalyScorer {
    pub fn from_config(config: &NoiseConfig) -> Self {
        Self {
            analyzer: TrendAnalyzer::new(SplitPoint::At(config.split_index)),
            minor_drift_db: config.minor_drift_db,
            major_drift_db: config.major_drift_db,
            stable_score: config.stable_score,
            minor_score: config.minor_score,
            major_score: config.major_score,
        }
    }

    /// Default tiers with a different split, e.g. `SplitPoint::Midpoint` for
    /// series that are not 14 days long.
    pub fn with_split(split: SplitPoint) -> Self {
        Self {
            analyzer: TrendAnalyzer::new(split),
            ..Self::default()
        }
    }

    pub const fn split(&self) -> SplitPoint {
        self.analyzer.split()
    }

    /// Tier score for a drift value.
    pub fn tier_score(&self, delta_db: f64) -> f64 {
        if delta_db < self.minor_drift_db {
            self.stable_score
        } else if delta_db < self.major_drift_db {
            self.minor_score
        } else {
            self.major_score
        }
    }

    pub fn score_series(&self, levels: &SignalSeries) -> Result<SubScore, ScoringError> {
        let trend = self.analyzer.analyze(levels)?;
        let value = self.tier_score(trend.delta);

        debug!(
            baseline_db = trend.baseline_mean,
            recent_db = trend.recent_mean,
            delta_db = trend.delta,
            score = value,
            "Noise anomaly scored"
        );

        Ok(SubScore::new(ScoreCategory::Noise, value))
    }
}

impl SubScorer for NoiseAnomalyScorer {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::Noise
    }

    fn score(&self, series: &SignalSeries) -> Result<SubScore, ScoringError> {
        self.score_series(series)
    }
}
