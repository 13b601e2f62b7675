//! Sub-score algorithms and the composite health index
//!
//! ## Scorers
//!
//! 1. **Traffic fatigue** (default 40%) - cumulative and heavy vehicle load
//! 2. **Thermal stress** (default 40%) - freeze exposure and thermal cycling
//! 3. **Noise anomaly** (default 20%) - acoustic drift from baseline
//!
//! Each scorer is a pure function of its own series and calibration, so they
//! can run in any order or in parallel.

pub mod health_index;
pub mod noise;
pub mod thermal;
pub mod traffic;
pub mod trend;

pub use health_index::{HealthIndexCalculator, IndexAssessment};
pub use noise::NoiseAnomalyScorer;
pub use thermal::{ThermalStressScorer, ThermalTriggers};
pub use traffic::TrafficFatigueScorer;
pub use trend::{SplitPoint, TrendAnalyzer};

use crate::types::{ScoreCategory, ScoringError, SignalSeries, SubScore};

/// A degradation scorer for one signal family. The pipeline holds its
/// scorers as trait objects.
pub trait SubScorer: Send + Sync + std::fmt::Debug {
    fn category(&self) -> ScoreCategory;

    /// Score a validated series. The returned value is already in [0, 100].
    fn score(&self, series: &SignalSeries) -> Result<SubScore, ScoringError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoringConfig;
    use crate::types::SignalKind;

    #[test]
    fn test_scorers_through_trait_objects() {
        let config = ScoringConfig::default();
        let scorers: Vec<(Box<dyn SubScorer>, SignalSeries)> = vec![
            (
                Box::new(TrafficFatigueScorer::from_config(&config.traffic)) as Box<dyn SubScorer>,
                SignalSeries::new(SignalKind::Traffic, vec![0.0; 336], 336).expect("traffic"),
            ),
            (
                Box::new(ThermalStressScorer::from_config(&config.thermal)) as Box<dyn SubScorer>,
                SignalSeries::new(SignalKind::Temperature, vec![-5.0; 72], 72).expect("forecast"),
            ),
            (
                Box::new(NoiseAnomalyScorer::from_config(&config.noise)) as Box<dyn SubScorer>,
                SignalSeries::new(SignalKind::Noise, vec![75.0; 336], 336).expect("noise"),
            ),
        ];

        let scores: Vec<SubScore> = scorers
            .iter()
            .map(|(scorer, series)| scorer.score(series).expect("score"))
            .collect();
        let categories: Vec<ScoreCategory> = scorers.iter().map(|(s, _)| s.category()).collect();

        assert_eq!(
            categories,
            vec![ScoreCategory::Traffic, ScoreCategory::Thermal, ScoreCategory::Noise]
        );
        assert!(scores.iter().zip(&categories).all(|(s, c)| s.category() == *c));
        assert_eq!(scores[0].value(), 0.0);
        // near freeze + sustained freeze, no cycling
        assert_eq!(scores[1].value(), 80.0);
        assert_eq!(scores[2].value(), 10.0);
    }
}
