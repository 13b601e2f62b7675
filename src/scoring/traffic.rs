//! Traffic fatigue: cumulative vehicle load over the observation window

use tracing::debug;

use super::SubScorer;
use crate::config::TrafficConfig;
use crate::types::{ScoreCategory, ScoringError, SignalSeries, SubScore};

/// Converts a total vehicle-count series into a 0-100 fatigue sub-score.
///
/// ```text
/// heavy[i]   = floor(total[i] * heavy_ratio)
/// total_norm = min(sum(total) / total_saturation, 1)
/// heavy_norm = min(sum(heavy) / heavy_saturation, 1)
/// score      = (w_total * total_norm + w_heavy * heavy_norm) * 100
/// ```
///
/// Total volume dominates (0.6 vs 0.4 by default). The result is monotonically
/// non-decreasing in both the total volume and the heavy-vehicle ratio.
#[derive(Debug, Clone)]
pub struct TrafficFatigueScorer {
    heavy_vehicle_ratio: f64,
    total_saturation_vehicles: f64,
    heavy_saturation_vehicles: f64,
    total_volume_weight: f64,
    heavy_volume_weight: f64,
}

impl Default for TrafficFatigueScorer {
    fn default() -> Self {
        Self::from_config(&TrafficConfig::default())
    }
}

impl TrafficFatigueScorer {
    pub fn from_config(config: &TrafficConfig) -> Self {
        Self {
            heavy_vehicle_ratio: config.heavy_vehicle_ratio,
            total_saturation_vehicles: config.total_saturation_vehicles,
            heavy_saturation_vehicles: config.heavy_saturation_vehicles,
            total_volume_weight: config.total_volume_weight,
            heavy_volume_weight: config.heavy_volume_weight,
        }
    }

    /// Default calibration with a custom heavy-vehicle share.
    pub fn with_heavy_ratio(heavy_vehicle_ratio: f64) -> Self {
        Self {
            heavy_vehicle_ratio,
            ..Self::default()
        }
    }

    /// Whole heavy vehicles per sample, rounded down.
    pub fn heavy_series(&self, total: &SignalSeries) -> Vec<f64> {
        total
            .samples()
            .iter()
            .map(|&count| (count * self.heavy_vehicle_ratio).floor())
            .collect()
    }

    pub fn score_series(&self, total: &SignalSeries) -> SubScore {
        let total_sum = total.sum();
        let heavy_sum: f64 = self.heavy_series(total).iter().sum();

        let total_norm = (total_sum / self.total_saturation_vehicles).min(1.0);
        let heavy_norm = (heavy_sum / self.heavy_saturation_vehicles).min(1.0);
        let value =
            (self.total_volume_weight * total_norm + self.heavy_volume_weight * heavy_norm) * 100.0;

        debug!(
            total_vehicles = total_sum,
            heavy_vehicles = heavy_sum,
            total_norm,
            heavy_norm,
            score = value,
            "Traffic fatigue scored"
        );

        SubScore::new(ScoreCategory::Traffic, value)
    }
}

impl SubScorer for TrafficFatigueScorer {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::Traffic
    }

    fn score(&self, series: &SignalSeries) -> Result<SubScore, ScoringError> {
        Ok(self.score_series(series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalKind;

    fn traffic(samples: Vec<f64>) -> SignalSeries {
        let len = samples.len();
        SignalSeries::new(SignalKind::Traffic, samples, len).expect("valid traffic")
    }

    #[test]
    fn test_heavy_series_floors() {
        let scorer = TrafficFatigueScorer::with_heavy_ratio(0.15);
        let heavy = scorer.heavy_series(&traffic(vec![446.0, 447.0, 0.0, 6.0]));
        assert_eq!(heavy, vec![66.0, 67.0, 0.0, 0.0]);
    }

    #[test]
    fn test_zero_traffic_scores_zero() {
        let score = TrafficFatigueScorer::default().score_series(&traffic(vec![0.0; 336]));
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.category(), ScoreCategory::Traffic);
    }

    #[test]
    fn test_half_saturation_total_only() {
        // Ratio 0 leaves only the total-volume term: 0.6 * 0.5 * 100
        let scorer = TrafficFatigueScorer::with_heavy_ratio(0.0);
        let score = scorer.score_series(&traffic(vec![1_000.0; 150]));
        assert!((score.value() - 30.0).abs() < 1e-9, "Score: {}", score.value());
    }

    #[test]
    fn test_saturated_traffic_scores_100() {
        let scorer = TrafficFatigueScorer::with_heavy_ratio(0.3);
        let score = scorer.score_series(&traffic(vec![2_000.0; 336]));
        assert!((score.value() - 100.0).abs() < 1e-9, "Score: {}", score.value());
    }

    #[test]
    fn test_monotonic_in_volume() {
        let scorer = TrafficFatigueScorer::default();
        let mut previous = 0.0;
        for per_hour in [0.0, 100.0, 300.0, 600.0, 900.0, 1_200.0, 2_000.0] {
            let value = scorer.score_series(&traffic(vec![per_hour; 336])).value();
            assert!(value >= previous, "{value} < {previous} at {per_hour} veh/h");
            previous = value;
        }
    }

    #[test]
    fn test_monotonic_in_heavy_ratio() {
        let series = traffic(vec![450.0; 336]);
        let mut previous = 0.0;
        for ratio in [0.0, 0.05, 0.1, 0.15, 0.2, 0.3, 0.5, 1.0] {
            let value = TrafficFatigueScorer::with_heavy_ratio(ratio).score_series(&series).value();
            assert!(value >= previous, "{value} < {previous} at ratio {ratio}");
            previous = value;
        }
    }
}
