//! Thermal stress: freeze/thaw exposure over the temperature forecast

use serde::Serialize;
use tracing::debug;

use super::SubScorer;
use crate::config::ThermalConfig;
use crate::types::{ScoreCategory, ScoringError, SignalSeries, SubScore};

/// Which of the three independent thermal triggers fired for a forecast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThermalTriggers {
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    /// Samples strictly below the freeze threshold
    pub freeze_hours: usize,
    /// Minimum below the near-freeze limit
    pub near_freeze: bool,
    /// Freeze hours reached the sustained-freeze minimum
    pub sustained_freeze: bool,
    /// Max - min reached the cycling range
    pub large_cycling: bool,
}

impl ThermalTriggers {
    pub fn range_c(&self) -> f64 {
        self.max_temp_c - self.min_temp_c
    }
}

/// Additive freeze/thaw heuristic, capped at 100.
///
/// Scoring (defaults):
/// - +40 if the forecast minimum is below 1 °C
/// - +40 if at least 12 samples are strictly below the freeze threshold
/// - +20 if max - min is at least 10 °C
///
/// The near-freeze limit and the freeze threshold are separate parameters;
/// only the latter is exposed to operators as a slider.
#[derive(Debug, Clone)]
pub struct ThermalStressScorer {
    freeze_threshold_c: f64,
    near_freeze_c: f64,
    near_freeze_points: f64,
    freeze_hours_min: usize,
    freeze_hours_points: f64,
    cycling_range_c: f64,
    cycling_points: f64,
}

impl Default for ThermalStressScorer {
    fn default() -> Self {
        Self::from_config(&ThermalConfig::default())
    }
}

impl ThermalStressScorer {
    pub fn from_config(config: &ThermalConfig) -> Self {
        Self {
            freeze_threshold_c: config.freeze_threshold_c,
            near_freeze_c: config.near_freeze_c,
            near_freeze_points: config.near_freeze_points,
            freeze_hours_min: config.freeze_hours_min,
            freeze_hours_points: config.freeze_hours_points,
            cycling_range_c: config.cycling_range_c,
            cycling_points: config.cycling_points,
        }
    }

    /// Default calibration with a custom freeze threshold.
    pub fn with_freeze_threshold(freeze_threshold_c: f64) -> Self {
        Self {
            freeze_threshold_c,
            ..Self::default()
        }
    }

    pub fn evaluate(&self, temperatures: &SignalSeries) -> Result<ThermalTriggers, ScoringError> {
        let (Some(min_temp_c), Some(max_temp_c)) = (temperatures.min(), temperatures.max()) else {
            return Err(ScoringError::EmptySeries {
                kind: temperatures.kind(),
                context: "thermal extremes",
            });
        };

        let freeze_hours = temperatures
            .samples()
            .iter()
            .filter(|&&t| t < self.freeze_threshold_c)
            .count();

        Ok(ThermalTriggers {
            min_temp_c,
            max_temp_c,
            freeze_hours,
            near_freeze: min_temp_c < self.near_freeze_c,
            sustained_freeze: freeze_hours >= self.freeze_hours_min,
            large_cycling: max_temp_c - min_temp_c >= self.cycling_range_c,
        })
    }

    pub fn points(&self, triggers: &ThermalTriggers) -> f64 {
        let mut stress = 0.0;
        if triggers.near_freeze {
            stress += self.near_freeze_points;
        }
        if triggers.sustained_freeze {
            stress += self.freeze_hours_points;
        }
        if triggers.large_cycling {
            stress += self.cycling_points;
        }
        stress
    }

    pub fn score_series(&self, temperatures: &SignalSeries) -> Result<SubScore, ScoringError> {
        let triggers = self.evaluate(temperatures)?;
        let value = self.points(&triggers).min(100.0);

        debug!(
            min_temp_c = triggers.min_temp_c,
            range_c = triggers.range_c(),
            freeze_hours = triggers.freeze_hours,
            near_freeze = triggers.near_freeze,
            sustained_freeze = triggers.sustained_freeze,
            large_cycling = triggers.large_cycling,
            score = value,
            "Thermal stress scored"
        );

        Ok(SubScore::new(ScoreCategory::Thermal, value))
    }
}

impl SubScorer for ThermalStressScorer {
    fn category(&self) -> ScoreCategory {
        ScoreCategory::Thermal
    }

    fn score(&self, series: &SignalSeries) -> Result<SubScore, ScoringError> {
        self.score_series(series)
    }
}
