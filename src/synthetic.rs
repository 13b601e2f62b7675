//! Seeded synthetic input series
//!
//! Produces plausible traffic, temperature, and noise series for demos and
//! tests. Each family draws from its own `StdRng` derived from the scenario
//! seed, so changing one window length never perturbs the other series.

use std::f64::consts::PI;

use rand::prelude::*;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ScoringConfig;

pub const DEFAULT_SEED: u64 = 42;

/// Hours in one diurnal cycle
const DAY_HOURS: f64 = 24.0;
/// Hour of the traffic trough (early morning)
const TRAFFIC_TROUGH_HOUR: f64 = 3.0;
/// Hour of the daily temperature minimum (around dawn)
const TEMPERATURE_MIN_HOUR: f64 = 5.0;

const TRAFFIC_SEED_OFFSET: u64 = 1;
const TEMPERATURE_SEED_OFFSET: u64 = 2;

#[derive(Debug, Error, PartialEq)]
pub enum SyntheticError {
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSpread { name: &'static str, value: f64 },

    #[error("noise range must satisfy low < high, got [{low}, {high})")]
    InvalidNoiseRange { low: f64, high: f64 },
}

/// Parameters of a synthetic scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticScenario {
    pub seed: u64,
    /// Mean hourly vehicle count over a day
    pub mean_hourly_traffic: f64,
    /// Peak-to-mean swing of the diurnal profile, as a fraction of the mean
    pub diurnal_swing: f64,
    /// Standard deviation of the hourly traffic jitter (vehicles)
    pub traffic_jitter: f64,
    /// Daily mean temperature (°C)
    pub mean_temperature_c: f64,
    /// Half of the daily temperature range (°C)
    pub temperature_amplitude_c: f64,
    /// Standard deviation of the hourly temperature jitter (°C)
    pub temperature_jitter_c: f64,
    pub noise_low_db: f64,
    pub noise_high_db: f64,
}

impl Default for SyntheticScenario {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            mean_hourly_traffic: 450.0,
            diurnal_swing: 0.6,
            traffic_jitter: 25.0,
            mean_temperature_c: 2.0,
            temperature_amplitude_c: 6.0,
            temperature_jitter_c: 0.5,
            noise_low_db: 70.0,
            noise_high_db: 90.0,
        }
    }
}

/// The three generated series, sized for a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticSeries {
    pub traffic: Vec<f64>,
    pub temperature: Vec<f64>,
    pub noise: Vec<f64>,
}

impl SyntheticScenario {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Generate all three series with the lengths `config` expects.
    pub fn generate(&self, config: &ScoringConfig) -> Result<SyntheticSeries, SyntheticError> {
        Ok(SyntheticSeries {
            traffic: self.traffic(config.traffic.expected_samples)?,
            temperature: self.temperature(config.thermal.expected_samples)?,
            noise: self.noise(config.noise.expected_samples)?,
        })
    }

    /// Hourly vehicle counts with a sinusoidal daily profile, never negative,
    /// rounded to whole vehicles.
    pub fn traffic(&self, hours: usize) -> Result<Vec<f64>, SyntheticError> {
        let jitter = normal("traffic_jitter", self.traffic_jitter)?;
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(TRAFFIC_SEED_OFFSET));

        Ok((0..hours)
            .map(|h| {
                let phase = 2.0 * PI * (h as f64 - TRAFFIC_TROUGH_HOUR) / DAY_HOURS;
                let profile = 1.0 - self.diurnal_swing * phase.cos();
                let count = self.mean_hourly_traffic * profile + jitter.sample(&mut rng);
                count.max(0.0).round()
            })
            .collect())
    }

    /// Hourly air temperature, coldest around dawn and warmest mid-afternoon.
    pub fn temperature(&self, hours: usize) -> Result<Vec<f64>, SyntheticError> {
        let jitter = normal("temperature_jitter_c", self.temperature_jitter_c)?;
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(TEMPERATURE_SEED_OFFSET));

        Ok((0..hours)
            .map(|h| {
                let phase = 2.0 * PI * (h as f64 - TEMPERATURE_MIN_HOUR) / DAY_HOURS;
                let value = self.mean_temperature_c - self.temperature_amplitude_c * phase.cos()
                    + jitter.sample(&mut rng);
                (value * 10.0).round() / 10.0
            })
            .collect())
    }

    /// Noise levels drawn uniformly from `[noise_low_db, noise_high_db)`.
    pub fn noise(&self, samples: usize) -> Result<Vec<f64>, SyntheticError> {
        let (low, high) = (self.noise_low_db, self.noise_high_db);
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(SyntheticError::InvalidNoiseRange { low, high });
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        Ok((0..samples).map(|_| rng.gen_range(low..high)).collect())
    }
}

fn normal(name: &'static str, std_dev: f64) -> Result<Normal<f64>, SyntheticError> {
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(SyntheticError::InvalidSpread { name, value: std_dev });
    }
    Normal::new(0.0, std_dev).map_err(|_| SyntheticError::InvalidSpread { name, value: std_dev })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::ScoringPipeline;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_lengths_follow_config() {
        let config = ScoringConfig::default();
        let series = SyntheticScenario::default().generate(&config).expect("generate");
        assert_eq!(series.traffic.len(), 336);
        assert_eq!(series.temperature.len(), 72);
        assert_eq!(series.noise.len(), 336);
    }

    #[test]
    fn test_same_seed_same_series() {
        let config = ScoringConfig::default();
        let a = SyntheticScenario::with_seed(7).generate(&config).expect("generate");
        let b = SyntheticScenario::with_seed(7).generate(&config).expect("generate");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_different_noise() {
        let a = SyntheticScenario::with_seed(1).noise(336).expect("noise");
        let b = SyntheticScenario::with_seed(2).noise(336).expect("noise");
        assert_ne!(a, b);
    }

    #[test]
    fn test_value_ranges() {
        let series = SyntheticScenario::default()
            .generate(&ScoringConfig::default())
            .expect("generate");
        assert!(series.traffic.iter().all(|v| *v >= 0.0 && v.fract() == 0.0));
        assert!(series.noise.iter().all(|v| (70.0..90.0).contains(v)));
        assert!(series.temperature.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_traffic_has_daily_shape() {
        let scenario = SyntheticScenario {
            traffic_jitter: 0.0,
            ..SyntheticScenario::default()
        };
        let traffic = scenario.traffic(24).expect("traffic");
        // 450 * (1 - 0.6) at the trough, 450 * (1 + 0.6) twelve hours later
        assert_eq!(traffic[3], 180.0);
        assert_eq!(traffic[15], 720.0);
    }

    #[test]
    fn test_temperature_without_jitter() {
        let scenario = SyntheticScenario {
            temperature_jitter_c: 0.0,
            ..SyntheticScenario::default()
        };
        let temperature = scenario.temperature(24).expect("temperature");
        assert_eq!(temperature[5], -4.0);
        assert_eq!(temperature[17], 8.0);
    }

    #[test]
    fn test_invalid_parameters() {
        let scenario = SyntheticScenario {
            traffic_jitter: -1.0,
            ..SyntheticScenario::default()
        };
        assert!(matches!(
            scenario.traffic(10),
            Err(SyntheticError::InvalidSpread { name: "traffic_jitter", .. })
        ));

        let scenario = SyntheticScenario {
            noise_low_db: 90.0,
            noise_high_db: 70.0,
            ..SyntheticScenario::default()
        };
        assert!(matches!(
            scenario.noise(10),
            Err(SyntheticError::InvalidNoiseRange { .. })
        ));
    }

    #[test]
    fn test_generated_series_score_cleanly() {
        let config = ScoringConfig::default();
        let series = SyntheticScenario::default().generate(&config).expect("generate");
        let at = Utc.with_ymd_and_hms(2025, 1, 15, 6, 0, 0).single().expect("timestamp");
        let result = ScoringPipeline::new(config)
            .expect("config")
            .run(&series.traffic, &series.temperature, &series.noise, at)
            .expect("run");
        assert!((0.0..=100.0).contains(&result.health_index()));
    }
}
