//! Scoring Configuration - every calibration constant as an operator-tunable TOML value
//!
//! Each struct implements `Default` with values from `defaults`, so an empty or
//! missing config file reproduces the reference scoring behaviour exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::defaults;
use super::validation::ValidationWarning;
use crate::types::ScoringError;

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "JOINTWATCH_CONFIG";

/// Config file looked up in the working directory when the env var is unset.
pub const LOCAL_CONFIG_FILE: &str = "jointwatch.toml";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for one monitored asset.
///
/// Load with `ScoringConfig::load()` which searches:
/// 1. `$JOINTWATCH_CONFIG`
/// 2. `./jointwatch.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Asset identification for reports
    #[serde(default)]
    pub asset: AssetInfo,

    /// Traffic fatigue calibration
    #[serde(default)]
    pub traffic: TrafficConfig,

    /// Thermal stress triggers
    #[serde(default)]
    pub thermal: ThermalConfig,

    /// Noise anomaly tiers
    #[serde(default)]
    pub noise: NoiseConfig,

    /// Composite index weights
    #[serde(default)]
    pub weights: WeightsConfig,

    /// Status classification breakpoints
    #[serde(default)]
    pub status: StatusThresholds,
}

impl ScoringConfig {
    /// Load configuration using the standard search order.
    ///
    /// Built-in defaults are used only when no config file is found. A file
    /// that exists but fails to read, parse, or validate is returned as an
    /// error.
    pub fn load() -> Result<Self, ConfigError> {
        let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::load_with(env_path.as_deref(), Path::new(LOCAL_CONFIG_FILE))
    }

    /// `load` with explicit search paths. `explicit` (the `$JOINTWATCH_CONFIG`
    /// value) must point at a readable file when given.
    pub fn load_with(explicit: Option<&Path>, local: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            let config = Self::load_from_file(path)?;
            info!(path = %path.display(), asset = %config.asset.name, "Loaded scoring config from {}", CONFIG_ENV_VAR);
            return Ok(config);
        }

        if local.exists() {
            let config = Self::load_from_file(local)?;
            info!(path = %local.display(), asset = %config.asset.name, "Loaded scoring config");
            return Ok(config);
        }

        info!("No {} found, using built-in defaults", LOCAL_CONFIG_FILE);
        Ok(Self::default())
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate TOML text. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::new(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Scoring config saved");
        Ok(())
    }

    /// Check every rule and report all violations together.
    ///
    /// Rules:
    /// - All numeric values must be finite
    /// - Index weights non-negative and summing to 1.0 (within 1e-6)
    /// - Status thresholds inside [0, 100] and strictly ascending
    /// - Heavy-vehicle ratio inside [0, 1]; saturation volumes > 0
    /// - Noise drift tiers strictly ascending, tier scores inside [0, 100]
    /// - Noise split index strictly inside the noise window
    /// - Expected sample counts > 0
    ///
    /// Plausibility warnings are returned on success and not logged here; the
    /// caller decides where they are reported.
    pub fn validate(&self) -> Result<Vec<ValidationWarning>, ScoringError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, value) in self.numeric_fields() {
            if !value.is_finite() {
                errors.push(format!("{name} must be a finite number (got {value})"));
            }
        }
        if !errors.is_empty() {
            return Err(ScoringError::InvalidConfiguration(errors));
        }

        // Composite weights
        let w = &self.weights;
        for (name, value) in [
            ("weights.traffic", w.traffic),
            ("weights.thermal", w.thermal),
            ("weights.noise", w.noise),
        ] {
            if value < 0.0 {
                errors.push(format!("{name} ({value}) must be >= 0"));
            }
        }
        let weight_sum = w.sum();
        if (weight_sum - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            errors.push(format!("weights must sum to 1.0, got {weight_sum}"));
        }

        // Status thresholds
        let s = &self.status;
        Self::check_ascending(s.warning_min, s.healthy_min, "status.warning_min", "status.healthy_min", &mut errors);
        for (name, value) in [("status.warning_min", s.warning_min), ("status.healthy_min", s.healthy_min)] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("{name} ({value}) must be within [0, 100]"));
            }
        }

        // Traffic
        let t = &self.traffic;
        if !(0.0..=1.0).contains(&t.heavy_vehicle_ratio) {
            errors.push(format!(
                "traffic.heavy_vehicle_ratio ({}) must be within [0, 1]",
                t.heavy_vehicle_ratio
            ));
        }
        if t.total_saturation_vehicles <= 0.0 {
            errors.push("traffic.total_saturation_vehicles must be > 0".to_string());
        }
        if t.heavy_saturation_vehicles <= 0.0 {
            errors.push("traffic.heavy_saturation_vehicles must be > 0".to_string());
        }
        if t.total_volume_weight < 0.0 || t.heavy_volume_weight < 0.0 {
            errors.push("traffic volume weights must be >= 0".to_string());
        }
        if t.expected_samples == 0 {
            errors.push("traffic.expected_samples must be > 0".to_string());
        }

        // Thermal
        let th = &self.thermal;
        if th.expected_samples == 0 {
            errors.push("thermal.expected_samples must be > 0".to_string());
        }
        if th.cycling_range_c < 0.0 {
            errors.push("thermal.cycling_range_c must be >= 0".to_string());
        }

        // Noise
        let n = &self.noise;
        Self::check_ascending(n.minor_drift_db, n.major_drift_db, "noise.minor_drift_db", "noise.major_drift_db", &mut errors);
        for (name, value) in [
            ("noise.stable_score", n.stable_score),
            ("noise.minor_score", n.minor_score),
            ("noise.major_score", n.major_score),
        ] {
            if !(0.0..=100.0).contains(&value) {
                errors.push(format!("{name} ({value}) must be within [0, 100]"));
            }
        }
        if n.expected_samples == 0 {
            errors.push("noise.expected_samples must be > 0".to_string());
        } else if n.split_index == 0 || n.split_index >= n.expected_samples {
            errors.push(format!(
                "noise.split_index ({}) must leave samples on both sides of a {}-sample window",
                n.split_index, n.expected_samples
            ));
        }

        let (range_errors, range_warnings) = super::validation::validate_ranges(self);
        errors.extend(range_errors);

        if errors.is_empty() {
            Ok(range_warnings)
        } else {
            Err(ScoringError::InvalidConfiguration(errors))
        }
    }

    fn check_ascending(lower: f64, upper: f64, lower_name: &str, upper_name: &str, errors: &mut Vec<String>) {
        if lower >= upper {
            errors.push(format!(
                "{lower_name} ({lower}) must be strictly less than {upper_name} ({upper})"
            ));
        }
    }

    /// Every floating-point field with its dotted key, for finiteness checks.
    fn numeric_fields(&self) -> [(&'static str, f64); 21] {
        [
            ("traffic.heavy_vehicle_ratio", self.traffic.heavy_vehicle_ratio),
            ("traffic.total_saturation_vehicles", self.traffic.total_saturation_vehicles),
            ("traffic.heavy_saturation_vehicles", self.traffic.heavy_saturation_vehicles),
            ("traffic.total_volume_weight", self.traffic.total_volume_weight),
            ("traffic.heavy_volume_weight", self.traffic.heavy_volume_weight),
            ("thermal.freeze_threshold_c", self.thermal.freeze_threshold_c),
            ("thermal.near_freeze_c", self.thermal.near_freeze_c),
            ("thermal.near_freeze_points", self.thermal.near_freeze_points),
            ("thermal.freeze_hours_points", self.thermal.freeze_hours_points),
            ("thermal.cycling_range_c", self.thermal.cycling_range_c),
            ("thermal.cycling_points", self.thermal.cycling_points),
            ("noise.minor_drift_db", self.noise.minor_drift_db),
            ("noise.major_drift_db", self.noise.major_drift_db),
            ("noise.stable_score", self.noise.stable_score),
            ("noise.minor_score", self.noise.minor_score),
            ("noise.major_score", self.noise.major_score),
            ("weights.traffic", self.weights.traffic),
            ("weights.thermal", self.weights.thermal),
            ("weights.noise", self.weights.noise),
            ("status.healthy_min", self.status.healthy_min),
            ("status.warning_min", self.status.warning_min),
        ]
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(PathBuf, std::io::Error),
    Parse(PathBuf, toml::de::Error),
    Serialize(toml::ser::Error),
    Invalid(ScoringError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, e) => write!(f, "Config I/O error ({}): {}", path.display(), e),
            ConfigError::Parse(path, e) => {
                write!(f, "Config parse error ({}): {}", path.display(), e)
            }
            ConfigError::Serialize(e) => write!(f, "Config serialization error: {}", e),
            ConfigError::Invalid(ScoringError::InvalidConfiguration(errors)) => {
                writeln!(f, "Config validation failed:")?;
                for e in errors {
                    writeln!(f, "  - {}", e)?;
                }
                Ok(())
            }
            ConfigError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ScoringError> for ConfigError {
    fn from(e: ScoringError) -> Self {
        ConfigError::Invalid(e)
    }
}

// ============================================================================
// Asset Info
// ============================================================================

/// Identification metadata. Not used for scoring, only for reports and logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Asset name, e.g. the tunnel
    #[serde(default = "default_asset_name")]
    pub name: String,

    /// Monitored component within the asset
    #[serde(default = "default_component")]
    pub component: String,
}

fn default_asset_name() -> String {
    "Roertunnel".to_string()
}
fn default_component() -> String {
    "Asphalt Joint".to_string()
}

impl Default for AssetInfo {
    fn default() -> Self {
        Self {
            name: default_asset_name(),
            component: default_component(),
        }
    }
}

// ============================================================================
// Traffic
// ============================================================================

/// Traffic fatigue calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficConfig {
    /// Fraction of total traffic that is heavy vehicles, in [0, 1].
    #[serde(default = "default_heavy_ratio")]
    pub heavy_vehicle_ratio: f64,

    /// Window total at which the total-volume term saturates.
    #[serde(default = "default_total_saturation")]
    pub total_saturation_vehicles: f64,

    /// Window heavy-vehicle total at which the heavy term saturates.
    #[serde(default = "default_heavy_saturation")]
    pub heavy_saturation_vehicles: f64,

    #[serde(default = "default_total_volume_weight")]
    pub total_volume_weight: f64,

    #[serde(default = "default_heavy_volume_weight")]
    pub heavy_volume_weight: f64,

    /// Samples required in the traffic series.
    #[serde(default = "default_observation_samples")]
    pub expected_samples: usize,
}

fn default_heavy_ratio() -> f64 { defaults::HEAVY_VEHICLE_RATIO }
fn default_total_saturation() -> f64 { defaults::TOTAL_SATURATION_VEHICLES }
fn default_heavy_saturation() -> f64 { defaults::HEAVY_SATURATION_VEHICLES }
fn default_total_volume_weight() -> f64 { defaults::TOTAL_VOLUME_WEIGHT }
fn default_heavy_volume_weight() -> f64 { defaults::HEAVY_VOLUME_WEIGHT }
fn default_observation_samples() -> usize { defaults::OBSERVATION_WINDOW_SAMPLES }

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            heavy_vehicle_ratio: default_heavy_ratio(),
            total_saturation_vehicles: default_total_saturation(),
            heavy_saturation_vehicles: default_heavy_saturation(),
            total_volume_weight: default_total_volume_weight(),
            heavy_volume_weight: default_heavy_volume_weight(),
            expected_samples: default_observation_samples(),
        }
    }
}

// ============================================================================
// Thermal
// ============================================================================

/// Freeze/thaw trigger thresholds and their point contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalConfig {
    /// Samples strictly below this count as freeze hours (°C).
    #[serde(default = "default_freeze_threshold")]
    pub freeze_threshold_c: f64,

    /// Forecast minimum below this triggers near-freeze points (°C).
    #[serde(default = "default_near_freeze")]
    pub near_freeze_c: f64,

    #[serde(default = "default_near_freeze_points")]
    pub near_freeze_points: f64,

    /// Freeze hours needed to trigger the sustained-freeze points.
    #[serde(default = "default_freeze_hours_min")]
    pub freeze_hours_min: usize,

    #[serde(default = "default_freeze_hours_points")]
    pub freeze_hours_points: f64,

    /// Max - min range that triggers the cycling points (°C).
    #[serde(default = "default_cycling_range")]
    pub cycling_range_c: f64,

    #[serde(default = "default_cycling_points")]
    pub cycling_points: f64,

    /// Samples required in the temperature forecast.
    #[serde(default = "default_forecast_samples")]
    pub expected_samples: usize,
}

fn default_freeze_threshold() -> f64 { defaults::FREEZE_THRESHOLD_C }
fn default_near_freeze() -> f64 { defaults::NEAR_FREEZE_C }
fn default_near_freeze_points() -> f64 { defaults::NEAR_FREEZE_POINTS }
fn default_freeze_hours_min() -> usize { defaults::FREEZE_HOURS_MIN }
fn default_freeze_hours_points() -> f64 { defaults::FREEZE_HOURS_POINTS }
fn default_cycling_range() -> f64 { defaults::CYCLING_RANGE_C }
fn default_cycling_points() -> f64 { defaults::CYCLING_POINTS }
fn default_forecast_samples() -> usize { defaults::FORECAST_WINDOW_SAMPLES }

impl Default for ThermalConfig {
    fn default() -> Self {
        Self {
            freeze_threshold_c: default_freeze_threshold(),
            near_freeze_c: default_near_freeze(),
            near_freeze_points: default_near_freeze_points(),
            freeze_hours_min: default_freeze_hours_min(),
            freeze_hours_points: default_freeze_hours_points(),
            cycling_range_c: default_cycling_range(),
            cycling_points: default_cycling_points(),
            expected_samples: default_forecast_samples(),
        }
    }
}

// ============================================================================
// Noise
// ============================================================================

/// Noise drift tiers and the baseline/recent split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    /// Samples required in the noise series.
    #[serde(default = "default_observation_samples")]
    pub expected_samples: usize,

    /// First sample of the recent period; everything before is baseline.
    #[serde(default = "default_split_index")]
    pub split_index: usize,

    #[serde(default = "default_minor_drift")]
    pub minor_drift_db: f64,

    #[serde(default = "default_major_drift")]
    pub major_drift_db: f64,

    #[serde(default = "default_stable_score")]
    pub stable_score: f64,

    #[serde(default = "default_minor_score")]
    pub minor_score: f64,

    #[serde(default = "default_major_score")]
    pub major_score: f64,
}

fn default_split_index() -> usize { defaults::NOISE_BASELINE_SAMPLES }
fn default_minor_drift() -> f64 { defaults::MINOR_DRIFT_DB }
fn default_major_drift() -> f64 { defaults::MAJOR_DRIFT_DB }
fn default_stable_score() -> f64 { defaults::STABLE_NOISE_SCORE }
fn default_minor_score() -> f64 { defaults::MINOR_NOISE_SCORE }
fn default_major_score() -> f64 { defaults::MAJOR_NOISE_SCORE }

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            expected_samples: default_observation_samples(),
            split_index: default_split_index(),
            minor_drift_db: default_minor_drift(),
            major_drift_db: default_major_drift(),
            stable_score: default_stable_score(),
            minor_score: default_minor_score(),
            major_score: default_major_score(),
        }
    }
}

// ============================================================================
// Composite Weights
// ============================================================================

/// Weights of each sub-score in the composite index. Must sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_traffic_weight")]
    pub traffic: f64,

    #[serde(default = "default_thermal_weight")]
    pub thermal: f64,

    #[serde(default = "default_noise_weight")]
    pub noise: f64,
}

fn default_traffic_weight() -> f64 { defaults::TRAFFIC_WEIGHT }
fn default_thermal_weight() -> f64 { defaults::THERMAL_WEIGHT }
fn default_noise_weight() -> f64 { defaults::NOISE_WEIGHT }

impl WeightsConfig {
    pub fn sum(&self) -> f64 {
        self.traffic + self.thermal + self.noise
    }
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            traffic: default_traffic_weight(),
            thermal: default_thermal_weight(),
            noise: default_noise_weight(),
        }
    }
}

// ============================================================================
// Status Thresholds
// ============================================================================

/// Index breakpoints for status classification.
///
/// `index >= healthy_min` is Healthy, `warning_min <= index < healthy_min` is
/// Warning, anything lower is Critical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusThresholds {
    #[serde(default = "default_healthy_min")]
    pub healthy_min: f64,

    #[serde(default = "default_warning_min")]
    pub warning_min: f64,
}

fn default_healthy_min() -> f64 { defaults::HEALTHY_MIN_INDEX }
fn default_warning_min() -> f64 { defaults::WARNING_MIN_INDEX }

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            healthy_min: default_healthy_min(),
            warning_min: default_warning_min(),
        }
    }
}
