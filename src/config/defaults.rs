//! Built-in calibration constants.
//!
//! These are the values the scoring heuristics were tuned with. Every one of
//! them can be overridden from TOML; the `Default` impls in `scoring_config`
//! read from here.

// ============================================================================
// Series Lengths
// ============================================================================

/// Hourly samples in the 14-day traffic and noise windows.
pub const OBSERVATION_WINDOW_SAMPLES: usize = 14 * 24;

/// Hourly samples in the 3-day temperature forecast.
pub const FORECAST_WINDOW_SAMPLES: usize = 3 * 24;

/// Samples in the noise baseline period (first 7 days, hourly).
pub const NOISE_BASELINE_SAMPLES: usize = 7 * 24;

// ============================================================================
// Traffic Fatigue
// ============================================================================

/// Default heavy-vehicle share of total traffic.
pub const HEAVY_VEHICLE_RATIO: f64 = 0.15;

/// 14-day total vehicle volume at which the total-volume term saturates.
pub const TOTAL_SATURATION_VEHICLES: f64 = 300_000.0;

/// 14-day heavy vehicle volume at which the heavy-volume term saturates.
pub const HEAVY_SATURATION_VEHICLES: f64 = 70_000.0;

/// Share of the fatigue score driven by total volume.
pub const TOTAL_VOLUME_WEIGHT: f64 = 0.6;

/// Share of the fatigue score driven by heavy-vehicle volume.
pub const HEAVY_VOLUME_WEIGHT: f64 = 0.4;

// ============================================================================
// Thermal Stress
// ============================================================================

/// Samples strictly below this temperature count as freeze hours (°C).
pub const FREEZE_THRESHOLD_C: f64 = 0.0;

/// A forecast minimum below this is near-freeze exposure (°C).
///
/// Independent of `FREEZE_THRESHOLD_C`; the two are tuned separately.
pub const NEAR_FREEZE_C: f64 = 1.0;

/// Points added for near-freeze exposure.
pub const NEAR_FREEZE_POINTS: f64 = 40.0;

/// Freeze hours needed for the sustained-freeze trigger (half a day hourly).
pub const FREEZE_HOURS_MIN: usize = 12;

/// Points added for sustained freeze.
pub const FREEZE_HOURS_POINTS: f64 = 40.0;

/// Forecast max - min at or above which thermal cycling is flagged (°C).
pub const CYCLING_RANGE_C: f64 = 10.0;

/// Points added for large thermal cycling.
pub const CYCLING_POINTS: f64 = 20.0;

// ============================================================================
// Noise Anomaly
// ============================================================================

/// Drift (dB) at which the noise tier moves from stable to minor.
pub const MINOR_DRIFT_DB: f64 = 1.0;

/// Drift (dB) at which the noise tier moves from minor to major.
pub const MAJOR_DRIFT_DB: f64 = 3.0;

/// Noise sub-score when drift is below `MINOR_DRIFT_DB`.
pub const STABLE_NOISE_SCORE: f64 = 10.0;

/// Noise sub-score for drift in `[MINOR_DRIFT_DB, MAJOR_DRIFT_DB)`.
pub const MINOR_NOISE_SCORE: f64 = 40.0;

/// Noise sub-score for drift at or above `MAJOR_DRIFT_DB`.
pub const MAJOR_NOISE_SCORE: f64 = 80.0;

// ============================================================================
// Composite Index
// ============================================================================

pub const TRAFFIC_WEIGHT: f64 = 0.4;
pub const THERMAL_WEIGHT: f64 = 0.4;
pub const NOISE_WEIGHT: f64 = 0.2;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Index at or above which the joint is Healthy.
pub const HEALTHY_MIN_INDEX: f64 = 70.0;

/// Index at or above which the joint is at least Warning (below is Critical).
pub const WARNING_MIN_INDEX: f64 = 50.0;
