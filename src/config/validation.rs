//! Config validation: unknown-key detection with Levenshtein suggestions
//! and plausibility range checks.
//!
//! Unknown keys are found by walking the raw `toml::Value` tree before serde
//! deserialization, so a typo produces a warning instead of being silently
//! replaced by its default.

use std::collections::HashSet;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `ScoringConfig`.
///
/// Must be kept in step with the structs in `scoring_config.rs`.
pub fn known_config_keys() -> HashSet<&'static str> {
    let keys: &[&str] = &[
        // [asset]
        "asset",
        "asset.name",
        "asset.component",
        // [traffic]
        "traffic",
        "traffic.heavy_vehicle_ratio",
        "traffic.total_saturation_vehicles",
        "traffic.heavy_saturation_vehicles",
        "traffic.total_volume_weight",
        "traffic.heavy_volume_weight",
        "traffic.expected_samples",
        // [thermal]
        "thermal",
        "thermal.freeze_threshold_c",
        "thermal.near_freeze_c",
        "thermal.near_freeze_points",
        "thermal.freeze_hours_min",
        "thermal.freeze_hours_points",
        "thermal.cycling_range_c",
        "thermal.cycling_points",
        "thermal.expected_samples",
        // [noise]
        "noise",
        "noise.expected_samples",
        "noise.split_index",
        "noise.minor_drift_db",
        "noise.major_drift_db",
        "noise.stable_score",
        "noise.minor_score",
        "noise.major_score",
        // [weights]
        "weights",
        "weights.traffic",
        "weights.thermal",
        "weights.noise",
        // [status]
        "status",
        "status.healthy_min",
        "status.warning_min",
    ];
    keys.iter().copied().collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Recursively collect all dotted key paths of a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let mut keys = Vec::new();
    if let Some(table) = value.as_table() {
        for (k, v) in table {
            let path = if prefix.is_empty() {
                k.clone()
            } else {
                format!("{prefix}.{k}")
            };
            keys.push(path.clone());
            if v.is_table() {
                keys.extend(walk_toml_keys(v, &path));
            }
        }
    }
    keys
}

// ============================================================================
// Levenshtein Distance
// ============================================================================

fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();
    if a.is_empty() {
        return b_len;
    }
    if b_len == 0 {
        return a.chars().count();
    }

    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr = vec![0; b_len + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Suggest the closest known key within edit distance 3.
///
/// Ties resolve to the alphabetically first key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (k, levenshtein(unknown, k)))
        .filter(|&(_, dist)| dist <= 3)
        .min_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)))
        .map(|(k, _)| k.to_string())
}

// ============================================================================
// Unknown Key Validation (entry point)
// ============================================================================

/// Warn about config keys the engine does not recognise.
///
/// Never fails: a syntax error is left for serde to report.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let value: toml::Value = match raw_toml.parse() {
        Ok(v) => v,
        Err(_) => return Vec::new(),
    };

    let known = known_config_keys();
    let mut found = walk_toml_keys(&value, "");
    found.sort();

    found
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Plausibility Range Validation
// ============================================================================

/// Check values that are legal but outside the range the heuristics were
/// tuned for.
///
/// Returns (errors, warnings). Errors are impossible values; warnings are
/// logged and do not block a run.
pub fn validate_ranges(config: &super::ScoringConfig) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let th = &config.thermal;
    if th.freeze_hours_min > th.expected_samples {
        errors.push(format!(
            "thermal.freeze_hours_min ({}) exceeds the forecast length ({}), trigger can never fire",
            th.freeze_hours_min, th.expected_samples
        ));
    }

    // Operator slider range: 5-30 %
    let ratio = config.traffic.heavy_vehicle_ratio;
    if (0.0..=1.0).contains(&ratio) && !(0.05..=0.30).contains(&ratio) {
        warnings.push(ValidationWarning {
            field: "traffic.heavy_vehicle_ratio".to_string(),
            message: format!(
                "heavy_vehicle_ratio = {ratio:.2} is outside the typical range (0.05-0.30)"
            ),
            suggestion: None,
        });
    }

    // Operator slider range: -10..5 °C
    if !(-10.0..=5.0).contains(&th.freeze_threshold_c) {
        warnings.push(ValidationWarning {
            field: "thermal.freeze_threshold_c".to_string(),
            message: format!(
                "freeze_threshold_c = {:.1} is outside the typical range (-10 to 5 °C)",
                th.freeze_threshold_c
            ),
            suggestion: None,
        });
    }

    let n = &config.noise;
    if n.stable_score > n.minor_score || n.minor_score > n.major_score {
        warnings.push(ValidationWarning {
            field: "noise".to_string(),
            message: format!(
                "noise tier scores are not ascending ({} / {} / {}), larger drift will score lower",
                n.stable_score, n.minor_score, n.major_score
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
