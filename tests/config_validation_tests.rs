//! Config Validation Tests
//!
//! Typo detection, plausibility warnings, and hard validation errors of the
//! scoring configuration, exercised through the public config API.

use jointwatch::config::validation::{
    known_config_keys, suggest_correction, validate_ranges, validate_unknown_keys,
};
use jointwatch::config::{ConfigError, ScoringConfig};
use jointwatch::ScoringError;

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_traffic_section_warns_with_suggestion() {
    let toml_str = r#"
[traffic]
heavy_vehicle_ration = 0.2
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("heavy_vehicle_ration"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("traffic.heavy_vehicle_ratio")
    );
}

#[test]
fn typo_in_asset_section_warns() {
    let toml_str = r#"
[asset]
naem = "Roertunnel"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].suggestion.as_deref(), Some("asset.name"));
    assert!(warnings[0].to_string().contains("did you mean 'asset.name'?"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[asset]
name = "Gotthard North"
component = "Expansion Joint"

[traffic]
heavy_vehicle_ratio = 0.2

[thermal]
freeze_threshold_c = -2.0

[weights]
traffic = 0.5
thermal = 0.3
noise = 0.2
"#;
    assert!(validate_unknown_keys(toml_str).is_empty());
}

#[test]
fn unrelated_key_has_no_suggestion() {
    let warnings = validate_unknown_keys("completely_unrelated_setting = 1\n");
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].suggestion.is_none());
}

#[test]
fn default_config_keys_are_all_known() {
    let toml_str = ScoringConfig::default().to_toml().expect("serialize defaults");
    assert!(
        validate_unknown_keys(&toml_str).is_empty(),
        "defaults produced unknown keys"
    );
}

#[test]
fn suggestion_prefers_closest_key() {
    let known = known_config_keys();
    assert_eq!(
        suggest_correction("noise.split_indx", &known).as_deref(),
        Some("noise.split_index")
    );
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn defaults_have_no_range_findings() {
    let (errors, warnings) = validate_ranges(&ScoringConfig::default());
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn unusual_heavy_ratio_warns_but_loads() {
    let config = ScoringConfig::from_toml_str("[traffic]\nheavy_vehicle_ratio = 0.5\n")
        .expect("ratio 0.5 is legal");
    let (_, warnings) = validate_ranges(&config);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field, "traffic.heavy_vehicle_ratio");
}

#[test]
fn weights_not_summing_to_one_rejected() {
    let err = ScoringConfig::from_toml_str(
        "[weights]\ntraffic = 0.5\nthermal = 0.5\nnoise = 0.5\n",
    )
    .unwrap_err();
    match err {
        ConfigError::Invalid(ScoringError::InvalidConfiguration(errors)) => {
            assert!(errors.iter().any(|e| e.contains("sum to 1.0")), "{errors:?}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn inverted_status_thresholds_rejected() {
    let err = ScoringConfig::from_toml_str("[status]\nhealthy_min = 40.0\nwarning_min = 60.0\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
}

#[test]
fn freeze_hours_longer_than_forecast_rejected() {
    let err = ScoringConfig::from_toml_str("[thermal]\nfreeze_hours_min = 100\n").unwrap_err();
    assert!(err.to_string().contains("freeze_hours_min"), "got {err}");
}

#[test]
fn split_index_outside_window_rejected() {
    let err = ScoringConfig::from_toml_str("[noise]\nsplit_index = 336\n").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)), "got {err}");
}

#[test]
fn malformed_toml_is_parse_error() {
    let err = ScoringConfig::from_toml_str("[traffic\nheavy_vehicle_ratio = ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(..)), "got {err}");
}

#[test]
fn config_file_round_trip() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jointwatch.toml");

    let mut config = ScoringConfig::default();
    config.asset.name = "Test Tunnel".to_string();
    config.thermal.freeze_threshold_c = -2.0;
    config.save_to_file(&path).expect("save");

    let loaded = ScoringConfig::load_from_file(&path).expect("load");
    assert_eq!(loaded, config);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = ScoringConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(..)), "got {err}");
}

#[test]
fn invalid_config_file_is_not_replaced_by_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("jointwatch.toml");
    std::fs::write(&path, "[weights]\nnoise = 0.9\n").expect("write");

    let from_env = ScoringConfig::load_with(Some(&path), &dir.path().join("absent.toml"));
    assert!(
        matches!(from_env, Err(ConfigError::Invalid(ScoringError::InvalidConfiguration(_)))),
        "got {from_env:?}"
    );

    let from_local = ScoringConfig::load_with(None, &path);
    assert!(matches!(from_local, Err(ConfigError::Invalid(_))), "got {from_local:?}");
}
