//! Human-readable and JSON renderings of an assessment
//!
//! Pure string builders. Writing the output anywhere is left to the caller.

use serde::Serialize;

use crate::config::AssetInfo;
use crate::types::{HealthAssessmentResult, SignalKind};

/// Plain-text maintenance report.
///
/// ```text
/// Roertunnel Asphalt Joint Health Report
/// Generated: 2025-01-15 06:00
///
/// Health Index: 26.9/100
/// Status: Critical
///
/// Traffic fatigue score: 42.9
/// Thermal stress score: 100.0
/// Noise anomaly score: 80.0
/// Noise trend: +3.5 dB
///
/// Maintenance advice:
/// Preventive maintenance recommended within short term.
/// ```
pub fn render_text(result: &HealthAssessmentResult, asset: &AssetInfo) -> String {
    format!(
        "{name} {component} Health Report\n\
         Generated: {generated}\n\
         \n\
         Health Index: {index:.1}/100\n\
         Status: {status}\n\
         \n\
         Traffic fatigue score: {traffic:.1}\n\
         Thermal stress score: {thermal:.1}\n\
         Noise anomaly score: {noise:.1}\n\
         Noise trend: {trend:+.1} {trend_unit}\n\
         \n\
         Maintenance advice:\n\
         {advice}\n",
        name = asset.name,
        component = asset.component,
        generated = result.assessed_at().format("%Y-%m-%d %H:%M"),
        index = result.health_index(),
        status = result.status(),
        traffic = result.traffic().value(),
        thermal = result.thermal().value(),
        noise = result.noise().value(),
        trend = result.noise_trend_delta(),
        trend_unit = SignalKind::Noise.unit(),
        advice = result.advice(),
    )
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    asset: &'a AssetInfo,
    assessment: &'a HealthAssessmentResult,
}

/// Pretty-printed JSON with the asset identification and the full result.
pub fn render_json(
    result: &HealthAssessmentResult,
    asset: &AssetInfo,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ReportDocument {
        asset,
        assessment: result,
    })
}
