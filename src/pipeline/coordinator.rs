//! Scoring pipeline: validate inputs, score, combine, assemble the result

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::config::ScoringConfig;
use crate::scoring::{
    HealthIndexCalculator, NoiseAnomalyScorer, SplitPoint, SubScorer, ThermalStressScorer,
    TrafficFatigueScorer, TrendAnalyzer,
};
use crate::types::{HealthAssessmentResult, ScoringError, SignalKind, SignalSeries, SubScore};

/// Runs a complete health assessment for one set of input series.
///
/// Built once from a validated configuration and reusable for any number of
/// runs. Holds no mutable state, so a single pipeline can be shared across
/// threads.
#[derive(Debug)]
pub struct ScoringPipeline {
    config: ScoringConfig,
    traffic: Box<dyn SubScorer>,
    thermal: Box<dyn SubScorer>,
    noise: Box<dyn SubScorer>,
    noise_trend: TrendAnalyzer,
    index: HealthIndexCalculator,
}

impl ScoringPipeline {
    /// Validate `config` and calibrate the scorers from it. Plausibility
    /// warnings are logged here, once per pipeline.
    pub fn new(config: ScoringConfig) -> Result<Self, ScoringError> {
        for w in config.validate()? {
            warn!("{}", w);
        }
        Ok(Self {
            traffic: Box::new(TrafficFatigueScorer::from_config(&config.traffic)),
            thermal: Box::new(ThermalStressScorer::from_config(&config.thermal)),
            noise: Box::new(NoiseAnomalyScorer::from_config(&config.noise)),
            noise_trend: TrendAnalyzer::new(SplitPoint::At(config.noise.split_index)),
            index: HealthIndexCalculator::from_config(&config),
            config,
        })
    }

    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score the three input series.
    ///
    /// Series are validated traffic, then temperature, then noise, and the
    /// first failure is returned. `assessed_at` is stamped on the result as
    /// given; the pipeline never reads the clock, so identical arguments
    /// always produce identical results.
    pub fn run(
        &self,
        traffic: &[f64],
        temperature: &[f64],
        noise: &[f64],
        assessed_at: DateTime<Utc>,
    ) -> Result<HealthAssessmentResult, ScoringError> {
        let traffic = SignalSeries::new(
            SignalKind::Traffic,
            traffic.to_vec(),
            self.config.traffic.expected_samples,
        )?;
        let temperature = SignalSeries::new(
            SignalKind::Temperature,
            temperature.to_vec(),
            self.config.thermal.expected_samples,
        )?;
        let noise = SignalSeries::new(
            SignalKind::Noise,
            noise.to_vec(),
            self.config.noise.expected_samples,
        )?;
        debug!("Input series validated");

        let (traffic_score, (thermal_score, (noise_score, noise_trend))) = rayon::join(
            || score_with(self.traffic.as_ref(), &traffic),
            || {
                rayon::join(
                    || score_with(self.thermal.as_ref(), &temperature),
                    || {
                        rayon::join(
                            || score_with(self.noise.as_ref(), &noise),
                            || self.noise_trend.analyze(&noise),
                        )
                    },
                )
            },
        );
        let traffic_score = traffic_score?;
        let thermal_score = thermal_score?;
        let noise_score = noise_score?;
        let noise_trend = noise_trend?;

        let assessment = self.index.compute(traffic_score, thermal_score, noise_score);

        info!(
            asset = %self.config.asset.name,
            health_index = assessment.index,
            status = %assessment.status,
            traffic = traffic_score.value(),
            thermal = thermal_score.value(),
            noise = noise_score.value(),
            noise_trend_db = noise_trend.delta,
            "Health assessment complete"
        );

        Ok(HealthAssessmentResult::new(
            assessment.index,
            assessment.status,
            traffic_score,
            thermal_score,
            noise_score,
            noise_trend,
            assessed_at,
        ))
    }
}

fn score_with(scorer: &dyn SubScorer, series: &SignalSeries) -> Result<SubScore, ScoringError> {
    let score = scorer.score(series)?;
    debug!(scorer = %scorer.category(), series = %series.kind(), value = score.value(), "Sub-score computed");
    Ok(score)
}

/// One-shot assessment: validate `config`, build a pipeline, run it once.
pub fn run_assessment(
    config: &ScoringConfig,
    traffic: &[f64],
    temperature: &[f64],
    noise: &[f64],
    assessed_at: DateTime<Utc>,
) -> Result<HealthAssessmentResult, ScoringError> {
    ScoringPipeline::new(config.clone())?.run(traffic, temperature, noise, assessed_at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HealthStatus;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 15, 6, 0, 0).single().expect("valid timestamp")
    }

    fn quiet_inputs() -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        (vec![0.0; 336], vec![8.0; 72], vec![75.0; 336])
    }

    #[test]
    fn test_quiet_joint_is_healthy() {
        let (traffic, temperature, noise) = quiet_inputs();
        let pipeline = ScoringPipeline::new(ScoringConfig::default()).expect("default config");
        let result = pipeline.run(&traffic, &temperature, &noise, at()).expect("run");
        // Only the stable noise tier contributes: 100 - 0.2 * 10
        assert_eq!(result.health_index(), 98.0);
        assert_eq!(result.status(), HealthStatus::Healthy);
        assert_eq!(result.noise_trend_delta(), 0.0);
        assert_eq!(result.assessed_at(), at());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = ScoringConfig::default();
        config.weights.thermal = 0.9;
        let err = ScoringPipeline::new(config).unwrap_err();
        assert!(matches!(err, ScoringError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_traffic_validated_first() {
        let pipeline = ScoringPipeline::new(ScoringConfig::default()).expect("default config");
        let err = pipeline
            .run(&[1.0; 10], &[1.0; 10], &[1.0; 10], at())
            .unwrap_err();
        assert!(
            matches!(err, ScoringError::InvalidSeriesLength { kind: SignalKind::Traffic, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_temperature_validated_before_noise() {
        let pipeline = ScoringPipeline::new(ScoringConfig::default()).expect("default config");
        let err = pipeline
            .run(&[1.0; 336], &[1.0; 10], &[1.0; 10], at())
            .unwrap_err();
        assert!(
            matches!(err, ScoringError::InvalidSeriesLength { kind: SignalKind::Temperature, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_custom_lengths_follow_config() {
        let mut config = ScoringConfig::default();
        config.traffic.expected_samples = 48;
        config.noise.expected_samples = 48;
        config.noise.split_index = 24;
        config.thermal.expected_samples = 24;
        let mut noise = vec![80.0; 24];
        noise.extend([81.5; 24]);
        let result = run_assessment(&config, &[100.0; 48], &[5.0; 24], &noise, at()).expect("run");
        assert_eq!(result.noise().value(), 40.0);
        assert_eq!(result.noise_trend_delta(), 1.5);
    }

    #[test]
    fn test_series_checked_against_configured_lengths() {
        let mut config = ScoringConfig::default();
        config.traffic.expected_samples = 48;
        let pipeline = ScoringPipeline::new(config).expect("config");
        let err = pipeline
            .run(&[100.0; 336], &[5.0; 72], &[80.0; 336], at())
            .unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidSeriesLength {
                kind: SignalKind::Traffic,
                expected: 48,
                actual: 336,
            }
        );
    }

    #[test]
    fn test_pipeline_shared_across_threads() {
        let pipeline = ScoringPipeline::new(ScoringConfig::default()).expect("default config");
        let (traffic, temperature, noise) = quiet_inputs();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| pipeline.run(&traffic, &temperature, &noise, at())))
                .collect();
            for handle in handles {
                let result = handle.join().expect("thread").expect("run");
                assert_eq!(result.health_index(), 98.0);
            }
        });
    }
}
