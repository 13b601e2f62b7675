//! Signal series: validated, immutable sample vectors for one run

use serde::{Deserialize, Serialize};

use super::ScoringError;

/// The three signal families the engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    /// Total vehicles passing the joint per hour
    Traffic,
    /// Forecast ambient temperature
    Temperature,
    /// Acoustic emission level at the joint
    Noise,
}

impl SignalKind {
    /// Unit of every sample in a series of this kind.
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Traffic => "vehicles/hour",
            Self::Temperature => "°C",
            Self::Noise => "dB",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Traffic => "Traffic",
            Self::Temperature => "Temperature",
            Self::Noise => "Noise",
        }
    }

    /// Whether negative samples are physically meaningful.
    const fn allows_negative(self) -> bool {
        matches!(self, Self::Temperature | Self::Noise)
    }
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An ordered, fixed-length series of samples for a single signal family.
///
/// Construction is the only validation point: once built, a series is known to
/// have the expected length, only finite samples, and no negative vehicle counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSeries {
    kind: SignalKind,
    samples: Vec<f64>,
}

impl SignalSeries {
    /// Validate raw samples against the expected length for their role.
    ///
    /// Fails with `InvalidSeriesLength` when the length differs, or with
    /// `InvalidSampleValue` on the first NaN/Inf sample or negative count.
    pub fn new(
        kind: SignalKind,
        samples: Vec<f64>,
        expected_len: usize,
    ) -> Result<Self, ScoringError> {
        if samples.len() != expected_len {
            return Err(ScoringError::InvalidSeriesLength {
                kind,
                expected: expected_len,
                actual: samples.len(),
            });
        }

        for (index, &value) in samples.iter().enumerate() {
            if !value.is_finite() {
                return Err(ScoringError::InvalidSampleValue {
                    kind,
                    index,
                    value,
                    reason: "sample must be a finite number",
                });
            }
            if value < 0.0 && !kind.allows_negative() {
                return Err(ScoringError::InvalidSampleValue {
                    kind,
                    index,
                    value,
                    reason: "vehicle counts cannot be negative",
                });
            }
        }

        Ok(Self { kind, samples })
    }

    pub const fn kind(&self) -> SignalKind {
        self.kind
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.samples.iter().sum()
    }

    /// Smallest sample, `None` for an empty series.
    pub fn min(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::min)
    }

    /// Largest sample, `None` for an empty series.
    pub fn max(&self) -> Option<f64> {
        self.samples.iter().copied().reduce(f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_expected_length() {
        let series = SignalSeries::new(SignalKind::Noise, vec![80.0; 336], 336)
            .expect("336 samples should be accepted");
        assert_eq!(series.len(), 336);
        assert_eq!(series.kind(), SignalKind::Noise);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = SignalSeries::new(SignalKind::Temperature, vec![5.0; 71], 72).unwrap_err();
        assert_eq!(
            err,
            ScoringError::InvalidSeriesLength {
                kind: SignalKind::Temperature,
                expected: 72,
                actual: 71,
            }
        );
    }

    #[test]
    fn test_negative_temperature_is_valid() {
        let series = SignalSeries::new(SignalKind::Temperature, vec![-12.5, 3.0], 2)
            .expect("sub-zero temperatures are valid");
        assert_eq!(series.min(), Some(-12.5));
        assert_eq!(series.max(), Some(3.0));
    }

    #[test]
    fn test_negative_vehicle_count_rejected() {
        let err = SignalSeries::new(SignalKind::Traffic, vec![100.0, -1.0, 50.0], 3).unwrap_err();
        match err {
            ScoringError::InvalidSampleValue { kind, index, value, .. } => {
                assert_eq!(kind, SignalKind::Traffic);
                assert_eq!(index, 1);
                assert_eq!(value, -1.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let err = SignalSeries::new(SignalKind::Noise, vec![80.0, f64::NAN], 2).unwrap_err();
        assert!(
            matches!(err, ScoringError::InvalidSampleValue { index: 1, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn test_empty_series_has_no_extremes() {
        let series = SignalSeries::new(SignalKind::Traffic, Vec::new(), 0)
            .expect("zero expected samples is a valid length contract");
        assert!(series.is_empty());
        assert_eq!(series.min(), None);
        assert_eq!(series.sum(), 0.0);
    }

    #[test]
    fn test_units() {
        assert_eq!(SignalKind::Traffic.unit(), "vehicles/hour");
        assert_eq!(SignalKind::Temperature.unit(), "°C");
        assert_eq!(SignalKind::Noise.unit(), "dB");
    }
}
