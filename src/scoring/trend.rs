//! Baseline vs recent mean comparison for any series

use crate::types::{ScoringError, SignalSeries, Trend};

/// Where a series is divided into its baseline and recent parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPoint {
    /// `len / 2`; the recent part gets the extra sample for odd lengths.
    Midpoint,
    /// Explicit index of the first recent sample.
    At(usize),
}

impl SplitPoint {
    pub const fn index_for(self, len: usize) -> usize {
        match self {
            SplitPoint::Midpoint => len / 2,
            SplitPoint::At(index) => index,
        }
    }
}

/// Computes `mean(recent) - mean(baseline)` around a split point.
#[derive(Debug, Clone, Copy)]
pub struct TrendAnalyzer {
    split: SplitPoint,
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::new(SplitPoint::Midpoint)
    }
}

impl TrendAnalyzer {
    pub const fn new(split: SplitPoint) -> Self {
        Self { split }
    }

    pub const fn split(&self) -> SplitPoint {
        self.split
    }

    /// Full baseline/recent breakdown.
    ///
    /// Fails with `EmptySeries` when either side of the split has no samples,
    /// which includes a split index at or past the end of the series.
    pub fn analyze(&self, series: &SignalSeries) -> Result<Trend, ScoringError> {
        let samples = series.samples();
        let split = self.split.index_for(samples.len()).min(samples.len());
        let (baseline, recent) = samples.split_at(split);

        let baseline_mean = mean(baseline).ok_or(ScoringError::EmptySeries {
            kind: series.kind(),
            context: "trend baseline period",
        })?;
        let recent_mean = mean(recent).ok_or(ScoringError::EmptySeries {
            kind: series.kind(),
            context: "trend recent period",
        })?;

        Ok(Trend {
            baseline_mean,
            recent_mean,
            delta: recent_mean - baseline_mean,
        })
    }

    /// Trend delta only.
    pub fn trend(&self, series: &SignalSeries) -> Result<f64, ScoringError> {
        self.analyze(series).map(|t| t.delta)
    }
}

/// Arithmetic mean, `None` for an empty slice.
///
/// `sum / n` when the sum is finite. Samples large enough to overflow the sum
/// are scaled by the largest magnitude first, so finite input always gives a
/// finite mean.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let sum: f64 = values.iter().sum();
    if sum.is_finite() {
        return Some(sum / n);
    }

    let scale = values.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let scaled: f64 = values.iter().map(|v| v / scale).sum();
    Some(scale * (scaled / n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SignalKind;

    fn noise(samples: Vec<f64>) -> SignalSeries {
        let len = samples.len();
        SignalSeries::new(SignalKind::Noise, samples, len).expect("valid series")
    }

    #[test]
    fn test_midpoint_trend() {
        let series = noise(vec![1.0, 2.0, 3.0, 5.0, 6.0, 7.0]);
        let trend = TrendAnalyzer::default().analyze(&series).expect("trend");
        assert_eq!(trend.baseline_mean, 2.0);
        assert_eq!(trend.recent_mean, 6.0);
        assert_eq!(trend.delta, 4.0);
    }

    #[test]
    fn test_explicit_split() {
        let series = noise(vec![10.0, 10.0, 20.0, 20.0, 20.0, 20.0]);
        let delta = TrendAnalyzer::new(SplitPoint::At(2)).trend(&series).expect("trend");
        assert_eq!(delta, 10.0);
    }

    #[test]
    fn test_odd_length_midpoint_gives_recent_the_extra_sample() {
        assert_eq!(SplitPoint::Midpoint.index_for(7), 3);
        let series = noise(vec![0.0, 0.0, 0.0, 3.0, 3.0, 3.0, 3.0]);
        let trend = TrendAnalyzer::default().analyze(&series).expect("trend");
        assert_eq!(trend.delta, 3.0);
    }

    #[test]
    fn test_falling_trend_is_negative() {
        let series = noise(vec![82.0, 82.0, 80.0, 80.0]);
        assert_eq!(TrendAnalyzer::default().trend(&series).expect("trend"), -2.0);
    }

    #[test]
    fn test_single_sample_has_empty_baseline() {
        let err = TrendAnalyzer::default().analyze(&noise(vec![80.0])).unwrap_err();
        assert!(matches!(err, ScoringError::EmptySeries { context: "trend baseline period", .. }));
    }

    #[test]
    fn test_split_past_end_has_empty_recent() {
        let err = TrendAnalyzer::new(SplitPoint::At(10))
            .analyze(&noise(vec![80.0; 4]))
            .unwrap_err();
        assert!(matches!(err, ScoringError::EmptySeries { context: "trend recent period", .. }));
    }

    #[test]
    fn test_mean_survives_sum_overflow() {
        assert_eq!(mean(&[f64::MAX; 4]), Some(f64::MAX));
        assert_eq!(mean(&[f64::MAX, -f64::MAX]), Some(0.0));

        let series = noise(vec![f64::MAX; 8]);
        let trend = TrendAnalyzer::default().analyze(&series).expect("trend");
        assert_eq!(trend.delta, 0.0);
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[2.0, 4.0]), Some(3.0));
    }
}
