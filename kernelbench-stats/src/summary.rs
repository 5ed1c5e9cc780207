//! Summary Statistics
//!
//! Every statistic uses all samples. The outlier count is informational: a
//! high count means the machine was noisy while that kernel ran.

use crate::outliers::count_outliers;
use crate::percentiles::percentile_of_sorted;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Timing summary for one kernel/variant pair (all values in ms)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Number of timed runs
    pub sample_count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// 50th percentile
    pub median: f64,
    /// Sample standard deviation (n-1); 0 for a single sample
    pub std_dev: f64,
    /// Fastest run
    pub min: f64,
    /// Slowest run
    pub max: f64,
    /// 95th percentile
    pub p95: f64,
    /// Runs outside the 1.5·IQR fences
    pub outlier_count: usize,
}

impl SummaryStatistics {
    /// Standard deviation relative to the mean, in percent
    pub fn coefficient_of_variation(&self) -> f64 {
        if self.mean > 0.0 {
            self.std_dev / self.mean * 100.0
        } else {
            0.0
        }
    }
}

/// Summarize raw samples; empty input yields an all-zero summary
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std_dev = if n > 1 {
        let variance = sorted.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
        variance.sqrt()
    } else {
        0.0
    };

    SummaryStatistics {
        sample_count: n,
        mean,
        median: percentile_of_sorted(&sorted, 50.0),
        std_dev,
        min: sorted[0],
        max: sorted[n - 1],
        p95: percentile_of_sorted(&sorted, 95.0),
        outlier_count: count_outliers(&sorted).total(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_summary() {
        let stats = compute_summary(&[3.0, 1.0, 2.0, 5.0, 4.0]);

        assert_eq!(stats.sample_count, 5);
        assert_eq!(stats.mean, 3.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 5.0);
        assert!((stats.std_dev - 2.5f64.sqrt()).abs() < 1e-12);
        assert!((stats.p95 - 4.8).abs() < 1e-12);
        assert_eq!(stats.outlier_count, 0);
        assert!((stats.coefficient_of_variation() - 2.5f64.sqrt() / 3.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_outliers_are_counted_not_removed() {
        let stats = compute_summary(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);

        assert_eq!(stats.outlier_count, 1);
        assert_eq!(stats.max, 100.0);
        assert!((stats.mean - 115.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let stats = compute_summary(&[7.25]);
        assert_eq!(stats.sample_count, 1);
        assert_eq!(stats.median, 7.25);
        assert_eq!(stats.p95, 7.25);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(compute_summary(&[]), SummaryStatistics::default());
        assert_eq!(SummaryStatistics::default().coefficient_of_variation(), 0.0);
    }
}
