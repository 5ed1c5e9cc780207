//! Outlier counting with Tukey fences

use crate::percentiles::percentile_of_sorted;

/// Fence distance in interquartile ranges
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Samples outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutlierCounts {
    /// Below the lower fence
    pub low: usize,
    /// Above the upper fence
    pub high: usize,
}

impl OutlierCounts {
    /// Outliers on either side
    pub fn total(&self) -> usize {
        self.low + self.high
    }
}

/// Count outliers in samples sorted ascending
///
/// Fewer than four samples give no usable quartiles, so nothing is counted.
pub fn count_outliers(sorted: &[f64]) -> OutlierCounts {
    if sorted.len() < 4 {
        return OutlierCounts::default();
    }

    let q1 = percentile_of_sorted(sorted, 25.0);
    let q3 = percentile_of_sorted(sorted, 75.0);
    let iqr = q3 - q1;
    let lower_bound = q1 - IQR_MULTIPLIER * iqr;
    let upper_bound = q3 + IQR_MULTIPLIER * iqr;

    OutlierCounts {
        low: sorted.iter().take_while(|&&s| s < lower_bound).count(),
        high: sorted.iter().rev().take_while(|&&s| s > upper_bound).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_high_outlier() {
        let counts = count_outliers(&[1.0, 2.0, 3.0, 4.0, 5.0, 100.0]);
        assert_eq!(counts.high, 1);
        assert_eq!(counts.low, 0);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_tight_cluster() {
        let counts = count_outliers(&[10.0, 10.0, 10.1, 10.1, 10.2]);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_too_few_samples() {
        assert_eq!(count_outliers(&[1.0, 1000.0]), OutlierCounts::default());
    }
}
