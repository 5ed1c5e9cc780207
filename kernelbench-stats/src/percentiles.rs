//! Percentiles by linear interpolation between ranks

/// Percentile `p` (0-100) of samples already in ascending order
///
/// The rank `p/100 * (n-1)` is interpolated between its neighbouring
/// samples. `p` outside 0-100 is clamped.
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    match sorted {
        [] => 0.0,
        [only] => *only,
        _ => {
            let last = sorted.len() - 1;
            let rank = (p.clamp(0.0, 100.0) / 100.0) * last as f64;
            let lower = rank.floor() as usize;
            let upper = (lower + 1).min(last);
            let fraction = rank - lower as f64;

            sorted[lower] + fraction * (sorted[upper] - sorted[lower])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(percentile_of_sorted(&[1.0, 3.0, 5.0], 50.0), 3.0);
        assert_eq!(percentile_of_sorted(&[1.0, 2.0, 3.0, 4.0], 50.0), 2.5);
    }

    #[test]
    fn test_interpolated_p95() {
        let samples: Vec<f64> = (1..=21).map(f64::from).collect();
        // rank 0.95 * 20 = 19 -> exactly the 20th sample
        assert_eq!(percentile_of_sorted(&samples, 95.0), 20.0);

        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        // rank 8.55 -> 9 + 0.55
        assert!((percentile_of_sorted(&samples, 95.0) - 9.55).abs() < 1e-9);
    }

    #[test]
    fn test_bounds() {
        let sorted = [1.0, 2.0, 3.0];
        assert_eq!(percentile_of_sorted(&sorted, 0.0), 1.0);
        assert_eq!(percentile_of_sorted(&sorted, 100.0), 3.0);
        assert_eq!(percentile_of_sorted(&sorted, 150.0), 3.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(percentile_of_sorted(&[], 50.0), 0.0);
        assert_eq!(percentile_of_sorted(&[42.0], 99.0), 42.0);
    }
}
