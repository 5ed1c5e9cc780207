//! Speedup Ratio
//!
//! Reference elapsed time divided by accelerated elapsed time. The ratio is
//! only meaningful for a reference/accelerated pair of the same kind with a
//! strictly positive accelerated time; every other input yields
//! [`Speedup::Unavailable`] rather than a panic or an infinite ratio.

use crate::measurement::Measurement;
use kernelbench_core::{Variant, round_to_hundredths};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a speedup could not be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    /// The two measurements are of different kernels
    KindMismatch,
    /// Not a reference measurement followed by an accelerated one
    VariantMismatch,
    /// Accelerated run took 0 ms at the clock's resolution
    ZeroAcceleratedTime,
    /// An elapsed time is NaN, infinite or negative
    InvalidTime,
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnavailableReason::KindMismatch => "measurements are of different kernels",
            UnavailableReason::VariantMismatch => "expected a reference and an accelerated run",
            UnavailableReason::ZeroAcceleratedTime => "accelerated time is zero",
            UnavailableReason::InvalidTime => "elapsed time is not a finite non-negative value",
        };
        f.write_str(text)
    }
}

/// Result of comparing two measurements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speedup {
    /// Reference time / accelerated time, 2 decimal places
    Ratio(f64),
    /// No meaningful ratio exists
    Unavailable(UnavailableReason),
}

impl Speedup {
    /// The ratio, if available
    pub fn ratio(self) -> Option<f64> {
        match self {
            Speedup::Ratio(r) => Some(r),
            Speedup::Unavailable(_) => None,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Ratio(r) => write!(f, "{r:.2}x"),
            Speedup::Unavailable(_) => f.write_str("unavailable"),
        }
    }
}

/// Compare a reference measurement against an accelerated one
pub fn speedup(reference: &Measurement, accelerated: &Measurement) -> Speedup {
    if reference.kind != accelerated.kind {
        return Speedup::Unavailable(UnavailableReason::KindMismatch);
    }
    if reference.variant != Variant::Reference || accelerated.variant != Variant::Accelerated {
        return Speedup::Unavailable(UnavailableReason::VariantMismatch);
    }
    speedup_ratio(reference.elapsed_ms, accelerated.elapsed_ms)
}

/// Ratio of two raw elapsed times in milliseconds
pub fn speedup_ratio(reference_ms: f64, accelerated_ms: f64) -> Speedup {
    let valid = |t: f64| t.is_finite() && t >= 0.0;
    if !valid(reference_ms) || !valid(accelerated_ms) {
        return Speedup::Unavailable(UnavailableReason::InvalidTime);
    }
    if accelerated_ms == 0.0 {
        return Speedup::Unavailable(UnavailableReason::ZeroAcceleratedTime);
    }
    Speedup::Ratio(round_to_hundredths(reference_ms / accelerated_ms))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelbench_core::{BenchmarkKind, Workload};

    fn measurement(kind: BenchmarkKind, variant: Variant, elapsed_ms: f64) -> Measurement {
        Measurement {
            kind,
            variant,
            workload: Workload::for_kind(kind),
            elapsed_ms,
            summary: String::new(),
        }
    }

    #[test]
    fn test_ratio() {
        let r = measurement(BenchmarkKind::Sort, Variant::Reference, 120.0);
        let a = measurement(BenchmarkKind::Sort, Variant::Accelerated, 45.0);
        assert_eq!(speedup(&r, &a), Speedup::Ratio(2.67));
        assert_eq!(speedup(&r, &a).to_string(), "2.67x");
    }

    #[test]
    fn test_zero_accelerated_time() {
        let r = measurement(BenchmarkKind::Hash, Variant::Reference, 10.0);
        let a = measurement(BenchmarkKind::Hash, Variant::Accelerated, 0.0);
        let s = speedup(&r, &a);
        assert_eq!(s, Speedup::Unavailable(UnavailableReason::ZeroAcceleratedTime));
        assert_eq!(s.to_string(), "unavailable");
        assert_eq!(s.ratio(), None);
    }

    #[test]
    fn test_mismatches() {
        let r = measurement(BenchmarkKind::Hash, Variant::Reference, 10.0);
        let other = measurement(BenchmarkKind::Pi, Variant::Accelerated, 5.0);
        assert_eq!(
            speedup(&r, &other),
            Speedup::Unavailable(UnavailableReason::KindMismatch)
        );

        let also_reference = measurement(BenchmarkKind::Hash, Variant::Reference, 5.0);
        assert_eq!(
            speedup(&r, &also_reference),
            Speedup::Unavailable(UnavailableReason::VariantMismatch)
        );

        let a = measurement(BenchmarkKind::Hash, Variant::Accelerated, 5.0);
        assert_eq!(
            speedup(&a, &r),
            Speedup::Unavailable(UnavailableReason::VariantMismatch)
        );
    }

    #[test]
    fn test_invalid_times() {
        assert_eq!(
            speedup_ratio(f64::NAN, 1.0),
            Speedup::Unavailable(UnavailableReason::InvalidTime)
        );
        assert_eq!(
            speedup_ratio(1.0, f64::INFINITY),
            Speedup::Unavailable(UnavailableReason::InvalidTime)
        );
        assert_eq!(
            speedup_ratio(-1.0, 1.0),
            Speedup::Unavailable(UnavailableReason::InvalidTime)
        );
        assert_eq!(speedup_ratio(0.0, 2.0), Speedup::Ratio(0.0));
    }
}
