//! Last measurement per kind and variant
//!
//! The runner is stateless, so the CLI keeps the most recent reference and
//! accelerated measurement of each kind here and derives the speedup shown
//! to the user from them.

use kernelbench_core::{BenchmarkKind, Variant};
use kernelbench_runner::{Measurement, Speedup, speedup};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
struct Latest {
    reference: Option<Measurement>,
    accelerated: Option<Measurement>,
}

/// Most recent measurements of a run
#[derive(Debug, Default, Clone)]
pub struct Session {
    latest: BTreeMap<BenchmarkKind, Latest>,
}

impl Session {
    /// Empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `measurement`, replacing the previous one for its kind and variant
    pub fn record(&mut self, measurement: Measurement) {
        let slot = self.latest.entry(measurement.kind).or_default();
        match measurement.variant {
            Variant::Reference => slot.reference = Some(measurement),
            Variant::Accelerated => slot.accelerated = Some(measurement),
        }
    }

    /// Latest measurement of `kind` on `variant`
    pub fn last(&self, kind: BenchmarkKind, variant: Variant) -> Option<&Measurement> {
        let slot = self.latest.get(&kind)?;
        match variant {
            Variant::Reference => slot.reference.as_ref(),
            Variant::Accelerated => slot.accelerated.as_ref(),
        }
    }

    /// Speedup of the latest pair, `None` until both variants have run
    pub fn speedup(&self, kind: BenchmarkKind) -> Option<Speedup> {
        let reference = self.last(kind, Variant::Reference)?;
        let accelerated = self.last(kind, Variant::Accelerated)?;
        Some(speedup(reference, accelerated))
    }

    /// Kinds with at least one measurement, canonical order
    pub fn kinds(&self) -> impl Iterator<Item = BenchmarkKind> + '_ {
        self.latest.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernelbench_core::Workload;

    fn measurement(kind: BenchmarkKind, variant: Variant, elapsed_ms: f64) -> Measurement {
        Measurement {
            kind,
            variant,
            workload: Workload::for_kind(kind),
            elapsed_ms,
            summary: format!("{kind} {variant}"),
        }
    }

    #[test]
    fn test_speedup_needs_both() {
        let mut session = Session::new();
        session.record(measurement(BenchmarkKind::Pi, Variant::Reference, 90.0));
        assert_eq!(session.speedup(BenchmarkKind::Pi), None);

        session.record(measurement(BenchmarkKind::Pi, Variant::Accelerated, 30.0));
        assert_eq!(session.speedup(BenchmarkKind::Pi), Some(Speedup::Ratio(3.0)));
    }

    #[test]
    fn test_record_replaces_previous() {
        let mut session = Session::new();
        session.record(measurement(BenchmarkKind::Hash, Variant::Accelerated, 10.0));
        session.record(measurement(BenchmarkKind::Hash, Variant::Accelerated, 20.0));
        session.record(measurement(BenchmarkKind::Hash, Variant::Reference, 40.0));

        let last = session.last(BenchmarkKind::Hash, Variant::Accelerated).unwrap();
        assert_eq!(last.elapsed_ms, 20.0);
        assert_eq!(session.speedup(BenchmarkKind::Hash), Some(Speedup::Ratio(2.0)));
    }

    #[test]
    fn test_kinds_in_canonical_order() {
        let mut session = Session::new();
        session.record(measurement(BenchmarkKind::Text, Variant::Reference, 1.0));
        session.record(measurement(BenchmarkKind::Primes, Variant::Reference, 1.0));
        let kinds: Vec<_> = session.kinds().collect();
        assert_eq!(kinds, vec![BenchmarkKind::Primes, BenchmarkKind::Text]);
    }
}
