//! Parity Verification
//!
//! Runs both variants of each selected kind at its fixed workload and
//! records whether they agree. Failures are reported, never fatal here; the
//! CLI decides the exit code.

use kernelbench_core::BenchmarkKind;
use kernelbench_report::ParityEntry;
use kernelbench_runner::{entry, verify_parity};

/// Check each kind in order
pub fn run_parity_checks(kinds: &[BenchmarkKind]) -> Vec<ParityEntry> {
    kinds
        .iter()
        .map(|&kind| match verify_parity(kind, entry(kind).workload) {
            Ok(()) => ParityEntry {
                kind,
                passed: true,
                error: None,
            },
            Err(e) => ParityEntry {
                kind,
                passed: false,
                error: Some(e.to_string()),
            },
        })
        .collect()
}
