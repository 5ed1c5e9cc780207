//! Report Data Structures

use chrono::{DateTime, Utc};
use kernelbench_core::{BenchmarkKind, Variant, Workload};
use kernelbench_runner::Speedup;
use kernelbench_stats::SummaryStatistics;
use serde::{Deserialize, Serialize};

/// Complete output of one CLI run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Where and when the run happened
    pub meta: ReportMeta,
    /// One entry per executed kernel/variant pair, in run order
    pub results: Vec<KernelReport>,
    /// One entry per kind with both variants executed
    pub speedups: Vec<SpeedupEntry>,
    /// Parity checks, empty unless requested
    pub parity: Vec<ParityEntry>,
    /// Totals
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// kernelbench version that produced the report
    pub version: String,
    /// Start of the run (UTC)
    pub timestamp: DateTime<Utc>,
    /// `HEAD` of the working directory, if it is a git checkout
    pub git_commit: Option<String>,
    /// Host description
    pub system: SystemInfo,
}

/// Host the kernels ran on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system, as `std::env::consts::OS`
    pub os: String,
    /// CPU architecture, as `std::env::consts::ARCH`
    pub arch: String,
    /// CPU model name, "Unknown" when unavailable
    pub cpu: String,
    /// Logical cores available to the process
    pub cpu_cores: u32,
}

/// Timings of one kernel/variant pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KernelReport {
    /// Benchmark that ran
    pub kind: BenchmarkKind,
    /// Implementation that ran it
    pub variant: Variant,
    /// Problem size
    pub workload: Workload,
    /// Elapsed time of every timed run, in ms
    pub samples: Vec<f64>,
    /// Statistics over `samples`
    pub stats: SummaryStatistics,
    /// Summary line of the last run
    pub summary: String,
}

/// Reference vs accelerated comparison for one kind, from median times
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeedupEntry {
    /// Benchmark compared
    pub kind: BenchmarkKind,
    /// Median reference time in ms
    pub reference_ms: f64,
    /// Median accelerated time in ms
    pub accelerated_ms: f64,
    /// `reference_ms / accelerated_ms`, or why it is unavailable
    pub speedup: Speedup,
}

/// Outcome of a cross-variant parity check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParityEntry {
    /// Benchmark checked
    pub kind: BenchmarkKind,
    /// Both variants returned identical results
    pub passed: bool,
    /// Mismatch description when the check failed
    pub error: Option<String>,
}

/// Totals for the run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Kernel/variant pairs executed
    pub kernels_run: usize,
    /// Parity checks run
    pub parity_checked: usize,
    /// Parity checks that failed
    pub parity_failures: usize,
    /// Wall-clock time of the whole run in ms
    pub total_duration_ms: f64,
}

impl Report {
    /// True when any parity check failed
    pub fn has_parity_failures(&self) -> bool {
        self.summary.parity_failures > 0
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use kernelbench_stats::compute_summary;

    pub(crate) fn sample_report() -> Report {
        let reference = vec![120.0, 124.0, 118.0];
        let accelerated = vec![40.0, 41.0, 39.0];

        Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: DateTime::parse_from_rfc3339("2026-01-02T03:04:05Z")
                    .unwrap()
                    .with_timezone(&Utc),
                git_commit: None,
                system: SystemInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                    cpu: "Test CPU".to_string(),
                    cpu_cores: 8,
                },
            },
            results: vec![
                KernelReport {
                    kind: BenchmarkKind::Sort,
                    variant: Variant::Reference,
                    workload: Workload::for_kind(BenchmarkKind::Sort),
                    stats: compute_summary(&reference),
                    samples: reference,
                    summary: "Sorted 1000000 numbers (min: 0, max: 9999)".to_string(),
                },
                KernelReport {
                    kind: BenchmarkKind::Sort,
                    variant: Variant::Accelerated,
                    workload: Workload::for_kind(BenchmarkKind::Sort),
                    stats: compute_summary(&accelerated),
                    samples: accelerated,
                    summary: "Sorted 1000000 numbers (min: 0, max: 9999)".to_string(),
                },
            ],
            speedups: vec![SpeedupEntry {
                kind: BenchmarkKind::Sort,
                reference_ms: 120.0,
                accelerated_ms: 40.0,
                speedup: Speedup::Ratio(3.0),
            }],
            parity: vec![ParityEntry {
                kind: BenchmarkKind::Sort,
                passed: true,
                error: None,
            }],
            summary: ReportSummary {
                kernels_run: 2,
                parity_checked: 1,
                parity_failures: 0,
                total_duration_ms: 482.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::sample_report;
    use super::*;

    #[test]
    fn test_parity_failures_flag() {
        let mut report = sample_report();
        assert!(!report.has_parity_failures());

        report.summary.parity_failures = 1;
        assert!(report.has_parity_failures());
    }
}
