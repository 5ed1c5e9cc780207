//! Report Building
//!
//! Joins pair results with their statistics and derives one speedup entry
//! per kind that ran on both variants. Speedups use median times, which
//! for a single sample is just that sample.

use super::execution::PairResult;
use super::metadata::build_report_meta;
use kernelbench_core::{BenchmarkKind, Variant};
use kernelbench_report::{KernelReport, ParityEntry, Report, ReportSummary, SpeedupEntry};
use kernelbench_runner::speedup_ratio;
use kernelbench_stats::SummaryStatistics;

/// Build a complete Report from execution results
///
/// `stats[i]` must summarize `results[i]`.
pub fn build_report(
    results: &[PairResult],
    stats: &[SummaryStatistics],
    parity: Vec<ParityEntry>,
    total_duration_ms: f64,
) -> Report {
    let kernel_reports: Vec<KernelReport> = results
        .iter()
        .zip(stats)
        .map(|(r, s)| KernelReport {
            kind: r.kind,
            variant: r.variant,
            workload: r.workload,
            samples: r.samples.clone(),
            stats: s.clone(),
            summary: r.last.summary.clone(),
        })
        .collect();

    let median_of = |kind: BenchmarkKind, variant: Variant| {
        kernel_reports
            .iter()
            .find(|k| k.kind == kind && k.variant == variant)
            .map(|k| k.stats.median)
    };

    let speedups = BenchmarkKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let reference_ms = median_of(kind, Variant::Reference)?;
            let accelerated_ms = median_of(kind, Variant::Accelerated)?;
            Some(SpeedupEntry {
                kind,
                reference_ms,
                accelerated_ms,
                speedup: speedup_ratio(reference_ms, accelerated_ms),
            })
        })
        .collect();

    let summary = ReportSummary {
        kernels_run: kernel_reports.len(),
        parity_checked: parity.len(),
        parity_failures: parity.iter().filter(|p| !p.passed).count(),
        total_duration_ms,
    };

    Report {
        meta: build_report_meta(),
        results: kernel_reports,
        speedups,
        parity,
        summary,
    }
}
