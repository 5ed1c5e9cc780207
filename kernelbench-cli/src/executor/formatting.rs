//! Output Formatting
//!
//! Terminal output for a run: per-kind result blocks, a speedup table and
//! the parity outcome.

use crate::session::Session;
use kernelbench_core::Variant;
use kernelbench_report::Report;
use std::fmt::Write;

/// Format a report for terminal display
///
/// The speedup table shows both the median-based ratio from the report and
/// the ratio of the latest pair held by `session`.
pub fn format_human_output(report: &Report, session: &Session) -> String {
    let mut output = String::new();
    // Writing to a String cannot fail
    let _ = write_human(&mut output, report, session);
    output
}

fn write_human(out: &mut String, report: &Report, session: &Session) -> std::fmt::Result {
    writeln!(out)?;
    writeln!(out, "kernelbench Results")?;
    writeln!(out, "{}", "=".repeat(60))?;
    writeln!(out)?;

    let mut current_kind = None;
    for result in &report.results {
        if current_kind != Some(result.kind) {
            if current_kind.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "{} [{} = {}]", result.kind.title(), result.kind, result.workload)?;
            writeln!(out, "{}", "-".repeat(60))?;
            current_kind = Some(result.kind);
        }

        let icon = match result.variant {
            Variant::Reference => "○",
            Variant::Accelerated => "●",
        };
        let s = &result.stats;
        writeln!(out, "  {} {:<24} {}", icon, result.variant.title(), result.summary)?;
        if s.sample_count > 1 {
            writeln!(
                out,
                "      median: {:.2} ms  mean: {:.2} ms  stddev: {:.2} ms  cv: {:.1}%",
                s.median,
                s.mean,
                s.std_dev,
                s.coefficient_of_variation()
            )?;
            writeln!(
                out,
                "      min: {:.2} ms  max: {:.2} ms  p95: {:.2} ms  samples: {}",
                s.min, s.max, s.p95, s.sample_count
            )?;
            if s.outlier_count > 0 {
                writeln!(out, "      outliers: {}", s.outlier_count)?;
            }
        } else {
            writeln!(out, "      time: {:.2} ms", s.median)?;
        }
    }

    if !report.speedups.is_empty() {
        writeln!(out)?;
        writeln!(out, "Speedup (reference / accelerated)")?;
        writeln!(out, "{}", "-".repeat(60))?;
        writeln!(
            out,
            "  {:<22} {:>10} {:>10} {:>8} {:>8}",
            "Kernel", "Ref (ms)", "Acc (ms)", "Median", "Latest"
        )?;
        writeln!(out, "  {}", "-".repeat(62))?;

        for entry in &report.speedups {
            let latest = session
                .speedup(entry.kind)
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string());
            writeln!(
                out,
                "  {:<22} {:>10.2} {:>10.2} {:>8} {:>8}",
                entry.kind.title(),
                entry.reference_ms,
                entry.accelerated_ms,
                entry.speedup.to_string(),
                latest
            )?;
        }
    }

    if !report.parity.is_empty() {
        writeln!(out)?;
        writeln!(out, "Parity")?;
        writeln!(out, "{}", "-".repeat(60))?;
        for p in &report.parity {
            match &p.error {
                None => writeln!(out, "  ✓ {}", p.kind)?,
                Some(e) => writeln!(out, "  ✗ {}", e)?,
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Summary")?;
    writeln!(out, "{}", "-".repeat(60))?;
    writeln!(
        out,
        "  Runs: {}  Parity checked: {}  Parity failures: {}",
        report.summary.kernels_run, report.summary.parity_checked, report.summary.parity_failures
    )?;
    writeln!(out, "  Duration: {:.2} ms", report.summary.total_duration_ms)
}
