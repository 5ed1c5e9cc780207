//! Markdown Output
//!
//! GitHub-flavored tables, suitable for `$GITHUB_STEP_SUMMARY` or a PR
//! comment.

use crate::report::Report;
use std::fmt::Write;

/// Render the report as Markdown
pub fn generate_markdown_report(report: &Report) -> String {
    let mut md = String::new();
    // Writing to a String cannot fail
    let _ = write_markdown(&mut md, report);
    md
}

fn write_markdown(md: &mut String, report: &Report) -> std::fmt::Result {
    writeln!(md, "## kernelbench results")?;
    writeln!(md)?;
    writeln!(
        md,
        "{} on {} ({} cores), {}",
        report.meta.system.cpu,
        report.meta.system.os,
        report.meta.system.cpu_cores,
        report.meta.timestamp.format("%Y-%m-%d %H:%M UTC")
    )?;
    writeln!(md)?;

    writeln!(md, "| Kernel | Variant | Median (ms) | Mean (ms) | Min (ms) | Samples | Result |")?;
    writeln!(md, "|---|---|---:|---:|---:|---:|---|")?;
    for r in &report.results {
        writeln!(
            md,
            "| {} | {} | {:.2} | {:.2} | {:.2} | {} | {} |",
            r.kind.title(),
            r.variant.title(),
            r.stats.median,
            r.stats.mean,
            r.stats.min,
            r.stats.sample_count,
            r.summary.replace('|', "\\|"),
        )?;
    }

    if !report.speedups.is_empty() {
        writeln!(md)?;
        writeln!(md, "### Speedup")?;
        writeln!(md)?;
        writeln!(md, "| Kernel | Reference (ms) | Accelerated (ms) | Speedup |")?;
        writeln!(md, "|---|---:|---:|---:|")?;
        for s in &report.speedups {
            writeln!(
                md,
                "| {} | {:.2} | {:.2} | {} |",
                s.kind.title(),
                s.reference_ms,
                s.accelerated_ms,
                s.speedup
            )?;
        }
    }

    if !report.parity.is_empty() {
        writeln!(md)?;
        writeln!(md, "### Parity")?;
        writeln!(md)?;
        for p in &report.parity {
            match &p.error {
                None => writeln!(md, "- :white_check_mark: {}", p.kind.title())?,
                Some(e) => writeln!(md, "- :x: {}: {}", p.kind.title(), e)?,
            }
        }
    }

    writeln!(md)?;
    writeln!(
        md,
        "{} kernel runs in {:.0} ms",
        report.summary.kernels_run, report.summary.total_duration_ms
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ParityEntry;
    use crate::report::fixtures::sample_report;
    use kernelbench_core::BenchmarkKind;

    #[test]
    fn test_tables() {
        let md = generate_markdown_report(&sample_report());

        assert!(md.starts_with("## kernelbench results\n"));
        assert!(md.contains("| Array Sorting | Reference (scripted) | 120.00 |"));
        assert!(md.contains("| Array Sorting | 120.00 | 40.00 | 3.00x |"));
        assert!(md.contains("- :white_check_mark: Array Sorting"));
        assert!(md.contains("2 kernel runs in 482 ms"));
    }

    #[test]
    fn test_parity_failure_listed() {
        let mut report = sample_report();
        report.parity = vec![ParityEntry {
            kind: BenchmarkKind::Pi,
            passed: false,
            error: Some("pi: reference returned 3.1, accelerated returned 3.2".to_string()),
        }];
        let md = generate_markdown_report(&report);
        assert!(md.contains("- :x: Monte Carlo Pi: pi: reference returned 3.1"));
    }
}
