//! CSV Output
//!
//! One row per kernel/variant pair. Times are milliseconds.

use crate::report::Report;
use std::fmt::Write;

const HEADER: &str = "kind,variant,workload,samples,mean_ms,median_ms,std_dev_ms,min_ms,max_ms,p95_ms,outliers,summary";

/// Render the report's results as CSV
pub fn generate_csv_report(report: &Report) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + report.results.len() * 128);
    out.push_str(HEADER);
    out.push('\n');

    for result in &report.results {
        let s = &result.stats;
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{},{:.3},{:.3},{:.3},{:.3},{:.3},{:.3},{},{}",
            result.kind,
            result.variant,
            result.workload,
            s.sample_count,
            s.mean,
            s.median,
            s.std_dev,
            s.min,
            s.max,
            s.p95,
            s.outlier_count,
            escape(&result.summary),
        );
    }

    out
}

/// Quote a field when it contains a separator, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn test_rows() {
        let csv = generate_csv_report(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("sort,reference,1000000,3,120.667,120.000,"));
        assert!(lines[2].starts_with("sort,accelerated,1000000,3,40.000,40.000,"));
        assert!(lines[1].ends_with(",0,\"Sorted 1000000 numbers (min: 0, max: 9999)\""));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("Hash: 0xff"), "Hash: 0xff");
        assert_eq!(
            escape("Processed text: \"tHE...\""),
            "\"Processed text: \"\"tHE...\"\"\""
        );
    }
}
