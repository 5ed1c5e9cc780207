#![warn(missing_docs)]
//! kernelbench Sample Statistics
//!
//! Summaries of repeated timings for one kernel/variant pair. Sample counts
//! are small (usually 1-20), so outliers are counted for display but never
//! dropped from any statistic.

mod outliers;
mod percentiles;
mod summary;

pub use outliers::{IQR_MULTIPLIER, OutlierCounts, count_outliers};
pub use percentiles::percentile_of_sorted;
pub use summary::{SummaryStatistics, compute_summary};
