//! Statistics Computation
//!
//! Summary statistics for every executed pair, computed in parallel with
//! rayon once all kernels have finished so no measurement shares the CPU
//! with it.

use super::execution::PairResult;
use kernelbench_stats::{SummaryStatistics, compute_summary};
use rayon::prelude::*;

/// Summary of each result's samples, in the same order as `results`
pub fn compute_statistics(results: &[PairResult]) -> Vec<SummaryStatistics> {
    results
        .par_iter()
        .map(|r| compute_summary(&r.samples))
        .collect()
}
