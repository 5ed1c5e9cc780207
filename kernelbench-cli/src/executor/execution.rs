//! Benchmark Execution
//!
//! Each planned pair gets `warmup_runs` untimed calls followed by `samples`
//! timed calls through the runner. The last timed measurement of every pair
//! is recorded in the [`Session`].

use crate::planner::ExecutionPlan;
use crate::session::Session;
use indicatif::{ProgressBar, ProgressStyle};
use kernelbench_core::{BenchmarkKind, Variant, Workload, pin_to_cpu};
use kernelbench_runner::{Measurement, entry, execute, run};
use tracing::{debug, info, warn};

/// Configuration for benchmark execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Timed runs per pair, at least 1
    pub samples: usize,
    /// Untimed runs before measuring
    pub warmup_runs: usize,
    /// Core to pin the thread to before the first run
    pub pin_cpu: Option<usize>,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            samples: 1,
            warmup_runs: 0,
            pin_cpu: None,
        }
    }
}

/// Timings of one kernel/variant pair
#[derive(Debug, Clone)]
pub struct PairResult {
    /// Benchmark that ran
    pub kind: BenchmarkKind,
    /// Implementation that ran it
    pub variant: Variant,
    /// Problem size
    pub workload: Workload,
    /// Elapsed ms of each timed run, in run order
    pub samples: Vec<f64>,
    /// Last timed measurement
    pub last: Measurement,
}

/// Runs an execution plan sequentially
pub struct Executor {
    config: ExecutionConfig,
}

impl Executor {
    /// Executor with the given run settings
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Execute every pair of `plan`, recording last measurements in `session`
    pub fn execute(&self, plan: &ExecutionPlan, session: &mut Session) -> Vec<PairResult> {
        if let Some(cpu) = self.config.pin_cpu {
            match pin_to_cpu(cpu) {
                Ok(()) => info!(cpu, "pinned measuring thread"),
                Err(e) => warn!(cpu, error = %e, "failed to pin thread, continuing unpinned"),
            }
        }

        let pb = ProgressBar::new(plan.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );

        let mut results = Vec::with_capacity(plan.len());
        for (kind, variant) in plan.pairs() {
            pb.set_message(format!("{kind} ({variant})"));
            let result = self.execute_pair(kind, variant);
            session.record(result.last.clone());
            results.push(result);
            pb.inc(1);
        }

        pb.finish_with_message("Complete");
        results
    }

    fn execute_pair(&self, kind: BenchmarkKind, variant: Variant) -> PairResult {
        let workload = entry(kind).workload;

        for _ in 0..self.config.warmup_runs {
            std::hint::black_box(execute(kind, variant, workload));
        }

        let samples_wanted = self.config.samples.max(1);
        let mut samples = Vec::with_capacity(samples_wanted);
        let mut last = run(kind, variant);
        samples.push(last.elapsed_ms);
        for _ in 1..samples_wanted {
            last = run(kind, variant);
            samples.push(last.elapsed_ms);
        }

        debug!(kind = %kind, variant = %variant, samples = samples.len(), "pair complete");

        PairResult {
            kind,
            variant,
            workload,
            samples,
            last,
        }
    }
}
