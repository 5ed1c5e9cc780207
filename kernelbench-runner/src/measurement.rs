//! Timed Kernel Execution

use crate::summary::summarize;
use crate::table::entry;
use kernelbench_accelerated::Accelerated;
use kernelbench_core::{
    BenchmarkKind, Clock, KernelResult, Kernels, MonotonicClock, Stopwatch, Variant, Workload,
    round_to_hundredths,
};
use kernelbench_reference::Reference;
use serde::{Deserialize, Serialize};
use tracing::debug;

static REFERENCE: Reference = Reference;
static ACCELERATED: Accelerated = Accelerated;

/// Outcome of one timed kernel call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Benchmark that ran
    pub kind: BenchmarkKind,
    /// Implementation that ran it
    pub variant: Variant,
    /// Problem size used
    pub workload: Workload,
    /// Wall-clock time in milliseconds, 2 decimal places
    pub elapsed_ms: f64,
    /// Kind-specific summary of the result
    pub summary: String,
}

/// The implementation behind `variant`
pub fn kernels_for(variant: Variant) -> &'static dyn Kernels {
    match variant {
        Variant::Reference => &REFERENCE,
        Variant::Accelerated => &ACCELERATED,
    }
}

/// Run a kernel untimed and return its full result
pub fn execute(kind: BenchmarkKind, variant: Variant, workload: Workload) -> KernelResult {
    (entry(kind).execute)(kernels_for(variant), workload)
}

/// Run `kind` on `variant` at its fixed workload, timed by the monotonic clock
pub fn run(kind: BenchmarkKind, variant: Variant) -> Measurement {
    let clock = MonotonicClock::new();
    run_with(kind, variant, entry(kind).workload, &clock)
}

/// Run a kernel with an explicit workload and clock
///
/// Only the kernel call is timed; summarizing the result happens after the
/// clock is read.
pub fn run_with<C: Clock + ?Sized>(
    kind: BenchmarkKind,
    variant: Variant,
    workload: Workload,
    clock: &C,
) -> Measurement {
    let row = entry(kind);
    let kernels = kernels_for(variant);
    debug!(kind = %kind, variant = %variant, workload = %workload, "kernel start");

    let watch = Stopwatch::start(clock);
    let result = std::hint::black_box((row.execute)(kernels, std::hint::black_box(workload)));
    let elapsed_ms = round_to_hundredths(watch.elapsed_ms());

    let summary = summarize(&result);
    debug!(kind = %kind, variant = %variant, elapsed_ms, summary = %summary, "kernel finish");

    Measurement {
        kind,
        variant,
        workload,
        elapsed_ms,
        summary,
    }
}
