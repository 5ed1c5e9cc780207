#![warn(missing_docs)]
//! # kernelbench
//!
//! Seven compute kernels, each written twice, timed against each other.
//!
//! - **Two variants**: a reference implementation that emulates a dynamic
//!   host's double-precision number model, and an accelerated one on native
//!   fixed-width integers
//! - **Parity**: both variants return value-identical results for every input
//! - **Fixed workloads**: every kind runs at one workload so timings compare
//!   across runs and machines
//! - **Speedup**: reference time over accelerated time, rounded to hundredths
//! - **Reports**: terminal, JSON, CSV and Markdown
//! - **Browser**: the accelerated kernels are also exported to WebAssembly by
//!   `kernelbench-wasm`
//!
//! ## Quick Start
//!
//! ```ignore
//! use kernelbench::prelude::*;
//!
//! let reference = run(BenchmarkKind::Hash, Variant::Reference);
//! let accelerated = run(BenchmarkKind::Hash, Variant::Accelerated);
//! println!("{} -> {}", accelerated.summary, speedup(&reference, &accelerated));
//! ```
//!
//! ## Calling a kernel directly
//!
//! ```ignore
//! use kernelbench::{Accelerated, Kernels};
//!
//! let primes = Accelerated.primes(100);
//! assert_eq!(primes.len(), 25);
//! ```

// Re-export core types
pub use kernelbench_core::{
    BenchmarkKind, Clock, KernelResult, Kernels, MonotonicClock, Natural, ParseError, Variant,
    Workload,
};

// Re-export the two kernel implementations
pub use kernelbench_accelerated::Accelerated;
pub use kernelbench_reference::Reference;

// Re-export runner
pub use kernelbench_runner::{
    KERNEL_TABLE, KernelEntry, Measurement, ParityError, Speedup, UnavailableReason, execute,
    kernels_for, run, run_with, speedup, speedup_ratio, summarize, verify_parity,
};

// Re-export stats
pub use kernelbench_stats::{SummaryStatistics, compute_summary};

// Re-export report types
pub use kernelbench_report::{OutputFormat, Report};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        BenchmarkKind, KernelResult, Measurement, Speedup, Variant, Workload, run, speedup,
        verify_parity,
    };
}

/// Run the kernelbench CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     kernelbench::run_cli()
/// }
/// ```
pub use kernelbench_cli::run as run_cli;
