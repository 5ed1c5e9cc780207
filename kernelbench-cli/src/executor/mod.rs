//! Benchmark Executor
//!
//! Runs the planned kernel/variant pairs and turns the timings into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionPlan (kinds x variants)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Warm-up, timed samples, Session update
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │verification │  Optional cross-variant parity checks
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ statistics  │  Summary stats per pair (parallel)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Report with median-based speedups
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```
//!
//! Kernels always run one at a time on the calling thread. Only the
//! statistics step uses the rayon pool.

mod execution;
mod formatting;
mod metadata;
mod report;
mod statistics;
mod verification;

pub use execution::{ExecutionConfig, Executor, PairResult};
pub use formatting::format_human_output;
pub use report::build_report;
pub use statistics::compute_statistics;
pub use verification::run_parity_checks;
