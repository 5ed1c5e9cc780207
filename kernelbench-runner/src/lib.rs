#![warn(missing_docs)]
//! kernelbench Runner
//!
//! Request/response execution of one kernel/variant pair:
//! - `KERNEL_TABLE` maps each kind to its workload and kernel call
//! - `run` times one call and summarizes the result
//! - `speedup` compares a reference and an accelerated measurement
//! - `verify_parity` checks both variants agree value-for-value
//!
//! The runner keeps no state between calls. Holding the last measurements
//! for a speedup display is the caller's job.

mod measurement;
mod parity;
mod speedup;
mod summary;
mod table;

pub use measurement::{Measurement, execute, kernels_for, run, run_with};
pub use parity::{ParityError, compare_results, verify_parity};
pub use speedup::{Speedup, UnavailableReason, speedup, speedup_ratio};
pub use summary::summarize;
pub use table::{KERNEL_TABLE, KernelEntry, entry};
