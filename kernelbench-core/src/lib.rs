#![warn(missing_docs)]
//! kernelbench Core - Kernel Interface
//!
//! This crate holds everything both kernel implementations agree on:
//! - `BenchmarkKind` / `Variant` enumerations and their fixed `Workload`s
//! - The `Kernels` trait, one method per benchmark
//! - `KernelResult`, the per-kind result shape
//! - The shared LCG constants and `Natural` for exact Fibonacci terms
//! - Clock abstraction used by the runner for wall-clock timing

mod kernels;
mod kind;
mod lcg;
mod measure;
mod natural;
mod result;
mod workload;

pub use kernels::Kernels;
pub use kind::{BenchmarkKind, ParseError, Variant};
pub use lcg::{
    HASH_MIX_1, HASH_MIX_2, HASH_SEED, LCG_INCREMENT, LCG_MULTIPLIER, Lcg, PI_SEED, SORT_SEED,
    SORT_VALUE_RANGE, TEXT_PHRASE, TEXT_PREFIX_CHARS,
};
pub use measure::{Clock, MonotonicClock, Stopwatch, pin_to_cpu, round_to_hundredths};
pub use natural::Natural;
pub use result::KernelResult;
pub use workload::Workload;
