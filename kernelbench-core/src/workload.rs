//! Fixed Workload Parameters
//!
//! Problem sizes are compile-time constants, one per kind. They are not
//! configuration: the CLI and the wasm layer always use [`Workload::for_kind`].

use crate::kind::BenchmarkKind;
use serde::{Deserialize, Serialize};

/// Size parameter handed to a kernel (limit, dimension, count or iterations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Workload(u32);

impl Workload {
    /// Upper bound for the prime search
    pub const PRIMES_LIMIT: u32 = 100_000;
    /// Side length of the square matrices
    pub const MATRIX_SIZE: u32 = 300;
    /// Number of Fibonacci terms
    pub const FIBONACCI_COUNT: u32 = 1_000;
    /// Hash mixing rounds
    pub const HASH_ITERATIONS: u32 = 10_000_000;
    /// Monte Carlo samples
    pub const PI_SAMPLES: u32 = 10_000_000;
    /// Elements to sort
    pub const SORT_COUNT: u32 = 1_000_000;
    /// Phrase repetitions
    pub const TEXT_ITERATIONS: u32 = 10_000;

    /// Wrap an explicit size
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// The fixed workload for `kind`
    pub const fn for_kind(kind: BenchmarkKind) -> Self {
        Self(match kind {
            BenchmarkKind::Primes => Self::PRIMES_LIMIT,
            BenchmarkKind::Matrix => Self::MATRIX_SIZE,
            BenchmarkKind::Fibonacci => Self::FIBONACCI_COUNT,
            BenchmarkKind::Hash => Self::HASH_ITERATIONS,
            BenchmarkKind::Pi => Self::PI_SAMPLES,
            BenchmarkKind::Sort => Self::SORT_COUNT,
            BenchmarkKind::Text => Self::TEXT_ITERATIONS,
        })
    }

    /// Raw value
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Zero workloads produce empty/zero results
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
