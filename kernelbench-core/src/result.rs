//! Kernel Results

use crate::kind::BenchmarkKind;
use crate::natural::Natural;

/// Output of one kernel call, one shape per [`BenchmarkKind`]
#[derive(Debug, Clone, PartialEq)]
pub enum KernelResult {
    /// Ascending primes up to the limit
    Primes(Vec<u32>),
    /// Row-major `size * size` product matrix
    Matrix {
        /// Side length
        size: u32,
        /// Flattened entries
        values: Vec<f64>,
    },
    /// Fibonacci terms starting at F(0)
    Fibonacci(Vec<Natural>),
    /// Final hash accumulator
    Hash(u32),
    /// Monte Carlo estimate
    Pi(f64),
    /// Ascending generated values
    Sort(Vec<i32>),
    /// Truncated case-inverted text
    Text(String),
}

impl KernelResult {
    /// The kind that produces this shape
    pub fn kind(&self) -> BenchmarkKind {
        match self {
            KernelResult::Primes(_) => BenchmarkKind::Primes,
            KernelResult::Matrix { .. } => BenchmarkKind::Matrix,
            KernelResult::Fibonacci(_) => BenchmarkKind::Fibonacci,
            KernelResult::Hash(_) => BenchmarkKind::Hash,
            KernelResult::Pi(_) => BenchmarkKind::Pi,
            KernelResult::Sort(_) => BenchmarkKind::Sort,
            KernelResult::Text(_) => BenchmarkKind::Text,
        }
    }

    /// Element count for sequence results, `None` for scalars
    pub fn element_count(&self) -> Option<usize> {
        match self {
            KernelResult::Primes(v) => Some(v.len()),
            KernelResult::Matrix { values, .. } => Some(values.len()),
            KernelResult::Fibonacci(v) => Some(v.len()),
            KernelResult::Sort(v) => Some(v.len()),
            KernelResult::Text(s) => Some(s.chars().count()),
            KernelResult::Hash(_) | KernelResult::Pi(_) => None,
        }
    }
}
