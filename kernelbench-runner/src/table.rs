//! Kernel Dispatch Table
//!
//! One row per [`BenchmarkKind`], stored in canonical order so a kind's row
//! is found by index. Each row binds the fixed workload to the trait method
//! that computes it and wraps the output in the matching result shape.

use kernelbench_core::{BenchmarkKind, KernelResult, Kernels, Workload};

/// Static description of one benchmark
#[derive(Debug, Clone, Copy)]
pub struct KernelEntry {
    /// Benchmark this row describes
    pub kind: BenchmarkKind,
    /// Fixed problem size
    pub workload: Workload,
    /// One-line description of the algorithm
    pub algorithm: &'static str,
    /// Invokes the kernel on an implementation
    pub execute: fn(&dyn Kernels, Workload) -> KernelResult,
}

/// Every benchmark, indexed by [`BenchmarkKind::index`]
pub const KERNEL_TABLE: [KernelEntry; 7] = [
    KernelEntry {
        kind: BenchmarkKind::Primes,
        workload: Workload::for_kind(BenchmarkKind::Primes),
        algorithm: "trial division up to the square root",
        execute: run_primes,
    },
    KernelEntry {
        kind: BenchmarkKind::Matrix,
        workload: Workload::for_kind(BenchmarkKind::Matrix),
        algorithm: "triple-loop dense multiply of generated matrices",
        execute: run_matrix,
    },
    KernelEntry {
        kind: BenchmarkKind::Fibonacci,
        workload: Workload::for_kind(BenchmarkKind::Fibonacci),
        algorithm: "linear recurrence with exact arithmetic",
        execute: run_fibonacci,
    },
    KernelEntry {
        kind: BenchmarkKind::Hash,
        workload: Workload::for_kind(BenchmarkKind::Hash),
        algorithm: "LCG step plus multiply/xor-shift finalizer",
        execute: run_hash,
    },
    KernelEntry {
        kind: BenchmarkKind::Pi,
        workload: Workload::for_kind(BenchmarkKind::Pi),
        algorithm: "Monte Carlo quarter-circle sampling",
        execute: run_pi,
    },
    KernelEntry {
        kind: BenchmarkKind::Sort,
        workload: Workload::for_kind(BenchmarkKind::Sort),
        algorithm: "comparison sort of LCG-generated integers",
        execute: run_sort,
    },
    KernelEntry {
        kind: BenchmarkKind::Text,
        workload: Workload::for_kind(BenchmarkKind::Text),
        algorithm: "per-character case inversion while concatenating",
        execute: run_text,
    },
];

/// Table row for `kind`
pub fn entry(kind: BenchmarkKind) -> &'static KernelEntry {
    &KERNEL_TABLE[kind.index()]
}

fn run_primes(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Primes(kernels.primes(workload.get()))
}

fn run_matrix(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Matrix {
        size: workload.get(),
        values: kernels.matrix(workload.get()),
    }
}

fn run_fibonacci(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Fibonacci(kernels.fibonacci(workload.get()))
}

fn run_hash(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Hash(kernels.hash(workload.get()))
}

fn run_pi(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Pi(kernels.pi(workload.get()))
}

fn run_sort(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Sort(kernels.sort(workload.get()))
}

fn run_text(kernels: &dyn Kernels, workload: Workload) -> KernelResult {
    KernelResult::Text(kernels.text(workload.get()))
}
