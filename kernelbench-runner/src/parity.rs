//! Cross-variant parity check

use crate::measurement::execute;
use kernelbench_core::{BenchmarkKind, KernelResult, Variant, Workload};
use thiserror::Error;
use tracing::{debug, warn};

/// The two variants disagree on a kernel's output
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParityError {
    /// Sequence results have different lengths
    #[error("{kind}: reference produced {reference} elements, accelerated produced {accelerated}")]
    LengthMismatch {
        /// Kernel that was checked
        kind: BenchmarkKind,
        /// Reference length
        reference: usize,
        /// Accelerated length
        accelerated: usize,
    },

    /// Sequence results first differ at `index`
    #[error("{kind}: results differ at index {index} (reference {reference}, accelerated {accelerated})")]
    ElementMismatch {
        /// Kernel that was checked
        kind: BenchmarkKind,
        /// First differing position
        index: usize,
        /// Reference element
        reference: String,
        /// Accelerated element
        accelerated: String,
    },

    /// Scalar results differ
    #[error("{kind}: reference returned {reference}, accelerated returned {accelerated}")]
    ValueMismatch {
        /// Kernel that was checked
        kind: BenchmarkKind,
        /// Reference value
        reference: String,
        /// Accelerated value
        accelerated: String,
    },

    /// The results are of different kinds altogether
    #[error("result shapes differ: {reference} vs {accelerated}")]
    ShapeMismatch {
        /// Kind of the reference result
        reference: BenchmarkKind,
        /// Kind of the accelerated result
        accelerated: BenchmarkKind,
    },
}

/// Run both variants of `kind` at `workload` and compare their results
pub fn verify_parity(kind: BenchmarkKind, workload: Workload) -> Result<(), ParityError> {
    let reference = execute(kind, Variant::Reference, workload);
    let accelerated = execute(kind, Variant::Accelerated, workload);

    match compare_results(&reference, &accelerated) {
        Ok(()) => {
            debug!(
                kind = %kind,
                workload = %workload,
                elements = ?reference.element_count(),
                "variants agree"
            );
            Ok(())
        }
        Err(e) => {
            warn!(kind = %kind, workload = %workload, error = %e, "variants disagree");
            Err(e)
        }
    }
}

/// Value-for-value comparison; floating-point results must match bit for bit
pub fn compare_results(
    reference: &KernelResult,
    accelerated: &KernelResult,
) -> Result<(), ParityError> {
    let kind = reference.kind();
    match (reference, accelerated) {
        (KernelResult::Primes(r), KernelResult::Primes(a)) => {
            compare_slices(kind, r, a, |x, y| x == y)
        }
        (
            KernelResult::Matrix { size: rs, values: r },
            KernelResult::Matrix { size: s, values: a },
        ) => {
            if rs != s {
                return Err(value_mismatch(kind, rs, s));
            }
            compare_slices(kind, r, a, |x, y| x.to_bits() == y.to_bits())
        }
        (KernelResult::Fibonacci(r), KernelResult::Fibonacci(a)) => {
            compare_slices(kind, r, a, |x, y| x == y)
        }
        (KernelResult::Hash(r), KernelResult::Hash(a)) => {
            if r == a {
                Ok(())
            } else {
                Err(value_mismatch(kind, format!("0x{r:x}"), format!("0x{a:x}")))
            }
        }
        (KernelResult::Pi(r), KernelResult::Pi(a)) => {
            if r.to_bits() == a.to_bits() {
                Ok(())
            } else {
                Err(value_mismatch(kind, r, a))
            }
        }
        (KernelResult::Sort(r), KernelResult::Sort(a)) => {
            compare_slices(kind, r, a, |x, y| x == y)
        }
        (KernelResult::Text(r), KernelResult::Text(a)) => {
            let r: Vec<char> = r.chars().collect();
            let a: Vec<char> = a.chars().collect();
            compare_slices(kind, &r, &a, |x, y| x == y)
        }
        _ => Err(ParityError::ShapeMismatch {
            reference: kind,
            accelerated: accelerated.kind(),
        }),
    }
}

fn compare_slices<T: std::fmt::Display>(
    kind: BenchmarkKind,
    reference: &[T],
    accelerated: &[T],
    eq: impl Fn(&T, &T) -> bool,
) -> Result<(), ParityError> {
    if let Some(index) = reference
        .iter()
        .zip(accelerated)
        .position(|(r, a)| !eq(r, a))
    {
        return Err(ParityError::ElementMismatch {
            kind,
            index,
            reference: reference[index].to_string(),
            accelerated: accelerated[index].to_string(),
        });
    }

    if reference.len() != accelerated.len() {
        return Err(ParityError::LengthMismatch {
            kind,
            reference: reference.len(),
            accelerated: accelerated.len(),
        });
    }

    Ok(())
}

fn value_mismatch(
    kind: BenchmarkKind,
    reference: impl ToString,
    accelerated: impl ToString,
) -> ParityError {
    ParityError::ValueMismatch {
        kind,
        reference: reference.to_string(),
        accelerated: accelerated.to_string(),
    }
}
