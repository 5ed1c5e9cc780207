//! Kernel Interface
//!
//! One method per benchmark. Implementations are stateless: every generator
//! or accumulator lives on the stack of a single call, so one instance can
//! serve concurrent callers.

use crate::kind::Variant;
use crate::natural::Natural;

/// The seven benchmark kernels
///
/// For equal inputs every implementation must return value-identical
/// results. A zero input yields an empty collection, `0.0` for `pi`, and the
/// untouched seed for `hash`.
pub trait Kernels: Send + Sync {
    /// Which strategy this implementation represents
    fn variant(&self) -> Variant;

    /// Primes `<= limit` by trial division up to the square root
    fn primes(&self, limit: u32) -> Vec<u32>;

    /// `A * B` for `A[i,j] = (i+j) % 10`, `B[i,j] = (i*j) % 10`, row-major
    fn matrix(&self, size: u32) -> Vec<f64>;

    /// The first `count` Fibonacci numbers
    fn fibonacci(&self, count: u32) -> Vec<Natural>;

    /// `iterations` rounds of LCG step plus multiply/xor-shift finalizer
    fn hash(&self, iterations: u32) -> u32;

    /// Monte Carlo π from `samples` LCG-generated points
    fn pi(&self, samples: u32) -> f64;

    /// `count` LCG values in `[0, 10000)`, sorted ascending
    fn sort(&self, count: u32) -> Vec<i32>;

    /// First 100 characters of the case-inverted phrase repeated `iterations` times
    fn text(&self, iterations: u32) -> String;
}
