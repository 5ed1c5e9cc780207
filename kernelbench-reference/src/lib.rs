#![warn(missing_docs)]
//! kernelbench Reference Kernels
//!
//! The scripted side of the comparison. Kernels are written the way a
//! dynamically-typed host executes them:
//! - every number is an `f64`; 32-bit behavior comes from explicit coercions
//!   in [`host`](crate::host) applied after each operator
//! - arrays start empty and grow on push, matrices are arrays of rows
//! - strings are built one converted character at a time
//! - arbitrary-precision integers are immutable values, each sum a new one
//!
//! Results are converted to the shared typed shapes only on return.

mod host;

use host::{imul, to_uint32, ushr, xor};
use kernelbench_core::{
    HASH_MIX_1, HASH_MIX_2, HASH_SEED, Kernels, LCG_INCREMENT, LCG_MULTIPLIER, Natural, PI_SEED,
    SORT_SEED, SORT_VALUE_RANGE, TEXT_PHRASE, TEXT_PREFIX_CHARS, Variant,
};
use std::cmp::Ordering;

/// Reference implementation of the seven kernels
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

/// `seed = (seed * a + c) >>> 0`
#[inline]
fn next_seed(seed: f64) -> f64 {
    to_uint32(imul(seed, f64::from(LCG_MULTIPLIER)) + f64::from(LCG_INCREMENT))
}

impl Kernels for Reference {
    fn variant(&self) -> Variant {
        Variant::Reference
    }

    fn primes(&self, limit: u32) -> Vec<u32> {
        let limit = f64::from(limit);
        let mut primes = Vec::new();

        let mut num = 2.0;
        while num <= limit {
            let root = num.sqrt().floor();
            let mut is_prime = true;

            let mut divisor = 2.0;
            while divisor <= root {
                if num % divisor == 0.0 {
                    is_prime = false;
                    break;
                }
                divisor += 1.0;
            }

            if is_prime {
                primes.push(num);
            }
            num += 1.0;
        }

        primes.into_iter().map(|p| p as u32).collect()
    }

    fn matrix(&self, size: u32) -> Vec<f64> {
        let size = size as usize;
        let mut a: Vec<Vec<f64>> = Vec::new();
        let mut b: Vec<Vec<f64>> = Vec::new();

        for i in 0..size {
            let mut row_a = Vec::new();
            let mut row_b = Vec::new();
            for j in 0..size {
                row_a.push(((i + j) % 10) as f64);
                row_b.push(((i * j) % 10) as f64);
            }
            a.push(row_a);
            b.push(row_b);
        }

        let mut result: Vec<Vec<f64>> = Vec::new();
        for i in 0..size {
            let mut row = Vec::new();
            for j in 0..size {
                let mut sum = 0.0;
                for k in 0..size {
                    sum += a[i][k] * b[k][j];
                }
                row.push(sum);
            }
            result.push(row);
        }

        result.into_iter().flatten().collect()
    }

    fn fibonacci(&self, count: u32) -> Vec<Natural> {
        let mut sequence: Vec<Natural> = Vec::new();
        if count >= 1 {
            sequence.push(Natural::zero());
        }
        if count >= 2 {
            sequence.push(Natural::from(1));
        }

        for i in 2..count as usize {
            let next = &sequence[i - 1] + &sequence[i - 2];
            sequence.push(next);
        }

        sequence
    }

    fn hash(&self, iterations: u32) -> u32 {
        let iterations = f64::from(iterations);
        let mut hash = f64::from(HASH_SEED);

        let mut i = 0.0;
        while i < iterations {
            hash = next_seed(hash);
            hash = xor(hash, ushr(hash, 16));
            hash = imul(hash, f64::from(HASH_MIX_1));
            hash = xor(hash, ushr(hash, 13));
            hash = imul(hash, f64::from(HASH_MIX_2));
            hash = xor(hash, ushr(hash, 16));
            hash = to_uint32(hash + i);
            i += 1.0;
        }

        hash as u32
    }

    fn pi(&self, samples: u32) -> f64 {
        if samples == 0 {
            return 0.0;
        }

        let max = f64::from(u32::MAX);
        let mut seed = f64::from(PI_SEED);
        let mut inside = 0.0;

        for _ in 0..samples {
            seed = next_seed(seed);
            let x = (seed / max) * 2.0 - 1.0;

            seed = next_seed(seed);
            let y = (seed / max) * 2.0 - 1.0;

            if x * x + y * y <= 1.0 {
                inside += 1.0;
            }
        }

        4.0 * inside / f64::from(samples)
    }

    fn sort(&self, count: u32) -> Vec<i32> {
        let range = f64::from(SORT_VALUE_RANGE);
        let mut seed = f64::from(SORT_SEED);
        let mut values = Vec::new();

        for _ in 0..count {
            seed = next_seed(seed);
            values.push(seed % range);
        }

        // Numeric comparator `(a, b) => a - b`
        values.sort_by(|a: &f64, b: &f64| (a - b).partial_cmp(&0.0).unwrap_or(Ordering::Equal));
        values.into_iter().map(|v| v as i32).collect()
    }

    fn text(&self, iterations: u32) -> String {
        let mut result = String::new();

        for _ in 0..iterations {
            for ch in TEXT_PHRASE.chars() {
                let converted: String = if ch.is_uppercase() {
                    ch.to_lowercase().collect()
                } else if ch.is_lowercase() {
                    ch.to_uppercase().collect()
                } else {
                    ch.to_string()
                };
                result += &converted;
            }
        }

        result.chars().take(TEXT_PREFIX_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_primes() {
        assert_eq!(Reference.primes(30), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert_eq!(Reference.primes(2), vec![2]);
        assert!(Reference.primes(1).is_empty());
    }

    #[test]
    fn test_small_matrix() {
        // A = [[0,1],[1,2]], B = [[0,0],[0,1]]
        assert_eq!(Reference.matrix(2), vec![0.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_fibonacci_prefix() {
        let seq: Vec<String> = Reference
            .fibonacci(10)
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(seq, ["0", "1", "1", "2", "3", "5", "8", "13", "21", "34"]);
        assert_eq!(Reference.fibonacci(1).len(), 1);
    }

    #[test]
    fn test_hash_first_rounds() {
        assert_eq!(Reference.hash(1), 0x53d4_4bfd);
        assert_eq!(Reference.hash(10), 0xb0d9_9b62);
    }

    #[test]
    fn test_pi_small_sample() {
        assert_eq!(Reference.pi(1000), 3.128);
    }

    #[test]
    fn test_sort_small() {
        assert_eq!(Reference.sort(5), vec![401, 5912, 8454, 9383, 9675]);
    }

    #[test]
    fn test_text_inverts_case() {
        assert_eq!(Reference.text(1), "tHE QUICK BROWN FOX JUMPS OVER THE LAZY DOG");
    }

    #[test]
    fn test_zero_workloads() {
        assert!(Reference.primes(0).is_empty());
        assert!(Reference.matrix(0).is_empty());
        assert!(Reference.fibonacci(0).is_empty());
        assert_eq!(Reference.hash(0), HASH_SEED);
        assert_eq!(Reference.pi(0), 0.0);
        assert!(Reference.sort(0).is_empty());
        assert!(Reference.text(0).is_empty());
    }
}
