#![warn(missing_docs)]
//! kernelbench Accelerated Kernels
//!
//! The compiled side of the comparison: the same algorithms as the reference
//! kernels over native fixed-width types. `u32` arithmetic wraps explicitly,
//! buffers are sized up front, and matrices are flat row-major slices. This
//! crate has no host dependencies so it builds unchanged for
//! `wasm32-unknown-unknown`.
//!
//! The [`image`] module carries the canvas filters exported next to the
//! kernels in the browser build.

pub mod image;

use kernelbench_core::{
    HASH_MIX_1, HASH_MIX_2, HASH_SEED, Kernels, LCG_INCREMENT, LCG_MULTIPLIER, Lcg, Natural,
    PI_SEED, SORT_SEED, SORT_VALUE_RANGE, TEXT_PHRASE, TEXT_PREFIX_CHARS, Variant,
};

/// Accelerated implementation of the seven kernels
#[derive(Debug, Clone, Copy, Default)]
pub struct Accelerated;

impl Kernels for Accelerated {
    fn variant(&self) -> Variant {
        Variant::Accelerated
    }

    fn primes(&self, limit: u32) -> Vec<u32> {
        let mut primes = Vec::new();

        for num in 2..=limit {
            let root = (num as f64).sqrt() as u32;
            if (2..=root).all(|divisor| num % divisor != 0) {
                primes.push(num);
            }
        }

        primes
    }

    fn matrix(&self, size: u32) -> Vec<f64> {
        let n = size as usize;
        let mut a = vec![0.0; n * n];
        let mut b = vec![0.0; n * n];
        let mut c = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..n {
                a[i * n + j] = ((i + j) % 10) as f64;
                b[i * n + j] = ((i * j) % 10) as f64;
            }
        }

        for (i, row) in c.chunks_exact_mut(n.max(1)).enumerate().take(n) {
            let a_row = &a[i * n..(i + 1) * n];
            for (j, out) in row.iter_mut().enumerate() {
                let mut sum = 0.0;
                for (k, &a_ik) in a_row.iter().enumerate() {
                    sum += a_ik * b[k * n + j];
                }
                *out = sum;
            }
        }

        c
    }

    fn fibonacci(&self, count: u32) -> Vec<Natural> {
        let count = count as usize;
        let mut sequence = Vec::with_capacity(count);
        if count == 0 {
            return sequence;
        }

        let mut prev = Natural::zero();
        let mut curr = Natural::from(1);
        sequence.push(prev.clone());
        if count >= 2 {
            sequence.push(curr.clone());
        }

        for _ in 2..count {
            // prev <- prev + curr, then rotate so curr holds the newest term
            prev += &curr;
            std::mem::swap(&mut prev, &mut curr);
            sequence.push(curr.clone());
        }

        sequence
    }

    fn hash(&self, iterations: u32) -> u32 {
        let mut hash = HASH_SEED;

        for i in 0..iterations {
            hash = hash.wrapping_mul(LCG_MULTIPLIER).wrapping_add(LCG_INCREMENT);
            hash ^= hash >> 16;
            hash = hash.wrapping_mul(HASH_MIX_1);
            hash ^= hash >> 13;
            hash = hash.wrapping_mul(HASH_MIX_2);
            hash ^= hash >> 16;
            hash = hash.wrapping_add(i);
        }

        hash
    }

    fn pi(&self, samples: u32) -> f64 {
        if samples == 0 {
            return 0.0;
        }

        let mut lcg = Lcg::new(PI_SEED);
        let mut inside = 0u32;

        for _ in 0..samples {
            let x = lcg.next_signed_unit();
            let y = lcg.next_signed_unit();
            if x * x + y * y <= 1.0 {
                inside += 1;
            }
        }

        4.0 * inside as f64 / samples as f64
    }

    fn sort(&self, count: u32) -> Vec<i32> {
        let mut lcg = Lcg::new(SORT_SEED);
        let mut values: Vec<i32> = (0..count)
            .map(|_| (lcg.next_u32() % SORT_VALUE_RANGE) as i32)
            .collect();

        values.sort_unstable();
        values
    }

    fn text(&self, iterations: u32) -> String {
        let mut result = String::with_capacity(TEXT_PHRASE.len() * iterations as usize);

        for _ in 0..iterations {
            for ch in TEXT_PHRASE.chars() {
                push_inverted(&mut result, ch);
            }
        }

        if let Some((cut, _)) = result.char_indices().nth(TEXT_PREFIX_CHARS) {
            result.truncate(cut);
        }
        result
    }
}

/// Append `ch` with its case swapped; ASCII takes a branch-light path
#[inline(always)]
fn push_inverted(out: &mut String, ch: char) {
    if ch.is_ascii() {
        let swapped = if ch.is_ascii_alphabetic() {
            ((ch as u8) ^ 0x20) as char
        } else {
            ch
        };
        out.push(swapped);
    } else if ch.is_uppercase() {
        out.extend(ch.to_lowercase());
    } else if ch.is_lowercase() {
        out.extend(ch.to_uppercase());
    } else {
        out.push(ch);
    }
}
