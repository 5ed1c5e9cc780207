//! Exact Unsigned Integers
//!
//! Fibonacci term 1000 needs 694 bits. `Natural` wraps [`BigUint`] and
//! exposes only what the kernels and the runner use: addition, ordering and
//! decimal rendering.

use num_bigint::BigUint;
use std::fmt;
use std::ops::{Add, AddAssign};

/// Arbitrary-width unsigned integer
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural(BigUint);

impl Natural {
    /// Zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of decimal digits (1 for zero)
    pub fn decimal_digits(&self) -> usize {
        self.0.to_str_radix(10).len()
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        self.0 += &rhs.0;
    }
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        Natural(&self.0 + &rhs.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = Natural::zero();
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.decimal_digits(), 1);
        assert_eq!(Natural::from(0), zero);
    }

    #[test]
    fn test_carry_past_u64() {
        let sum = &Natural::from(u64::MAX) + &Natural::from(1);
        assert_eq!(sum.to_string(), "18446744073709551616");
        assert_eq!(sum.decimal_digits(), 20);
    }

    #[test]
    fn test_add_assign_into_smaller() {
        let mut small = Natural::from(5);
        let big = &Natural::from(u64::MAX) + &Natural::from(u64::MAX);
        small += &big;
        assert_eq!(small.to_string(), "36893488147419103235");
    }

    #[test]
    fn test_ordering() {
        let a = Natural::from(u64::MAX);
        let b = &a + &Natural::from(1);
        assert!(a < b);
        assert!(Natural::from(3) > Natural::from(2));
    }

    #[test]
    fn test_fibonacci_100() {
        let (mut a, mut b) = (Natural::zero(), Natural::from(1));
        for _ in 0..100 {
            a += &b;
            std::mem::swap(&mut a, &mut b);
        }
        assert_eq!(a.to_string(), "354224848179261915075");
        assert_eq!(a.decimal_digits(), 21);
    }
}
