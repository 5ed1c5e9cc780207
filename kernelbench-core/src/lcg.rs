//! Shared Generator Constants
//!
//! Both implementations must consume exactly these constants; cross-variant
//! equality depends on it. The generators are for reproducible test data and
//! carry no statistical or cryptographic guarantees.

/// LCG multiplier (glibc `rand` constant)
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;
/// LCG increment
pub const LCG_INCREMENT: u32 = 12_345;

/// Seed for the Monte Carlo π generator
pub const PI_SEED: u32 = 123_456_789;
/// Seed for sort input generation
pub const SORT_SEED: u32 = 42;
/// Generated sort values fall in `[0, SORT_VALUE_RANGE)`
pub const SORT_VALUE_RANGE: u32 = 10_000;

/// Initial hash accumulator
pub const HASH_SEED: u32 = 0x1234_5678;
/// First finalizer multiplier
pub const HASH_MIX_1: u32 = 0x85eb_ca6b;
/// Second finalizer multiplier
pub const HASH_MIX_2: u32 = 0xc2b2_ae35;

/// Phrase repeated by the text kernel
pub const TEXT_PHRASE: &str = "The quick brown fox jumps over the lazy dog";
/// Characters kept from the text kernel's output
pub const TEXT_PREFIX_CHARS: usize = 100;

/// Linear-congruential generator over `u32` with wrapping arithmetic
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Start from `seed`
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advance and return the new state
    #[inline(always)]
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        self.state
    }

    /// Advance and map the new state onto `[-1, 1]`
    #[inline(always)]
    pub fn next_signed_unit(&mut self) -> f64 {
        (self.next_u32() as f64 / u32::MAX as f64) * 2.0 - 1.0
    }
}
