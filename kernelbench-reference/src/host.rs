//! Host Number Model
//!
//! Every value is an IEEE-754 double. Integer semantics only exist through
//! the coercions below, which mirror what a dynamically-typed host applies
//! around its bitwise and unsigned-shift operators.

const TWO_POW_16: f64 = 65_536.0;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// `x >>> 0`: truncate, then reduce modulo 2^32 into `[0, 2^32)`
#[inline]
pub(crate) fn to_uint32(x: f64) -> f64 {
    if !x.is_finite() {
        return 0.0;
    }
    x.trunc().rem_euclid(TWO_POW_32)
}

/// Low 32 bits of `a * b` as an unsigned number
///
/// The full product can exceed 2^53, so it is assembled from 16-bit halves,
/// keeping every intermediate exactly representable.
#[inline]
pub(crate) fn imul(a: f64, b: f64) -> f64 {
    let a = to_uint32(a);
    let b = to_uint32(b);
    let (a_hi, a_lo) = ((a / TWO_POW_16).floor(), a % TWO_POW_16);
    let (b_hi, b_lo) = ((b / TWO_POW_16).floor(), b % TWO_POW_16);

    let cross = ((a_hi * b_lo + a_lo * b_hi) % TWO_POW_16) * TWO_POW_16;
    to_uint32(a_lo * b_lo + cross)
}

/// `x >>> bits`
#[inline]
pub(crate) fn ushr(x: f64, bits: u32) -> f64 {
    (to_uint32(x) / f64::from(1u32 << bits)).floor()
}

/// `(a ^ b) >>> 0`
///
/// Bitwise xor has no arithmetic equivalent, so the operands leave the number
/// domain for the duration of the operator, as they do in the host.
#[inline]
pub(crate) fn xor(a: f64, b: f64) -> f64 {
    f64::from(to_uint32(a) as u32 ^ to_uint32(b) as u32)
}
