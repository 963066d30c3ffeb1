//! Adder Kernel v1: Two's Complement and Signed-Sum Post-Processing
//!
//! Negation is bitwise inversion followed by adding one through the
//! ripple engine. The post-processor turns a raw signed sum back into a
//! sign and a magnitude.

use tracing::debug;

use crate::codec::decode_signed;
use crate::domain::{Bit, BitSeq};
use crate::gates::not;
use crate::normalize::zero_extend;
use crate::ripple::ripple_sum;

/// Flip every bit.
pub fn invert(bits: &BitSeq) -> BitSeq {
    bits.iter().map(not).collect()
}

/// Add one: ripple-sum with an equal-width `0..01`. Keeps any carry-out,
/// so the result may be one bit wider than the input.
pub fn increment(bits: &BitSeq) -> BitSeq {
    let width = bits.len().max(1);
    ripple_sum(&zero_extend(bits, width), &BitSeq::unit(width))
}

/// Fixed-width two's-complement negation. The carry-out of the
/// increment is dropped, so arithmetic is modulo `2^len`.
pub fn twos_complement(bits: &BitSeq) -> BitSeq {
    increment(&invert(bits)).low_bits(bits.len())
}

/// A raw signed sum reduced to the operand width and split into sign and
/// magnitude.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedSum {
    /// Sum truncated to the operand width, sign bit included.
    pub bits: BitSeq,
    pub sign: Bit,
    /// Absolute value of the result.
    pub magnitude: BitSeq,
    pub value: i64,
    /// Leading overflow bits were dropped.
    pub truncated: bool,
}

/// Post-process a ripple sum of two sign-extended operands of `width` bits.
///
/// 1. Drop leading bits beyond `width`.
/// 2. Take the leading bit as the sign.
/// 3. Negative: invert the rest and add one; the increment keeps its
///    carry so `-2^(width-1)` yields its full magnitude.
/// 4. Non-negative: the rest is the magnitude.
pub fn resolve_signed_sum(sum: &BitSeq, width: usize) -> SignedSum {
    let truncated = sum.len() > width;
    let fixed = sum.low_bits(width);
    let sign = fixed.sign().unwrap_or(Bit::Zero);
    let rest = fixed.without_sign();

    let negative = sign.is_set();
    let magnitude = if negative {
        increment(&invert(&rest))
    } else {
        rest
    };
    let value = decode_signed(&magnitude, negative);
    debug!(raw = %sum, fixed = %fixed, truncated, sign = %sign, magnitude = %magnitude, value, "resolved signed sum");

    SignedSum {
        bits: fixed,
        sign,
        magnitude,
        value,
        truncated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::encode_signed;

    fn bits(s: &str) -> BitSeq {
        s.parse().unwrap()
    }

    #[test]
    fn test_invert() {
        assert_eq!(invert(&bits("10110")), bits("01001"));
        assert!(invert(&BitSeq::new()).is_empty());
    }

    #[test]
    fn test_increment_keeps_carry() {
        assert_eq!(increment(&bits("011")), bits("100"));
        assert_eq!(increment(&bits("111")), bits("1000"));
        assert_eq!(increment(&BitSeq::new()), bits("1"));
    }

    #[test]
    fn test_twos_complement_fixed_width() {
        assert_eq!(twos_complement(&bits("0101")), bits("1011"));
        assert_eq!(twos_complement(&bits("1011")), bits("0101"));
        // Zero negates to itself; the carry-out is dropped.
        assert_eq!(twos_complement(&bits("0000")), bits("0000"));
    }

    #[test]
    fn test_twos_complement_involution() {
        for x in -300i64..=300 {
            let encoded = encode_signed(x);
            assert_eq!(twos_complement(&twos_complement(&encoded)), encoded, "x={}", x);
        }
    }

    #[test]
    fn test_resolve_positive() {
        // 0101 + 1101 = 10010 -> 0010
        let resolved = resolve_signed_sum(&bits("10010"), 4);
        assert!(resolved.truncated);
        assert_eq!(resolved.sign, Bit::Zero);
        assert_eq!(resolved.bits, bits("0010"));
        assert_eq!(resolved.value, 2);
    }

    #[test]
    fn test_resolve_most_negative() {
        // 1011 + 1101 = 11000 -> 1000 -> -(111 + 1) = -8
        let resolved = resolve_signed_sum(&bits("11000"), 4);
        assert_eq!(resolved.sign, Bit::One);
        assert_eq!(resolved.magnitude, bits("1000"));
        assert_eq!(resolved.value, -8);
    }

    #[test]
    fn test_resolve_without_truncation() {
        let resolved = resolve_signed_sum(&bits("1110"), 4);
        assert!(!resolved.truncated);
        assert_eq!(resolved.value, -2);
    }

    #[test]
    fn test_resolve_single_sign_bit() {
        assert_eq!(resolve_signed_sum(&bits("1"), 1).value, -1);
        assert_eq!(resolve_signed_sum(&bits("0"), 1).value, 0);
    }
}
