//! Adder Kernel v1: Half and Full Adders
//!
//! Both adders return `(sum, carry)`.

use crate::domain::Bit;
use crate::gates::{and, or, xor};

/// `sum = a XOR b`, `carry = a AND b`.
pub fn half_adder(a: Bit, b: Bit) -> (Bit, Bit) {
    (xor(a, b), and(a, b))
}

/// Two half adders: first on the data bits, second on the carry-in and
/// the first partial sum. Carry-out is set if either stage carried.
pub fn full_adder(carry_in: Bit, a: Bit, b: Bit) -> (Bit, Bit) {
    let (partial, first_carry) = half_adder(a, b);
    let (sum, second_carry) = half_adder(carry_in, partial);
    (sum, or(first_carry, second_carry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use Bit::{One, Zero};

    #[test]
    fn test_half_adder() {
        assert_eq!(half_adder(Zero, Zero), (Zero, Zero));
        assert_eq!(half_adder(Zero, One), (One, Zero));
        assert_eq!(half_adder(One, Zero), (One, Zero));
        assert_eq!(half_adder(One, One), (Zero, One));
    }

    #[test]
    fn test_full_adder_truth_table() {
        // (carry_in, a, b) -> (sum, carry_out)
        let table = [
            ((Zero, Zero, Zero), (Zero, Zero)),
            ((Zero, Zero, One), (One, Zero)),
            ((Zero, One, Zero), (One, Zero)),
            ((Zero, One, One), (Zero, One)),
            ((One, Zero, Zero), (One, Zero)),
            ((One, Zero, One), (Zero, One)),
            ((One, One, Zero), (Zero, One)),
            ((One, One, One), (One, One)),
        ];
        for ((cin, a, b), expected) in table {
            assert_eq!(full_adder(cin, a, b), expected, "cin={} a={} b={}", cin, a, b);
        }
    }

    #[test]
    fn test_full_adder_matches_integer_addition() {
        for cin in [Zero, One] {
            for a in [Zero, One] {
                for b in [Zero, One] {
                    let (sum, carry) = full_adder(cin, a, b);
                    let total = cin.as_u8() + a.as_u8() + b.as_u8();
                    assert_eq!(carry.as_u8() * 2 + sum.as_u8(), total);
                }
            }
        }
    }
}
