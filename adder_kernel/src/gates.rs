//! Adder Kernel v1: Bit Gates
//!
//! Single-bit combinational gates. Total over {0,1}, no side effects.

use crate::domain::Bit;

/// 1 iff exactly one input is 1.
pub fn xor(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a != b)
}

/// 1 iff both inputs are 1.
pub fn and(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a.is_set() && b.is_set())
}

/// 1 iff at least one input is 1.
pub fn or(a: Bit, b: Bit) -> Bit {
    Bit::from_bool(a.is_set() || b.is_set())
}

/// Inverter, used by two's-complement negation.
pub fn not(a: Bit) -> Bit {
    Bit::from_bool(!a.is_set())
}
