//! Adder Kernel v1: Engine
//!
//! Top-level orchestrator for one addition:
//!   text → codec → normalizer → ripple engine → (signed) post-processor
//!
//! The engine holds only its configuration. Each call owns every
//! intermediate sequence it creates.

use tracing::{debug, info};

use crate::codec::{decode, encode, encode_text};
use crate::domain::{AdderConfig, AdditionResult, Bit, BitSeq, Mode, Operand};
use crate::error::AdderResult;
use crate::normalize::extend;
use crate::ripple::ripple_sum_traced;
use crate::signed::resolve_signed_sum;

/// Stateless adder bound to a mode and operand range.
#[derive(Debug, Clone, Default)]
pub struct Adder {
    config: AdderConfig,
}

impl Adder {
    pub fn new(config: AdderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdderConfig {
        &self.config
    }

    /// Parse both tokens, then add. The first invalid token aborts the
    /// whole computation.
    pub fn add_text(&self, first: &str, second: &str) -> AdderResult<AdditionResult> {
        let (x, encoded_x) = encode_text(first, &self.config)?;
        let (y, encoded_y) = encode_text(second, &self.config)?;
        Ok(self.add_encoded(x, encoded_x, y, encoded_y))
    }

    /// Add two host integers through the gate-level pipeline:
    ///   1. Encode both operands (range-checked)
    ///   2. Normalize to a common width (at least one bit)
    ///   3. Ripple-carry sum
    ///   4. Unsigned: decode the sum as is
    ///      Signed: truncate to width, split sign, re-negate if negative
    pub fn add(&self, x: i64, y: i64) -> AdderResult<AdditionResult> {
        let encoded_x = encode(x, &self.config)?;
        let encoded_y = encode(y, &self.config)?;
        Ok(self.add_encoded(x, encoded_x, y, encoded_y))
    }

    fn add_encoded(&self, x: i64, encoded_x: BitSeq, y: i64, encoded_y: BitSeq) -> AdditionResult {
        let mode = self.config.mode;
        let width = encoded_x.len().max(encoded_y.len()).max(1);
        debug!(x_len = encoded_x.len(), y_len = encoded_y.len(), width, "normalizing operands");
        let left = extend(mode, &encoded_x, width);
        let right = extend(mode, &encoded_y, width);

        let (raw_sum, steps) = ripple_sum_traced(&left, &right);

        let result = match mode {
            Mode::Unsigned => AdditionResult {
                mode,
                value: decode(&raw_sum),
                bits: raw_sum.clone(),
                raw_sum,
                sign: None,
                truncated: false,
                overflow: false,
                width,
                steps,
                operands: [
                    Operand { value: x, bits: left },
                    Operand { value: y, bits: right },
                ],
            },
            Mode::Signed => {
                let resolved = resolve_signed_sum(&raw_sum, width);
                let sign_x = left.sign().unwrap_or(Bit::Zero);
                let sign_y = right.sign().unwrap_or(Bit::Zero);
                // Same-signed operands with a differently signed sum wrapped.
                let overflow = sign_x == sign_y && resolved.sign != sign_x;
                AdditionResult {
                    mode,
                    value: resolved.value,
                    bits: resolved.bits,
                    raw_sum,
                    sign: Some(resolved.sign),
                    truncated: resolved.truncated,
                    overflow,
                    width,
                    steps,
                    operands: [
                        Operand { value: x, bits: left },
                        Operand { value: y, bits: right },
                    ],
                }
            }
        };

        info!(
            mode = %mode,
            x,
            y,
            bits = %result.bits,
            value = result.value,
            overflow = result.overflow,
            "addition complete"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MAX_SAFE_INTEGER;

    fn bits(s: &str) -> BitSeq {
        s.parse().unwrap()
    }

    #[test]
    fn test_unsigned_five_plus_three() {
        let r = Adder::new(AdderConfig::unsigned()).add_text("5", "3").unwrap();
        assert_eq!(r.operands[0].bits, bits("101"));
        assert_eq!(r.operands[1].bits, bits("011"));
        assert_eq!(r.bits, bits("1000"));
        assert_eq!(r.value, 8);
        assert_eq!(r.width, 3);
        assert_eq!(r.sign, None);
        assert_eq!(r.steps.len(), 4);
    }

    #[test]
    fn test_signed_five_plus_minus_three() {
        let r = Adder::new(AdderConfig::signed()).add_text("5", "-3").unwrap();
        assert_eq!(r.operands[1].bits, bits("1101"));
        assert_eq!(r.raw_sum, bits("10010"));
        assert_eq!(r.bits, bits("0010"));
        assert_eq!(r.value, 2);
        assert!(r.truncated);
        assert!(!r.overflow);
    }

    #[test]
    fn test_signed_minus_five_plus_minus_three() {
        let r = Adder::new(AdderConfig::signed()).add_text("-5", "-3").unwrap();
        assert_eq!(r.bits, bits("1000"));
        assert_eq!(r.sign, Some(Bit::One));
        assert_eq!(r.value, -8);
        assert!(!r.overflow);
    }

    #[test]
    fn test_zero_plus_zero_is_single_zero_bit() {
        for cfg in [AdderConfig::unsigned(), AdderConfig::signed()] {
            let r = Adder::new(cfg).add_text("0", "0").unwrap();
            assert_eq!(r.value, 0);
            assert_eq!(r.bits, bits("0"));
        }
    }

    #[test]
    fn test_signed_wraps_at_fixed_width() {
        // 0101 + 0011 = 1000 in four bits
        let r = Adder::new(AdderConfig::signed()).add(5, 3).unwrap();
        assert_eq!(r.bits, bits("1000"));
        assert_eq!(r.value, -8);
        assert!(r.overflow);
        assert!(!r.truncated);
    }

    #[test]
    fn test_unsigned_max_safe_integer_grows_one_bit() {
        let r = Adder::new(AdderConfig::unsigned())
            .add(MAX_SAFE_INTEGER, MAX_SAFE_INTEGER)
            .unwrap();
        assert_eq!(r.width, 53);
        assert_eq!(r.bits.len(), 54);
        assert_eq!(r.value, 2 * MAX_SAFE_INTEGER);
    }

    #[test]
    fn test_text_and_integer_entry_agree() {
        let adder = Adder::new(AdderConfig::signed());
        assert_eq!(adder.add_text(" -37 ", "+64").unwrap(), adder.add(-37, 64).unwrap());
    }

    #[test]
    fn test_errors_propagate() {
        let adder = Adder::default();
        assert!(adder.add_text("abc", "1").unwrap_err().is_parse());
        assert!(adder.add_text("1", "abc").unwrap_err().is_parse());
        assert!(adder.add_text("9007199254740992", "1").unwrap_err().is_range());
        assert!(adder.add(-1, 1).unwrap_err().is_range());
    }
}
