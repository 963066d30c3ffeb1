//! Adder Kernel v1: Ripple-Carry Summation
//!
//! Drives the full adder from the least-significant position upwards,
//! feeding each carry-out into the next position. A carry left over after
//! the last position is flushed into exactly one extra leading bit.
//!
//! Positions are indices into each sequence, most-significant bit at
//! index 0. An index past the end of the shorter operand contributes 0,
//! so callers wanting value-aligned sums normalize both operands first.

use std::time::Instant;

use tracing::{debug, trace};

use crate::adder::full_adder;
use crate::domain::{AdderStep, Bit, BitSeq};

/// Sum two bit sequences. Output has `max(len)` or `max(len) + 1` bits.
pub fn ripple_sum(a: &BitSeq, b: &BitSeq) -> BitSeq {
    ripple_sum_traced(a, b).0
}

/// Sum two bit sequences, recording every full-adder evaluation.
///
/// Steps are listed in evaluation order (least-significant first). When
/// the final carry is set, one extra flush step with both data bits at 0
/// closes the list; its `index` is `None`.
pub fn ripple_sum_traced(a: &BitSeq, b: &BitSeq) -> (BitSeq, Vec<AdderStep>) {
    let width = a.len().max(b.len());
    let started = Instant::now();

    let mut lsb_first: Vec<Bit> = Vec::with_capacity(width + 1);
    let mut steps: Vec<AdderStep> = Vec::with_capacity(width + 1);
    let mut carry = Bit::Zero;

    for index in (0..width).rev() {
        let bit_a = a.bits().get(index).copied().unwrap_or(Bit::Zero);
        let bit_b = b.bits().get(index).copied().unwrap_or(Bit::Zero);
        let (sum, carry_out) = full_adder(carry, bit_a, bit_b);
        trace!(index, a = %bit_a, b = %bit_b, carry_in = %carry, sum = %sum, carry_out = %carry_out, "full adder step");

        steps.push(AdderStep {
            index: Some(index),
            a: bit_a,
            b: bit_b,
            carry_in: carry,
            sum,
            carry_out,
        });
        lsb_first.push(sum);
        carry = carry_out;
    }

    // Flush. full_adder(1, 0, 0) is (1, 0), so this runs at most once.
    if carry.is_set() {
        let (sum, carry_out) = full_adder(carry, Bit::Zero, Bit::Zero);
        trace!(carry_in = %carry, sum = %sum, "carry flush");
        steps.push(AdderStep {
            index: None,
            a: Bit::Zero,
            b: Bit::Zero,
            carry_in: carry,
            sum,
            carry_out,
        });
        lsb_first.push(sum);
    }

    lsb_first.reverse();
    let result = BitSeq::from(lsb_first);
    debug!(
        width,
        steps = steps.len(),
        elapsed_ns = started.elapsed().as_nanos() as u64,
        result = %result,
        "ripple pass complete"
    );
    (result, steps)
}
