//! Adder Kernel v1: Bit-Length Normalization
//!
//! Widens sequences on their most-significant side. Never narrows:
//! a sequence already at (or past) the target length comes back unchanged.

use tracing::debug;

use crate::domain::{Bit, BitSeq, Mode};

/// Pad with 0 bits up to `len` (unsigned mode).
pub fn zero_extend(bits: &BitSeq, len: usize) -> BitSeq {
    pad(bits, len, Bit::Zero)
}

/// Pad with copies of the sign bit up to `len` (signed mode).
///
/// An empty sequence has no sign bit and is padded as zero.
pub fn sign_extend(bits: &BitSeq, len: usize) -> BitSeq {
    pad(bits, len, bits.sign().unwrap_or(Bit::Zero))
}

/// Extend with the padding policy of `mode`.
pub fn extend(mode: Mode, bits: &BitSeq, len: usize) -> BitSeq {
    match mode {
        Mode::Unsigned => zero_extend(bits, len),
        Mode::Signed => sign_extend(bits, len),
    }
}

/// Align two sequences to the longer of the two lengths.
pub fn normalize(mode: Mode, a: &BitSeq, b: &BitSeq) -> (BitSeq, BitSeq) {
    let len = a.len().max(b.len());
    (extend(mode, a, len), extend(mode, b, len))
}

fn pad(bits: &BitSeq, len: usize, fill: Bit) -> BitSeq {
    let diff = len.saturating_sub(bits.len());
    if diff == 0 {
        return bits.clone();
    }
    let out = bits.with_leading(fill, diff);
    debug!(from = bits.len(), to = out.len(), fill = %fill, "extended bit length");
    out
}
