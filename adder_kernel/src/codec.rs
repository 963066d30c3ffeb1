//! Adder Kernel v1: Binary Codec
//!
//! Text → host integer → bit sequence, and back.
//!
//! Unsigned encoding is the plain magnitude (zero is the empty sequence).
//! Signed encoding prepends a 0 sign placeholder to the magnitude and
//! negates the whole sequence for negative values, so zero is `0`.

use std::num::IntErrorKind;

use tracing::debug;

use crate::domain::{AdderConfig, Bit, BitSeq, Mode};
use crate::error::{AdderError, AdderResult};
use crate::signed::twos_complement;

/// Largest integer the host represents exactly: `2^53 - 1`.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Smallest integer the host represents exactly: `-(2^53 - 1)`.
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

// ---------------------------------------------------------------------------
// Parsing and validation
// ---------------------------------------------------------------------------

/// Parse a base-10 token and check it against the configured range.
///
/// Surrounding whitespace is ignored; one leading `+` or `-` is accepted.
/// A well-formed numeral too large for `i64` is a range error, not a
/// parse error.
pub fn parse_integer(text: &str, config: &AdderConfig) -> AdderResult<i64> {
    let token = text.trim();
    let value = token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            let (min, max) = config.effective_bounds();
            AdderError::Range {
                value: token.to_string(),
                min,
                max,
            }
        }
        _ => AdderError::Parse {
            input: text.to_string(),
        },
    })?;
    check_range(value, config)?;
    Ok(value)
}

/// Reject values outside the configured range (clamped to the mode's limits).
pub fn check_range(value: i64, config: &AdderConfig) -> AdderResult<()> {
    let (min, max) = config.effective_bounds();
    if value < min || value > max {
        return Err(AdderError::Range {
            value: value.to_string(),
            min,
            max,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Encoder
// ---------------------------------------------------------------------------

/// Validate `value` and encode it in the configured mode.
pub fn encode(value: i64, config: &AdderConfig) -> AdderResult<BitSeq> {
    check_range(value, config)?;
    let bits = match config.mode {
        Mode::Unsigned => encode_unsigned(value.unsigned_abs()),
        Mode::Signed => encode_signed(value),
    };
    debug!(value, mode = %config.mode, bits = %bits, "encoded operand");
    Ok(bits)
}

/// Parse, validate and encode a text token.
pub fn encode_text(text: &str, config: &AdderConfig) -> AdderResult<(i64, BitSeq)> {
    let value = parse_integer(text, config)?;
    let bits = encode(value, config)?;
    Ok((value, bits))
}

/// Magnitude bits by repeated halving. Zero is the empty sequence.
pub fn encode_unsigned(magnitude: u64) -> BitSeq {
    let mut remainders = Vec::new();
    let mut rest = magnitude;
    while rest > 0 {
        remainders.push(Bit::from_bool(rest % 2 == 1));
        rest /= 2;
    }
    remainders.reverse();
    BitSeq::from(remainders)
}

/// Two's-complement bits: sign placeholder + magnitude, negated if negative.
pub fn encode_signed(value: i64) -> BitSeq {
    let unsigned = encode_unsigned(value.unsigned_abs()).with_leading(Bit::Zero, 1);
    if value < 0 {
        twos_complement(&unsigned)
    } else {
        unsigned
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// Base-2 value of the sequence, most-significant bit first.
///
/// Sequences longer than 63 bits wrap; the kernel never produces one.
pub fn decode(bits: &BitSeq) -> i64 {
    bits.iter()
        .fold(0i64, |acc, bit| acc.wrapping_mul(2).wrapping_add(i64::from(bit.as_u8())))
}

/// Decode a magnitude whose sign the caller has already separated out.
pub fn decode_signed(magnitude: &BitSeq, negative: bool) -> i64 {
    let value = decode(magnitude);
    if negative {
        -value
    } else {
        value
    }
}
