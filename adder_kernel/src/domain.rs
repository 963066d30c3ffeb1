//! Adder Kernel v1: Core Domain Types
//!
//! Pure data. No gate logic, no arithmetic.
//! Every bit sequence is ordered most-significant bit first.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::error::InvalidBitError;

// ── Bits ───────────────────────────────────────────────────────────

/// A single binary digit. No other value is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    pub fn from_bool(value: bool) -> Self {
        if value {
            Bit::One
        } else {
            Bit::Zero
        }
    }

    pub fn is_set(self) -> bool {
        self == Bit::One
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Bit::Zero => '0',
            Bit::One => '1',
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

impl TryFrom<char> for Bit {
    type Error = InvalidBitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '0' => Ok(Bit::Zero),
            '1' => Ok(Bit::One),
            other => Err(InvalidBitError(other)),
        }
    }
}

// Bits travel as the integers 0 and 1, never as variant names.
impl Serialize for Bit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Bit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u8::deserialize(deserializer)? {
            0 => Ok(Bit::Zero),
            1 => Ok(Bit::One),
            other => Err(D::Error::custom(format!(
                "invalid bit {}: expected 0 or 1",
                other
            ))),
        }
    }
}

/// Ordered bit sequence, most-significant bit first.
///
/// In signed mode `bits[0]` is the sign bit once two's-complement
/// encoding has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BitSeq(Vec<Bit>);

impl BitSeq {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// `len` zero bits.
    pub fn zeros(len: usize) -> Self {
        Self(vec![Bit::Zero; len])
    }

    /// All zeros except a trailing 1: the value one at the given width.
    /// A zero width still yields the single bit `1`.
    pub fn unit(len: usize) -> Self {
        let mut bits = vec![Bit::Zero; len.max(1)];
        if let Some(last) = bits.last_mut() {
            *last = Bit::One;
        }
        Self(bits)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> &[Bit] {
        &self.0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Bit> + ExactSizeIterator + '_ {
        self.0.iter().copied()
    }

    /// Leading bit. In signed mode this is the sign.
    pub fn sign(&self) -> Option<Bit> {
        self.0.first().copied()
    }

    /// New sequence with `fill` prepended `count` times.
    pub fn with_leading(&self, fill: Bit, count: usize) -> Self {
        let mut bits = Vec::with_capacity(self.0.len() + count);
        bits.extend(std::iter::repeat(fill).take(count));
        bits.extend_from_slice(&self.0);
        Self(bits)
    }

    /// New sequence holding the trailing `width` bits (leading bits dropped).
    pub fn low_bits(&self, width: usize) -> Self {
        let skip = self.0.len().saturating_sub(width);
        Self(self.0[skip..].to_vec())
    }

    /// Sequence without its leading bit.
    pub fn without_sign(&self) -> Self {
        Self(self.0.iter().skip(1).copied().collect())
    }
}

impl From<Vec<Bit>> for BitSeq {
    fn from(bits: Vec<Bit>) -> Self {
        Self(bits)
    }
}

impl FromIterator<Bit> for BitSeq {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for BitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.0 {
            write!(f, "{}", bit.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for BitSeq {
    type Err = InvalidBitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars().map(Bit::try_from).collect()
    }
}

// ── Configuration ──────────────────────────────────────────────────

/// Arithmetic mode: plain magnitudes or two's complement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Unsigned,
    Signed,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Unsigned => "unsigned",
            Mode::Signed => "signed",
        }
    }

    /// Hard inclusive limits of the mode, before any narrowing.
    pub fn limits(self) -> (i64, i64) {
        match self {
            Mode::Unsigned => (0, MAX_SAFE_INTEGER),
            Mode::Signed => (MIN_SAFE_INTEGER, MAX_SAFE_INTEGER),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mode plus the inclusive operand range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdderConfig {
    pub mode: Mode,
    pub min: i64,
    pub max: i64,
}

impl AdderConfig {
    pub fn for_mode(mode: Mode) -> Self {
        let (min, max) = mode.limits();
        Self { mode, min, max }
    }

    /// `[0, MAX_SAFE_INTEGER]`, zero-extension, no post-processing.
    pub fn unsigned() -> Self {
        Self::for_mode(Mode::Unsigned)
    }

    /// `[MIN_SAFE_INTEGER, MAX_SAFE_INTEGER]`, sign-extension, two's complement.
    pub fn signed() -> Self {
        Self::for_mode(Mode::Signed)
    }

    pub fn with_bounds(self, min: i64, max: i64) -> Self {
        Self { min, max, ..self }
    }

    /// Configured bounds clamped to the mode's hard limits.
    pub fn effective_bounds(&self) -> (i64, i64) {
        let (lo, hi) = self.mode.limits();
        (self.min.max(lo), self.max.min(hi))
    }
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self::unsigned()
    }
}

// ── Results ────────────────────────────────────────────────────────

/// One full-adder evaluation inside a ripple pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdderStep {
    /// Position in the operand frame (MSB = 0). `None` for the carry flush.
    pub index: Option<usize>,
    pub a: Bit,
    pub b: Bit,
    pub carry_in: Bit,
    pub sum: Bit,
    pub carry_out: Bit,
}

/// An operand after encoding and normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Operand {
    pub value: i64,
    pub bits: BitSeq,
}

/// Structured, immutable outcome of one addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdditionResult {
    pub mode: Mode,
    pub operands: [Operand; 2],
    /// Common operand width after normalization.
    pub width: usize,
    /// Ripple engine output, `width` or `width + 1` bits.
    pub raw_sum: BitSeq,
    /// Representation handed back to the caller.
    pub bits: BitSeq,
    /// Extracted sign bit (signed mode only).
    pub sign: Option<Bit>,
    pub value: i64,
    /// A carry-out bit was dropped to keep the signed width.
    pub truncated: bool,
    /// Fixed-width wrap-around changed the mathematical result.
    pub overflow: bool,
    pub steps: Vec<AdderStep>,
}
