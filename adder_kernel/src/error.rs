//! Adder Kernel v1: Errors
//!
//! Only the codec boundary can fail. Everything downstream of a
//! validated operand is total.

use thiserror::Error;

pub type AdderResult<T> = Result<T, AdderError>;

/// Failures surfaced to the caller of an addition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdderError {
    /// Text is not a base-10 integer.
    #[error("ParseError: {input:?} is not a base-10 integer")]
    Parse { input: String },

    /// Numeral outside the configured inclusive range.
    #[error("RangeError: {value} is outside the supported range {min} - {max}")]
    Range { value: String, min: i64, max: i64 },
}

impl AdderError {
    pub fn is_parse(&self) -> bool {
        matches!(self, AdderError::Parse { .. })
    }

    pub fn is_range(&self) -> bool {
        matches!(self, AdderError::Range { .. })
    }
}

/// A character other than `0` or `1` in a textual bit sequence.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("invalid bit character {0:?}: expected '0' or '1'")]
pub struct InvalidBitError(pub char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AdderError::Parse { input: "abc".into() };
        assert!(err.to_string().starts_with("ParseError"));
        assert!(err.is_parse());

        let err = AdderError::Range { value: "-1".into(), min: 0, max: 7 };
        assert_eq!(
            err.to_string(),
            "RangeError: -1 is outside the supported range 0 - 7"
        );
        assert!(err.is_range());
    }
}
