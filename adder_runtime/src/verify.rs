//! Verification: determinism checks, report re-verification, and a
//! cross-check of the simulated sum against native integer arithmetic.

use adder_kernel::hashing::canonical_hash;
use adder_kernel::{Adder, AdditionResult, Mode, KERNEL_VERSION};
use tracing::{debug, warn};

use crate::config::validate_config;
use crate::error::{RuntimeError, RuntimeResult};
use crate::report::Report;

/// Run the same addition twice and require identical canonical hashes.
/// Returns the hash.
pub fn verify_determinism(adder: &Adder, x: i64, y: i64) -> RuntimeResult<String> {
    let first = canonical_hash(&adder.add(x, y)?);
    let second = canonical_hash(&adder.add(x, y)?);
    if first != second {
        return Err(RuntimeError::Determinism { first, second });
    }
    Ok(first)
}

/// Check a report against the running kernel:
///   1. Kernel version must match
///   2. Stored configuration must be valid
///   3. Stored digest must match the stored result
///   4. Re-running the stored operands must reproduce the digest
///   5. The replayed result must equal the stored one field for field,
///      covering the sign and full-adder steps the digest leaves out
pub fn verify_report(report: &Report) -> RuntimeResult<()> {
    if report.kernel_version != KERNEL_VERSION {
        return Err(RuntimeError::KernelVersion {
            found: report.kernel_version,
            expected: KERNEL_VERSION,
        });
    }
    validate_config(&report.config)?;

    let stored = canonical_hash(&report.result);
    if stored != report.digest {
        warn!(stored = %report.digest, computed = %stored, "report result does not match its digest");
        return Err(RuntimeError::DigestMismatch {
            stored: report.digest.clone(),
            recomputed: stored,
        });
    }

    let [x, y] = [report.result.operands[0].value, report.result.operands[1].value];
    let replayed = Adder::new(report.config).add(x, y)?;
    let recomputed = canonical_hash(&replayed);
    if recomputed != report.digest {
        warn!(stored = %report.digest, recomputed = %recomputed, "replay diverged from report");
        return Err(RuntimeError::DigestMismatch {
            stored: report.digest.clone(),
            recomputed,
        });
    }
    if let Some(field) = first_difference(&report.result, &replayed) {
        warn!(field, "stored result differs from replay");
        return Err(RuntimeError::ResultMismatch(field.to_string()));
    }
    debug!(digest = %recomputed, "report verified");
    Ok(())
}

fn first_difference(stored: &AdditionResult, replayed: &AdditionResult) -> Option<&'static str> {
    if stored == replayed {
        None
    } else if stored.sign != replayed.sign {
        Some("sign")
    } else if stored.steps != replayed.steps {
        Some("steps")
    } else {
        Some("result")
    }
}

/// Simulated sum next to the sum computed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCheck {
    pub simulated: i64,
    /// Host sum, wrapped to the operand width in signed mode.
    pub native: i64,
    /// Mathematically exact sum.
    pub exact: i128,
    pub matches: bool,
}

/// Compare a result with native arithmetic at the same width.
pub fn compare_with_native(result: &AdditionResult) -> NativeCheck {
    let [x, y] = [result.operands[0].value, result.operands[1].value];
    let exact = i128::from(x) + i128::from(y);
    let native = match result.mode {
        Mode::Unsigned => exact as i64,
        Mode::Signed => wrap_to_width(exact, result.width),
    };
    NativeCheck {
        simulated: result.value,
        native,
        exact,
        matches: result.value == native,
    }
}

/// Two's-complement wrap of `value` into `width` bits.
fn wrap_to_width(value: i128, width: usize) -> i64 {
    if width == 0 || width >= 127 {
        return value as i64;
    }
    let modulus = 1i128 << width;
    let mut wrapped = value.rem_euclid(modulus);
    if wrapped >= modulus >> 1 {
        wrapped -= modulus;
    }
    wrapped as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::build_report;
    use adder_kernel::{AdderConfig, Bit};

    #[test]
    fn test_determinism_returns_hash() {
        let adder = Adder::new(AdderConfig::signed());
        let hash = verify_determinism(&adder, -5, -3).unwrap();
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_verify_report_accepts_genuine() {
        let adder = Adder::default();
        let report = build_report(&adder, adder.add(1000, 24).unwrap());
        verify_report(&report).unwrap();
    }

    #[test]
    fn test_verify_report_rejects_forged_result() {
        let adder = Adder::default();
        let mut report = build_report(&adder, adder.add(1, 2).unwrap());
        // Forge a consistent result for different operands.
        report.result = adder.add(1, 3).unwrap();
        report.result.operands[1].value = 2;
        report.digest = canonical_hash(&report.result);
        assert!(matches!(
            verify_report(&report),
            Err(RuntimeError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_report_rejects_edited_steps() {
        let adder = Adder::new(AdderConfig::signed());
        let mut report = build_report(&adder, adder.add(-5, -3).unwrap());
        report.result.steps.clear();
        assert_eq!(canonical_hash(&report.result), report.digest);
        assert!(matches!(
            verify_report(&report),
            Err(RuntimeError::ResultMismatch(ref field)) if field == "steps"
        ));
    }

    #[test]
    fn test_verify_report_rejects_edited_sign() {
        let adder = Adder::new(AdderConfig::signed());
        let mut report = build_report(&adder, adder.add(-5, -3).unwrap());
        report.result.sign = Some(Bit::Zero);
        assert!(matches!(
            verify_report(&report),
            Err(RuntimeError::ResultMismatch(ref field)) if field == "sign"
        ));
    }

    #[test]
    fn test_verify_report_rejects_other_kernel() {
        let adder = Adder::default();
        let mut report = build_report(&adder, adder.add(1, 2).unwrap());
        report.kernel_version = 2;
        assert!(matches!(
            verify_report(&report),
            Err(RuntimeError::KernelVersion { found: 2, expected: 1 })
        ));
    }

    #[test]
    fn test_native_check_exact() {
        let result = Adder::default().add(12345678, 87654321).unwrap();
        let check = compare_with_native(&result);
        assert!(check.matches);
        assert_eq!(check.native, 99999999);
    }

    #[test]
    fn test_native_check_wrapped() {
        let result = Adder::new(AdderConfig::signed()).add(5, 3).unwrap();
        let check = compare_with_native(&result);
        assert!(check.matches);
        assert_eq!(check.native, -8);
        assert_eq!(check.exact, 8);
    }

    #[test]
    fn test_wrap_to_width() {
        assert_eq!(wrap_to_width(8, 4), -8);
        assert_eq!(wrap_to_width(7, 4), 7);
        assert_eq!(wrap_to_width(-9, 4), 7);
    }
}
