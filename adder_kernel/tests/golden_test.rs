//! Golden fixture test: replays the frozen addition cases and asserts
//! every intermediate sequence matches the recorded value.
//!
//! Fixtures live in tests/golden/cases.json. A failure here means the
//! gate-level behaviour or the canonical serialization changed.

use std::fs;
use std::path::PathBuf;

use adder_kernel::hashing::canonical_hash;
use adder_kernel::{Adder, AdderConfig, Mode, KERNEL_VERSION};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenCase {
    mode: Mode,
    input1: String,
    input2: String,
    left: String,
    right: String,
    width: usize,
    raw_sum: String,
    bits: String,
    value: i64,
    truncated: bool,
    overflow: bool,
    /// Canonical hash of the result under the current KERNEL_VERSION.
    digest: String,
}

fn load_cases() -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("golden")
        .join("cases.json");
    let data = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e));
    serde_json::from_str(&data).expect("Failed to parse golden cases JSON")
}

#[test]
fn golden_cases_match() {
    let cases = load_cases();
    assert!(!cases.is_empty(), "no golden cases loaded");

    for case in &cases {
        let adder = Adder::new(AdderConfig::for_mode(case.mode));
        let r = adder
            .add_text(&case.input1, &case.input2)
            .unwrap_or_else(|e| panic!("{:?}: unexpected error {}", case, e));

        let ctx = format!("{} {} + {}", case.mode, case.input1, case.input2);
        assert_eq!(r.operands[0].bits.to_string(), case.left, "{}: left operand", ctx);
        assert_eq!(r.operands[1].bits.to_string(), case.right, "{}: right operand", ctx);
        assert_eq!(r.width, case.width, "{}: width", ctx);
        assert_eq!(r.raw_sum.to_string(), case.raw_sum, "{}: raw sum", ctx);
        assert_eq!(r.bits.to_string(), case.bits, "{}: result bits", ctx);
        assert_eq!(r.value, case.value, "{}: value", ctx);
        assert_eq!(r.truncated, case.truncated, "{}: truncated", ctx);
        assert_eq!(r.overflow, case.overflow, "{}: overflow", ctx);
    }
}

#[test]
fn golden_cases_without_overflow_are_exact() {
    for case in load_cases().iter().filter(|c| !c.overflow) {
        let x: i64 = case.input1.parse().unwrap();
        let y: i64 = case.input2.parse().unwrap();
        assert_eq!(case.value, x + y, "{} {} + {}", case.mode, x, y);
    }
}

#[test]
fn golden_digests_are_pinned() {
    for case in &load_cases() {
        let adder = Adder::new(AdderConfig::for_mode(case.mode));
        let hash = canonical_hash(&adder.add_text(&case.input1, &case.input2).unwrap());
        assert_eq!(
            hash, case.digest,
            "GOLDEN HASH MISMATCH: {} {} + {}\n\
             Canonical output changed; bump KERNEL_VERSION and regenerate the fixtures.",
            case.mode, case.input1, case.input2
        );
    }
}

#[test]
fn golden_hashes_are_deterministic() {
    for case in &load_cases() {
        let adder = Adder::new(AdderConfig::for_mode(case.mode));
        let h1 = canonical_hash(&adder.add_text(&case.input1, &case.input2).unwrap());
        let h2 = canonical_hash(&adder.add_text(&case.input1, &case.input2).unwrap());
        assert_eq!(
            h1, h2,
            "DETERMINISM FAILURE: {} {} + {}\nRun 1: {}\nRun 2: {}",
            case.mode, case.input1, case.input2, h1, h2
        );
    }
}

#[test]
fn kernel_version_is_one() {
    assert_eq!(KERNEL_VERSION, 1, "KERNEL_VERSION must be 1 until canonical output changes");
}
