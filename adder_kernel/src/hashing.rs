//! Adder Kernel v1: Canonical Hashing
//!
//! Deterministic canonical serialization + SHA-256 hashing of an
//! addition result.
//!
//! Rules:
//!   - Fixed field order, kernel_version first
//!   - Bit sequences as `0`/`1` strings
//!   - Full-adder steps excluded (derivable from the operands)
//!   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::{AdditionResult, BitSeq, Operand};
use crate::KERNEL_VERSION;

/// Canonical serialization of an AdditionResult to UTF-8 JSON bytes.
pub fn canonical_serialize(result: &AdditionResult) -> Vec<u8> {
    build_canonical_value(result).to_string().into_bytes()
}

/// SHA-256 of the canonical serialization. Lowercase hex string.
pub fn canonical_hash(result: &AdditionResult) -> String {
    let digest = Sha256::digest(canonical_serialize(result));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

fn bits_value(bits: &BitSeq) -> Value {
    Value::String(bits.to_string())
}

fn operand_value(operand: &Operand) -> Value {
    let mut map = Map::new();
    map.insert("value".to_string(), Value::Number(operand.value.into()));
    map.insert("bits".to_string(), bits_value(&operand.bits));
    Value::Object(map)
}

/// Field order: kernel_version, mode, operands, width, raw_sum, bits,
///              value, truncated, overflow
fn build_canonical_value(result: &AdditionResult) -> Value {
    let mut root = Map::new();
    root.insert(
        "kernel_version".to_string(),
        Value::Number(i64::from(KERNEL_VERSION).into()),
    );
    root.insert(
        "mode".to_string(),
        Value::String(result.mode.as_str().to_string()),
    );
    root.insert(
        "operands".to_string(),
        Value::Array(result.operands.iter().map(operand_value).collect()),
    );
    root.insert(
        "width".to_string(),
        Value::Number((result.width as u64).into()),
    );
    root.insert("raw_sum".to_string(), bits_value(&result.raw_sum));
    root.insert("bits".to_string(), bits_value(&result.bits));
    root.insert("value".to_string(), Value::Number(result.value.into()));
    root.insert("truncated".to_string(), Value::Bool(result.truncated));
    root.insert("overflow".to_string(), Value::Bool(result.overflow));
    Value::Object(root)
}
