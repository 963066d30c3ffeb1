//! Report codec: addition result + configuration + digest as JSON.
//!
//! - `build_report`:  AdditionResult → Report (digest from canonical hash)
//! - `encode_report` / `decode_report`: Report ↔ JSON string (strict)
//! - `restore_report`: decode + verification against the kernel
//! - `export_report_to_file` / `import_report_from_file`: file I/O

use std::fs;
use std::path::Path;

use adder_kernel::hashing::canonical_hash;
use adder_kernel::{Adder, AdderConfig, AdditionResult, KERNEL_VERSION};
use serde::{Deserialize, Serialize};

use crate::error::{RuntimeError, RuntimeResult};
use crate::verify::verify_report;

/// Self-describing record of one addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Report {
    pub kernel_version: u32,
    pub config: AdderConfig,
    pub result: AdditionResult,
    /// Canonical hash of `result`, lowercase hex.
    pub digest: String,
}

pub fn build_report(adder: &Adder, result: AdditionResult) -> Report {
    Report {
        kernel_version: KERNEL_VERSION,
        config: *adder.config(),
        digest: canonical_hash(&result),
        result,
    }
}

// ---------------------------------------------------------------------------
// Encoder / decoder
// ---------------------------------------------------------------------------

/// Pretty-printed JSON. Field order follows the struct definitions.
pub fn encode_report(report: &Report) -> RuntimeResult<String> {
    serde_json::to_string_pretty(report).map_err(|e| RuntimeError::Serialization(e.to_string()))
}

/// Strict decode: unknown or missing fields fail. No verification; use
/// `restore_report` for reports from untrusted sources.
pub fn decode_report(json: &str) -> RuntimeResult<Report> {
    serde_json::from_str::<Report>(json).map_err(|e| RuntimeError::Deserialization(e.to_string()))
}

/// Decode and re-run the addition to prove the report is genuine.
pub fn restore_report(json: &str) -> RuntimeResult<Report> {
    let report = decode_report(json)?;
    verify_report(&report)?;
    Ok(report)
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Write a report, creating parent directories if needed.
pub fn export_report_to_file(report: &Report, path: &Path) -> RuntimeResult<()> {
    let json = encode_report(report)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, json.as_bytes())?;
    Ok(())
}

/// Read, decode and verify a report file.
pub fn import_report_from_file(path: &Path) -> RuntimeResult<Report> {
    let content = fs::read_to_string(path)?;
    restore_report(&content)
}
