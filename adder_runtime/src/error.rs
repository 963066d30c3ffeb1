//! Runtime errors.
//!
//! Kernel failures pass through untouched; everything else here comes
//! from the console, the filesystem, or a report that fails verification.

use std::io;

use adder_kernel::AdderError;
use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// All possible runtime failures.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// Operand rejected by the kernel codec.
    #[error(transparent)]
    Adder(#[from] AdderError),

    /// Console or file I/O failed.
    #[error("IoError: {0}")]
    Io(#[from] io::Error),

    /// Input ended before an operand was read.
    #[error("InputClosed: no value entered for {0}")]
    InputClosed(String),

    /// Bounds or mode that the kernel cannot honour.
    #[error("ConfigError: {0}")]
    Config(String),

    /// JSON serialization failed.
    #[error("SerializationError: {0}")]
    Serialization(String),

    /// JSON deserialization failed (malformed, missing or unknown fields).
    #[error("DeserializationError: {0}")]
    Deserialization(String),

    /// Report was produced by a different kernel version.
    #[error("KernelVersionMismatch: report has {found}, kernel is {expected}")]
    KernelVersion { found: u32, expected: u32 },

    /// Stored digest does not match the recomputed one.
    #[error("DigestMismatch: stored {stored}, recomputed {recomputed}")]
    DigestMismatch { stored: String, recomputed: String },

    /// Replay matched the digest but not a field the digest leaves out.
    #[error("ResultMismatch: stored result differs from replay in {0}")]
    ResultMismatch(String),

    /// Two runs over the same operands disagreed.
    #[error("DeterminismFailure: run 1 {first}, run 2 {second}")]
    Determinism { first: String, second: String },
}
