#![forbid(unsafe_code)]

//! Adder Kernel v1: gate-level binary addition.
//!
//! Half adders compose into a full adder, the full adder ripples across a
//! bit sequence, and a small codec moves between host integers and bits in
//! either unsigned or two's-complement form.

/// Kernel v1. Bumped whenever canonical output changes.
pub const KERNEL_VERSION: u32 = 1;

pub mod adder;
pub mod codec;
pub mod domain;
pub mod engine;
pub mod error;
pub mod gates;
pub mod hashing;
pub mod normalize;
pub mod ripple;
pub mod signed;

pub use domain::{AdderConfig, AdderStep, AdditionResult, Bit, BitSeq, Mode, Operand};
pub use engine::Adder;
pub use error::{AdderError, AdderResult};
