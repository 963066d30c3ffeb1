#![forbid(unsafe_code)]

//! Adder Runtime v1
//!
//! Console, configuration, reports and verification around the
//! gate-level adder kernel.
//!
//! No arithmetic lives here: every sum is delegated to the kernel.

pub mod config;
pub mod console;
pub mod error;
pub mod report;
pub mod verify;

pub use error::{RuntimeError, RuntimeResult};
