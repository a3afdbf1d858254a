//! Utilities for libnci: small, reusable helpers used across the crate.
//!
//! Hex formatting for payload diagnostics and command timeout defaults.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use timeout::*;
