//! Hexadecimal helpers for payload diagnostics.
//!
//! [`Hex`] formats lazily so it can be handed to `log` macros without
//! allocating when the level is disabled.

use std::fmt;

/// Display adapter that prints a byte slice as spaced lowercase hex,
/// e.g. `03 02`. Empty slices print as `-`.
#[derive(Debug, Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("-");
        }
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}
