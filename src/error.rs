//! Unified error type for ledcycle.
//!
//! We avoid `alloc` - all error variants are fieldless.
//! Implements `defmt::Format` for on-target logging when the `defmt`
//! feature is enabled.

use core::fmt;

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Driving or reading back the LED pin failed.
    Pin,

    /// The debug text channel rejected a write.
    DebugOutput,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Pin => f.write_str("LED pin operation failed"),
            Error::DebugOutput => f.write_str("debug output write failed"),
        }
    }
}
