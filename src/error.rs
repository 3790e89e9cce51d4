//! Unified error types for the scoring engine.
//!
//! A single `Error` enum that every scoring function can return, keeping
//! the service layer's error handling uniform. All variants are `Copy` so
//! they pass through the service and event paths without allocation.
//!
//! Most arithmetic edge cases never reach this type: they are resolved
//! locally to safe defaults (clamped scores, a stable trend). Only strict
//! callers see `InvalidValue` or `DivideByZero`.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level engine error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An input was outside its valid domain (negative or NaN AQI under
    /// the strict policy).  Carries the offending field name.
    InvalidValue(&'static str),
    /// A trend baseline averaged to zero, so a percent change is undefined.
    DivideByZero,
    /// Configuration failed range validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(field) => write!(f, "invalid value: {field}"),
            Self::DivideByZero => write!(f, "trend baseline is zero"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Engine-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
