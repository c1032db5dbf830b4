//! Common utilities and types used throughout the predictor crate.
//!
//! This module provides building blocks shared by the ISA decoder, the
//! prediction unit, and the simulation front end. It includes:
//! 1. **Constants:** Address width, instruction sizes, and register masks.
//! 2. **Error Handling:** The crate-wide error type for loading and parsing.
//! 3. **Literal Parsing:** Numeric literals in decimal, hex, or binary.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types for the loading and parsing layers.
pub mod error;

pub use error::{Error, Result};

/// Parses an unsigned 32-bit literal.
///
/// Accepts `0x`/`0X` hexadecimal, `0b`/`0B` binary, or plain decimal. Underscores
/// are permitted as digit separators (`0x8C21_8363`).
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] when the literal is empty, contains
/// invalid digits, or overflows 32 bits.
pub fn parse_u32(text: &str) -> Result<u32> {
    let cleaned: String = text.trim().chars().filter(|&c| c != '_').collect();
    let (digits, radix) = if let Some(hex) = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
    {
        (hex, 16)
    } else if let Some(bin) = cleaned
        .strip_prefix("0b")
        .or_else(|| cleaned.strip_prefix("0B"))
    {
        (bin, 2)
    } else {
        (cleaned.as_str(), 10)
    };

    u32::from_str_radix(digits, radix).map_err(|_| Error::InvalidNumber(text.to_string()))
}
