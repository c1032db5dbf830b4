//! RISC-V Compressed Extension (C).
//!
//! Only the quadrant tags and the control-transfer encodings are modelled;
//! the predictor never expands compressed words into their 32-bit forms.

/// Quadrant tags and control-transfer funct3/funct4 values.
pub mod constants;
