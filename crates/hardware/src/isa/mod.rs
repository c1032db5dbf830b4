//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcodes, function codes, field extraction, format
//! classification, and immediate decoding the fetch-stage predictor needs,
//! organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit), control transfers only.
//! * `rvc`: Standard Extension for Compressed Instructions.

/// Immediate decoding for every control-transfer format.
pub mod decode;

/// Instruction field extraction utilities.
pub mod instruction;

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;

/// Compressed instruction extension (16-bit instruction encoding).
pub mod rvc;

/// Instruction format variants and the classifier.
pub mod variant;

pub use decode::decode_immediate;
pub use variant::{InstructionVariant, classify};
