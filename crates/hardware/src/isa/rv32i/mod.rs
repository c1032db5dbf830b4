//! RISC-V Base Integer Instruction Set (I), 32-bit.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes of the branch and jump instructions.
//! - `funct3`: Minor opcodes distinguishing the branch conditions and JALR.

/// Function code 3 definitions for branches and JALR.
pub mod funct3;

/// Base integer instruction set opcodes.
pub mod opcodes;
