//! Global Predictor Constants.
//!
//! This module defines constants shared by the decoder, the prediction unit,
//! and the fetch-stream scanner. It includes:
//! 1. **Address Constants:** Width of the fetch address space.
//! 2. **Instruction Constants:** Encoding sizes and the length-detection mask.
//! 3. **Register Constants:** Width of a register index.

/// Width of a fetch address in bits (RV32).
pub const ADDRESS_WIDTH: u32 = 32;

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_16: u32 = 2;

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: u32 = 4;

/// Bit mask for checking if an instruction is compressed.
pub const COMPRESSED_INSTRUCTION_MASK: u32 = 0x3;

/// Value of the low two bits that marks a full 32-bit instruction.
///
/// Any other value in bits 1:0 selects one of the three compressed quadrants.
pub const UNCOMPRESSED_INSTRUCTION_VALUE: u32 = 0x3;

/// Bit mask for a 5-bit register index (x0..x31).
pub const REGISTER_INDEX_MASK: u8 = 0x1F;

/// Magic bytes at the start of every ELF image.
pub const ELF_MAGIC: [u8; 4] = [0x7F, b'E', b'L', b'F'];
