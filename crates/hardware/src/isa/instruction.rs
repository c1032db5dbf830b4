//! Instruction encoding and field extraction utilities.
//!
//! Provides bit extraction for the fields the fetch-stage predictor inspects,
//! covering both the 32-bit base encoding and the 16-bit compressed (RVC)
//! encoding. A fetched word always carries a compressed instruction in its low
//! half, so the compressed accessors only ever look at bits 15:0.

use crate::common::constants::{
    COMPRESSED_INSTRUCTION_MASK, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32,
    UNCOMPRESSED_INSTRUCTION_VALUE,
};

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the compressed funct4 field (bits 12-15).
pub const C_FUNCT4_MASK: u32 = 0xF;
/// Bit mask for the 5-bit compressed register fields.
pub const C_REG_MASK: u32 = 0x1F;

/// Trait for extracting instruction fields from a fetched instruction word.
///
/// Provides the standard 32-bit fields plus the compressed-format fields
/// needed to recognise control-transfer instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// Only meaningful when the word holds a 32-bit instruction.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> u8;

    /// Extracts the first source register field (bits 15-19).
    ///
    /// For JALR this is the base register whose value the fetch stage cannot see.
    fn rs1(&self) -> u8;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the quadrant (bits 0-1).
    ///
    /// Quadrants 0-2 hold compressed instructions; `0b11` marks a 32-bit one.
    fn quadrant(&self) -> u32;

    /// Extracts the compressed funct3 field (bits 13-15).
    fn c_funct3(&self) -> u32;

    /// Extracts the compressed funct4 field (bits 12-15).
    fn c_funct4(&self) -> u32;

    /// Extracts the full-width compressed rs1/rd field (bits 7-11).
    fn c_rs1(&self) -> u8;

    /// Extracts the full-width compressed rs2 field (bits 2-6).
    fn c_rs2(&self) -> u8;

    /// Returns `true` when the low half-word holds a 16-bit instruction.
    fn is_compressed(&self) -> bool;

    /// Returns the encoded length of the instruction in bytes (2 or 4).
    fn len_bytes(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> 7) & RD_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> 15) & RS1_MASK) as u8
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn quadrant(&self) -> u32 {
        self & COMPRESSED_INSTRUCTION_MASK
    }

    #[inline(always)]
    fn c_funct3(&self) -> u32 {
        (self >> 13) & FUNCT3_MASK
    }

    #[inline(always)]
    fn c_funct4(&self) -> u32 {
        (self >> 12) & C_FUNCT4_MASK
    }

    #[inline(always)]
    fn c_rs1(&self) -> u8 {
        ((self >> 7) & C_REG_MASK) as u8
    }

    #[inline(always)]
    fn c_rs2(&self) -> u8 {
        ((self >> 2) & C_REG_MASK) as u8
    }

    #[inline(always)]
    fn is_compressed(&self) -> bool {
        self.quadrant() != UNCOMPRESSED_INSTRUCTION_VALUE
    }

    /// Length is decided solely by bits 1:0; longer (48/64-bit) encodings are
    /// not supported by RV32IC and are treated as 32-bit.
    #[inline(always)]
    fn len_bytes(&self) -> u32 {
        if self.is_compressed() {
            INSTRUCTION_SIZE_16
        } else {
            INSTRUCTION_SIZE_32
        }
    }
}
