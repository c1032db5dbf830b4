//! Instruction Format Classification.
//!
//! Maps an arbitrary fetched word onto exactly one [`InstructionVariant`]. The
//! classifier looks at the quadrant first, since compressed instructions live in
//! the low half-word and use a 2-bit tag distinct from the 7-bit opcode space,
//! then at the opcode (32-bit) or funct3/funct4 (16-bit) fields.
//!
//! Classification is total: any pattern that is not one of the recognised
//! control-transfer encodings resolves to [`InstructionVariant::Illegal`].

use std::fmt;

use serde::Serialize;

use crate::common::constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv32i::{funct3, opcodes};
use crate::isa::rvc::constants::{QUADRANT_0, QUADRANT_1, QUADRANT_2, q1, q2};

/// Instruction format as seen by the fetch-stage predictor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum InstructionVariant {
    /// Conditional branch (BEQ, BNE, BLT, BGE, BLTU, BGEU).
    BTypeBranch,
    /// Unconditional jump and link (JAL).
    JTypeJump,
    /// Register-indirect jump and link (JALR).
    ITypeIndirectJump,
    /// Compressed unconditional jump (C.J).
    CompressedJump,
    /// Compressed jump and link (C.JAL).
    CompressedJumpLink,
    /// Compressed register-indirect jump (C.JR, C.JALR).
    CompressedIndirectJump,
    /// Compressed branch against zero (C.BEQZ, C.BNEZ).
    CompressedBranch,
    /// Anything that is not a recognised control transfer, including the
    /// reserved all-zero quadrant.
    Illegal,
}

impl InstructionVariant {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::BTypeBranch,
        Self::JTypeJump,
        Self::ITypeIndirectJump,
        Self::CompressedJump,
        Self::CompressedJumpLink,
        Self::CompressedIndirectJump,
        Self::CompressedBranch,
        Self::Illegal,
    ];

    /// Returns `true` for the 16-bit encodings.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::CompressedJump
                | Self::CompressedJumpLink
                | Self::CompressedIndirectJump
                | Self::CompressedBranch
        )
    }

    /// Returns `true` for conditional branches, whose direction is guessed.
    pub const fn is_conditional(self) -> bool {
        matches!(self, Self::BTypeBranch | Self::CompressedBranch)
    }

    /// Returns `true` for unconditional transfers, which are always taken.
    pub const fn is_unconditional(self) -> bool {
        matches!(
            self,
            Self::JTypeJump
                | Self::ITypeIndirectJump
                | Self::CompressedJump
                | Self::CompressedJumpLink
                | Self::CompressedIndirectJump
        )
    }

    /// Returns `true` when the target is `pc + immediate`.
    pub const fn is_pc_relative(self) -> bool {
        matches!(
            self,
            Self::BTypeBranch
                | Self::JTypeJump
                | Self::CompressedJump
                | Self::CompressedJumpLink
                | Self::CompressedBranch
        )
    }

    /// Returns `true` when the architectural target depends on a register value.
    pub const fn is_indirect(self) -> bool {
        matches!(self, Self::ITypeIndirectJump | Self::CompressedIndirectJump)
    }

    /// Encoded length in bytes.
    ///
    /// `Illegal` reports 4 bytes; the scanner sizes unknown words from their
    /// low bits instead, see [`InstructionBits::len_bytes`].
    pub const fn len_bytes(self) -> u32 {
        if self.is_compressed() {
            INSTRUCTION_SIZE_16
        } else {
            INSTRUCTION_SIZE_32
        }
    }

    /// Assembly mnemonic of `raw`, which must have classified as `self`.
    pub fn mnemonic(self, raw: u32) -> &'static str {
        match self {
            Self::BTypeBranch => match raw.funct3() {
                funct3::BEQ => "beq",
                funct3::BNE => "bne",
                funct3::BLT => "blt",
                funct3::BGE => "bge",
                funct3::BLTU => "bltu",
                funct3::BGEU => "bgeu",
                _ => "b.reserved",
            },
            Self::JTypeJump => "jal",
            Self::ITypeIndirectJump => "jalr",
            Self::CompressedJump => "c.j",
            Self::CompressedJumpLink => "c.jal",
            Self::CompressedIndirectJump => {
                if raw.c_funct4() == q2::C_JALR {
                    "c.jalr"
                } else {
                    "c.jr"
                }
            }
            Self::CompressedBranch => {
                if raw.c_funct3() == q1::C_BNEZ {
                    "c.bnez"
                } else {
                    "c.beqz"
                }
            }
            Self::Illegal => "-",
        }
    }
}

impl fmt::Display for InstructionVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::BTypeBranch => "B-type branch",
            Self::JTypeJump => "J-type jump",
            Self::ITypeIndirectJump => "I-type indirect jump",
            Self::CompressedJump => "compressed jump",
            Self::CompressedJumpLink => "compressed jump-and-link",
            Self::CompressedIndirectJump => "compressed indirect jump",
            Self::CompressedBranch => "compressed branch",
            Self::Illegal => "illegal",
        };
        f.write_str(name)
    }
}

/// Classifies a fetched instruction word.
///
/// # Arguments
///
/// * `raw` - The fetched word; a compressed instruction occupies bits 15:0.
///
/// # Returns
///
/// The single variant matching `raw`, or `Illegal` as the fallback.
pub fn classify(raw: u32) -> InstructionVariant {
    match raw.quadrant() {
        QUADRANT_0 => InstructionVariant::Illegal,
        QUADRANT_1 => classify_quadrant_1(raw),
        QUADRANT_2 => classify_quadrant_2(raw),
        _ => classify_32bit(raw),
    }
}

fn classify_32bit(raw: u32) -> InstructionVariant {
    match raw.opcode() {
        opcodes::OP_BRANCH => InstructionVariant::BTypeBranch,
        opcodes::OP_JAL => InstructionVariant::JTypeJump,
        opcodes::OP_JALR if raw.funct3() == funct3::JALR => InstructionVariant::ITypeIndirectJump,
        _ => InstructionVariant::Illegal,
    }
}

fn classify_quadrant_1(raw: u32) -> InstructionVariant {
    match raw.c_funct3() {
        q1::C_J => InstructionVariant::CompressedJump,
        q1::C_JAL => InstructionVariant::CompressedJumpLink,
        q1::C_BEQZ | q1::C_BNEZ => InstructionVariant::CompressedBranch,
        _ => InstructionVariant::Illegal,
    }
}

fn classify_quadrant_2(raw: u32) -> InstructionVariant {
    let is_jump_funct4 = matches!(raw.c_funct4(), q2::C_JR | q2::C_JALR);
    // rs2 != 0 is C.MV/C.ADD; rs1 == 0 is reserved (C.JR) or C.EBREAK (C.JALR).
    if is_jump_funct4 && raw.c_rs2() == 0 && raw.c_rs1() != 0 {
        InstructionVariant::CompressedIndirectJump
    } else {
        InstructionVariant::Illegal
    }
}
