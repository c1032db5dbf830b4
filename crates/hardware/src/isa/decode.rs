//! RISC-V Immediate Decoder.
//!
//! This module reassembles the displacement of every control-transfer format
//! the predictor recognises. Branch and jump immediates are not stored
//! contiguously in the instruction word, so each format has its own gathering
//! rule, followed by two's-complement sign extension from the field's natural
//! width:
//!
//! | Format        | Width | Alignment |
//! |---------------|-------|-----------|
//! | B-type        | 13    | bit 0 = 0 |
//! | J-type        | 21    | bit 0 = 0 |
//! | I-type (JALR) | 12    | verbatim  |
//! | CJ (C.J/JAL)  | 12    | bit 0 = 0 |
//! | CB (C.BxxZ)   | 9     | bit 0 = 0 |

use crate::common::constants::ADDRESS_WIDTH;
use crate::isa::variant::InstructionVariant;

/// I-type: `imm[11:0]` sits in bits 31:20 and needs no reassembly.
const I_IMM_SHIFT: u32 = 20;

// B-type: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`.
// Each field is (shift out of the word, mask, position in the offset).
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_12_MASK: u32 = 0x1;
const B_IMM_12_POS: u32 = 12;

const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_11_MASK: u32 = 0x1;
const B_IMM_11_POS: u32 = 11;

const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_10_5_POS: u32 = 5;

const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_4_1_POS: u32 = 1;

/// Width of the assembled B-type offset.
const B_IMM_BITS: u32 = 13;

// J-type: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`.
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_20_MASK: u32 = 0x1;
const J_IMM_20_POS: u32 = 20;

const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_19_12_POS: u32 = 12;

const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_11_MASK: u32 = 0x1;
const J_IMM_11_POS: u32 = 11;

const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_10_1_POS: u32 = 1;

/// Width of the assembled J-type offset.
const J_IMM_BITS: u32 = 21;

/// Total number of bits in the CJ-format offset (C.J, C.JAL).
const CJ_IMM_BITS: u32 = 12;

/// Total number of bits in the CB-format offset (C.BEQZ, C.BNEZ).
const CB_IMM_BITS: u32 = 9;

/// Decodes the displacement of a classified instruction.
///
/// # Arguments
///
/// * `raw` - The fetched instruction word.
/// * `variant` - The variant `raw` classified as.
///
/// # Returns
///
/// The sign-extended immediate, or `None` for formats without one
/// (compressed indirect jumps and illegal words).
pub fn decode_immediate(raw: u32, variant: InstructionVariant) -> Option<i32> {
    match variant {
        InstructionVariant::BTypeBranch => Some(decode_b_type_imm(raw)),
        InstructionVariant::JTypeJump => Some(decode_j_type_imm(raw)),
        InstructionVariant::ITypeIndirectJump => Some(decode_i_type_imm(raw)),
        InstructionVariant::CompressedJump | InstructionVariant::CompressedJumpLink => {
            Some(decode_cj_type_imm(raw))
        }
        InstructionVariant::CompressedBranch => Some(decode_cb_type_imm(raw)),
        InstructionVariant::CompressedIndirectJump | InstructionVariant::Illegal => None,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// Used for JALR. The top 12 bits are taken verbatim; an arithmetic shift
/// sign-extends them in one step.
pub fn decode_i_type_imm(inst: u32) -> i32 {
    (inst as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for B-Type instructions.
///
/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
pub fn decode_b_type_imm(inst: u32) -> i32 {
    let bit_11 = (inst >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (inst >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (inst >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (inst >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for J-Type instructions.
///
/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
pub fn decode_j_type_imm(inst: u32) -> i32 {
    let bits_19_12 = (inst >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (inst >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (inst >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (inst >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Decodes the offset of the CJ format (C.J, C.JAL).
///
/// Bits 12:2 hold `offset[11|4|9:8|10|6|7|3:1|5]`.
pub fn decode_cj_type_imm(inst: u32) -> i32 {
    let offset = ((inst >> 3) & 0x7) << 1
        | ((inst >> 11) & 1) << 4
        | ((inst >> 2) & 1) << 5
        | ((inst >> 7) & 1) << 6
        | ((inst >> 6) & 1) << 7
        | ((inst >> 9) & 0x3) << 8
        | ((inst >> 8) & 1) << 10
        | ((inst >> 12) & 1) << 11;
    sign_extend(offset, CJ_IMM_BITS)
}

/// Decodes the offset of the CB format (C.BEQZ, C.BNEZ).
///
/// Bits 12:10 hold `offset[8|4:3]`, bits 6:2 hold `offset[7:6|2:1|5]`.
pub fn decode_cb_type_imm(inst: u32) -> i32 {
    let offset = ((inst >> 3) & 0x3) << 1
        | ((inst >> 10) & 0x3) << 3
        | ((inst >> 2) & 1) << 5
        | ((inst >> 5) & 0x3) << 6
        | ((inst >> 12) & 1) << 8;
    sign_extend(offset, CB_IMM_BITS)
}

/// Sign extends a value of `bits` width to a 32-bit signed integer.
///
/// # Arguments
///
/// * `val` - The value to extend; bits above `bits` are discarded.
/// * `bits` - The number of valid bits in `val` (1..=32).
pub const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = ADDRESS_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
