//! Immediate reassembly and sign extension.

use proptest::prelude::*;
use rstest::rstest;
use rvsbp_core::isa::decode::{
    decode_b_type_imm, decode_cb_type_imm, decode_cj_type_imm, decode_i_type_imm,
    decode_immediate, decode_j_type_imm, sign_extend,
};
use rvsbp_core::isa::variant::{InstructionVariant, classify};

use crate::common::encode;

#[rstest]
#[case(0x8C21_8363, -3898)]
#[case(0x6C21_83E3, 3782)]
#[case(0x0804_0A63, 148)]
#[case(0xFE00_0E63, -2052)]
fn b_type_reference_words(#[case] raw: u32, #[case] expected: i32) {
    assert_eq!(decode_b_type_imm(raw), expected);
}

#[rstest]
#[case(0x126C_F16F, 0x000C_F126)]
#[case(0x926C_F16F, -0x0003_0EDA)]
#[case(0x4840_006F, 0x484)]
#[case(0x4840_00EF, 0x484)]
fn j_type_reference_words(#[case] raw: u32, #[case] expected: i32) {
    assert_eq!(decode_j_type_imm(raw), expected);
}

#[rstest]
#[case(0x7631_01E7, 0x763)]
#[case(0xF631_01E7, -157)]
fn i_type_reference_words(#[case] raw: u32, #[case] expected: i32) {
    assert_eq!(decode_i_type_imm(raw), expected);
}

#[test]
fn i_type_keeps_bit_zero() {
    assert_eq!(decode_i_type_imm(encode::jalr(0, 1, 1)), 1);
    assert_eq!(decode_i_type_imm(encode::jalr(0, 1, -1)), -1);
}

#[rstest]
#[case::max(2046)]
#[case::min(-2048)]
#[case::minus_two(-2)]
#[case::zero(0)]
fn cj_extremes(#[case] imm: i32) {
    assert_eq!(decode_cj_type_imm(encode::c_j(imm)), imm);
    assert_eq!(decode_cj_type_imm(encode::c_jal(imm)), imm);
}

#[rstest]
#[case::max(254)]
#[case::min(-256)]
#[case::minus_two(-2)]
#[case::zero(0)]
fn cb_extremes(#[case] imm: i32) {
    assert_eq!(decode_cb_type_imm(encode::c_beqz(2, imm)), imm);
    assert_eq!(decode_cb_type_imm(encode::c_bnez(5, imm)), imm);
}

#[test]
fn sign_extend_widths() {
    assert_eq!(sign_extend(0x1000, 13), -4096);
    assert_eq!(sign_extend(0x0FFE, 13), 4094);
    assert_eq!(sign_extend(0x100, 9), -256);
    assert_eq!(sign_extend(0x0FF, 9), 255);
    assert_eq!(sign_extend(0xFFFF_FFFF, 32), -1);
}

#[test]
fn formats_without_displacement() {
    for raw in [encode::c_jr(1), encode::c_jalr(31), 0x0000_0013, 0] {
        assert_eq!(decode_immediate(raw, classify(raw)), None, "raw = {raw:#010x}");
    }
}

#[test]
fn decode_immediate_dispatches_on_variant() {
    let raw = encode::beq(3, 4, -16);
    assert_eq!(decode_immediate(raw, InstructionVariant::BTypeBranch), Some(-16));
    let raw = encode::c_bnez(0, 32);
    assert_eq!(decode_immediate(raw, InstructionVariant::CompressedBranch), Some(32));
}

proptest! {
    #[test]
    fn b_type_recovers_even_offsets(half in -2048i32..2048, rs1 in 0u32..32, rs2 in 0u32..32) {
        let imm = half * 2;
        prop_assert_eq!(decode_b_type_imm(encode::beq(rs1, rs2, imm)), imm);
    }

    #[test]
    fn j_type_recovers_even_offsets(half in -(1i32 << 19)..(1i32 << 19), rd in 0u32..32) {
        let imm = half * 2;
        prop_assert_eq!(decode_j_type_imm(encode::jal(rd, imm)), imm);
    }

    #[test]
    fn i_type_recovers_any_offset(imm in -2048i32..2048, rs1 in 0u32..32) {
        prop_assert_eq!(decode_i_type_imm(encode::jalr(1, rs1, imm)), imm);
    }

    #[test]
    fn cj_recovers_even_offsets(half in -1024i32..1024) {
        let imm = half * 2;
        prop_assert_eq!(decode_cj_type_imm(encode::c_j(imm)), imm);
    }

    #[test]
    fn cb_recovers_even_offsets(half in -128i32..128, rs in 0u32..8) {
        let imm = half * 2;
        prop_assert_eq!(decode_cb_type_imm(encode::c_beqz(rs, imm)), imm);
    }

    #[test]
    fn decoded_offsets_are_even(raw in any::<u32>()) {
        prop_assert_eq!(decode_b_type_imm(raw) & 1, 0);
        prop_assert_eq!(decode_j_type_imm(raw) & 1, 0);
        prop_assert_eq!(decode_cj_type_imm(raw) & 1, 0);
        prop_assert_eq!(decode_cb_type_imm(raw) & 1, 0);
    }
}
