//! Instruction field extraction.

use rvsbp_core::isa::instruction::InstructionBits;

use crate::common::encode;

#[test]
fn base_fields_of_jalr() {
    let raw = encode::jalr(1, 6, -157);
    assert_eq!(raw.opcode(), 0b1100111);
    assert_eq!(raw.rd(), 1);
    assert_eq!(raw.rs1(), 6);
    assert_eq!(raw.funct3(), 0);
}

#[test]
fn compressed_fields_of_c_jalr() {
    let raw = encode::c_jalr(10);
    assert_eq!(raw.quadrant(), 0b10);
    assert_eq!(raw.c_funct4(), 0b1001);
    assert_eq!(raw.c_funct3(), 0b100);
    assert_eq!(raw.c_rs1(), 10);
    assert_eq!(raw.c_rs2(), 0);
}

#[test]
fn length_follows_low_bits() {
    assert_eq!(0x0000_0013u32.len_bytes(), 4);
    assert_eq!(0x0000_0001u32.len_bytes(), 2);
    assert_eq!(0x0000_0002u32.len_bytes(), 2);
    assert_eq!(0x0000_0000u32.len_bytes(), 2);
    assert!(!0x8C21_8363u32.is_compressed());
    assert!(encode::c_j(4).is_compressed());
}

#[test]
fn compressed_fields_ignore_upper_half() {
    let raw = 0xDEAD_0000 | encode::c_beqz(3, 16);
    assert_eq!(raw.quadrant(), 0b01);
    assert_eq!(raw.c_funct3(), 0b110);
}
