//! Properties that hold for every fetch.

use proptest::prelude::*;
use rvsbp_core::{BranchPredictor, FetchInput, InstructionVariant, StaticBranchPredictor};

use crate::common::encode;

fn fetch() -> impl Strategy<Value = FetchInput> {
    (any::<u32>(), any::<u32>(), 0u8..32)
        .prop_map(|(raw, pc, reg)| FetchInput::new(raw, pc).with_register(reg))
}

/// Words biased toward control transfers; uniform words are mostly illegal.
fn control_word() -> impl Strategy<Value = u32> {
    prop_oneof![
        (0u32..8, 0u32..32, 0u32..32, -2048i32..2048)
            .prop_map(|(f3, rs1, rs2, h)| encode::b_type(f3, rs1, rs2, h * 2)),
        (0u32..32, -(1i32 << 19)..(1i32 << 19)).prop_map(|(rd, h)| encode::jal(rd, h * 2)),
        (0u32..32, 0u32..32, -2048i32..2048).prop_map(|(rd, rs1, imm)| encode::jalr(rd, rs1, imm)),
        (-1024i32..1024).prop_map(|h| encode::c_j(h * 2)),
        (-1024i32..1024).prop_map(|h| encode::c_jal(h * 2)),
        (0u32..8, -128i32..128).prop_map(|(r, h)| encode::c_beqz(r, h * 2)),
        (0u32..8, -128i32..128).prop_map(|(r, h)| encode::c_bnez(r, h * 2)),
        (1u32..32).prop_map(encode::c_jr),
        (1u32..32).prop_map(encode::c_jalr),
        any::<u32>(),
    ]
}

proptest! {
    #[test]
    fn every_word_is_classified(input in fetch()) {
        let p = StaticBranchPredictor::default().evaluate(&input);
        prop_assert!(InstructionVariant::ALL.contains(&p.variant));
    }

    #[test]
    fn invalid_fetch_falls_through(input in fetch()) {
        let bp = StaticBranchPredictor::default();
        let out = bp.predict(&input.with_valid(false));
        prop_assert!(!out.taken);
        prop_assert_eq!(out.target, input.pc);
    }

    #[test]
    fn direction_follows_displacement_sign(raw in control_word(), pc in any::<u32>()) {
        let p = StaticBranchPredictor::default().evaluate(&FetchInput::new(raw, pc));
        if p.variant.is_conditional() {
            let imm = p.immediate.unwrap_or_default();
            prop_assert_eq!(p.taken(), imm < 0);
        } else if p.variant.is_unconditional() {
            prop_assert!(p.taken());
        } else {
            prop_assert!(!p.taken());
        }
    }

    #[test]
    fn pc_relative_target_ignores_direction(raw in control_word(), pc in any::<u32>()) {
        let p = StaticBranchPredictor::default().evaluate(&FetchInput::new(raw, pc));
        if p.variant.is_pc_relative() {
            let imm = p.immediate.unwrap_or_default();
            prop_assert_eq!(p.target(), pc.wrapping_add_signed(imm));
        }
    }

    #[test]
    fn illegal_words_echo_pc(raw in any::<u32>(), pc in any::<u32>()) {
        let p = StaticBranchPredictor::default().evaluate(&FetchInput::new(raw, pc));
        if p.variant == InstructionVariant::Illegal {
            prop_assert_eq!(p.immediate, None);
            prop_assert!(!p.taken());
            prop_assert_eq!(p.target(), pc);
        }
    }

    #[test]
    fn evaluation_is_pure(input in fetch()) {
        let bp = StaticBranchPredictor::default();
        prop_assert_eq!(bp.evaluate(&input), bp.evaluate(&input));
    }

    #[test]
    fn register_index_never_affects_output(raw in control_word(), pc in any::<u32>(), reg in 0u8..32) {
        let bp = StaticBranchPredictor::default();
        let base = FetchInput::new(raw, pc);
        prop_assert_eq!(bp.predict(&base), bp.predict(&base.with_register(reg)));
    }
}
