//! Target Address Calculator.
//!
//! PC-relative formats add the decoded displacement to the fetch address with
//! wrapping 32-bit arithmetic. Register-indirect jumps cannot be resolved at
//! fetch time; their target follows the configured [`IndirectTarget`] policy.

use crate::config::IndirectTarget;
use crate::isa::variant::InstructionVariant;

/// Computes the speculative redirect address.
///
/// # Arguments
///
/// * `pc` - Fetch address.
/// * `variant` - Format of the fetched word.
/// * `immediate` - Decoded displacement, if any.
/// * `policy` - Approximation used for register-indirect jumps.
///
/// # Returns
///
/// The would-be target. `pc` is echoed for illegal words, so the result is
/// always a defined address.
pub const fn compute_target(
    pc: u32,
    variant: InstructionVariant,
    immediate: Option<i32>,
    policy: IndirectTarget,
) -> u32 {
    match (variant, policy) {
        (InstructionVariant::Illegal, _) => pc,
        (
            InstructionVariant::ITypeIndirectJump | InstructionVariant::CompressedIndirectJump,
            IndirectTarget::Sequential,
        ) => pc.wrapping_add(variant.len_bytes()),
        // The base register is taken as zero relative to pc; C.JR/C.JALR have
        // no immediate, so they degenerate to pc.
        _ => match immediate {
            Some(imm) => pc.wrapping_add_signed(imm),
            None => pc,
        },
    }
}
