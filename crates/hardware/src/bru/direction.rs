//! Static Direction Predictor.
//!
//! Purely structural: no history, no training. Backward conditional branches
//! usually close loops and are predicted taken, forward ones fall through, and
//! unconditional transfers are taken by definition.

use crate::isa::variant::InstructionVariant;

/// Predicts whether control will transfer.
///
/// # Arguments
///
/// * `variant` - Format of the fetched word.
/// * `immediate` - Decoded displacement, used for conditional branches.
/// * `valid` - Fetch valid bit; an invalid fetch is never taken.
pub const fn predict_taken(variant: InstructionVariant, immediate: Option<i32>, valid: bool) -> bool {
    if !valid {
        return false;
    }

    match variant {
        InstructionVariant::BTypeBranch | InstructionVariant::CompressedBranch => {
            matches!(immediate, Some(imm) if imm < 0)
        }
        InstructionVariant::JTypeJump
        | InstructionVariant::ITypeIndirectJump
        | InstructionVariant::CompressedJump
        | InstructionVariant::CompressedJumpLink
        | InstructionVariant::CompressedIndirectJump => true,
        InstructionVariant::Illegal => false,
    }
}
