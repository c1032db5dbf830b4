//! Fetch-stage predictor signals.
//!
//! This module defines the values flowing into and out of the predictor. It provides:
//! 1. **Inputs:** The fetched word, its address, the base-register index, and the valid bit.
//! 2. **Outputs:** The `(taken, target)` pair presented to the fetch stage.
//! 3. **Evaluation Records:** The full decode of one evaluation for inspection and statistics.

use serde::Serialize;

use crate::common::constants::REGISTER_INDEX_MASK;
use crate::isa::variant::InstructionVariant;

/// One fetch request presented to the predictor.
///
/// Immutable per evaluation; the predictor never mutates or retains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FetchInput {
    /// Raw fetched word (`fetch_rdata`). A compressed instruction occupies bits 15:0.
    pub raw: u32,
    /// Address of the fetched word (`fetch_pc`).
    pub pc: u32,
    /// Base-register index for indirect jumps (`register_addr`), carried but
    /// never dereferenced. Always within 0..=31.
    pub register_addr: u8,
    /// Whether the fetch is architecturally valid this cycle (`fetch_valid`).
    pub valid: bool,
}

impl FetchInput {
    /// Creates a valid fetch of `raw` at `pc` with register index 0.
    pub const fn new(raw: u32, pc: u32) -> Self {
        Self {
            raw,
            pc,
            register_addr: 0,
            valid: true,
        }
    }

    /// Sets the base-register index, truncated to 5 bits.
    #[must_use]
    pub const fn with_register(mut self, register_addr: u8) -> Self {
        self.register_addr = register_addr & REGISTER_INDEX_MASK;
        self
    }

    /// Sets the valid bit.
    #[must_use]
    pub const fn with_valid(mut self, valid: bool) -> Self {
        self.valid = valid;
        self
    }
}

/// Predictor output (`predict_branch_taken`, `predict_branch_pc`).
///
/// `target` is always defined: it echoes the fetch address when no redirect
/// is possible, and holds the would-be target of a not-taken branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PredictionResult {
    /// Static prediction that control will transfer.
    pub taken: bool,
    /// Predicted redirect address.
    pub target: u32,
}

impl PredictionResult {
    /// The safe default: not taken, fall through at `pc`.
    pub const fn fall_through(pc: u32) -> Self {
        Self {
            taken: false,
            target: pc,
        }
    }
}

/// Complete record of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// The request that was evaluated.
    pub input: FetchInput,
    /// Format the fetched word classified as.
    pub variant: InstructionVariant,
    /// Decoded displacement, if the format has one.
    pub immediate: Option<i32>,
    /// Composed output.
    pub result: PredictionResult,
}

impl Prediction {
    /// Shorthand for `self.result.taken`.
    pub const fn taken(&self) -> bool {
        self.result.taken
    }

    /// Shorthand for `self.result.target`.
    pub const fn target(&self) -> u32 {
        self.result.target
    }

    /// Assembly mnemonic of the fetched instruction.
    pub fn mnemonic(&self) -> &'static str {
        self.variant.mnemonic(self.input.raw)
    }
}
