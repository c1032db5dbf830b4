//! Prediction statistics collection and reporting.
//!
//! This module tracks what the predictor saw over a fetch stream. It provides:
//! 1. **Fetch counts:** Total, invalid, taken, and not-taken fetches.
//! 2. **Instruction mix:** Counts per instruction variant.
//! 3. **Branch direction:** Backward vs forward conditional branches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::bru::Prediction;
use crate::isa::variant::InstructionVariant;

/// Counters accumulated over a sequence of predictions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PredictionStats {
    /// Number of fetches evaluated, valid or not.
    pub fetches: u64,
    /// Fetches presented with the valid bit clear.
    pub invalid: u64,
    /// Valid fetches predicted taken.
    pub taken: u64,
    /// Valid fetches predicted not taken (including non-branches).
    pub not_taken: u64,
    /// Conditional branches with a negative displacement.
    pub backward_branches: u64,
    /// Conditional branches with a non-negative displacement.
    pub forward_branches: u64,
    /// Valid fetches per instruction variant.
    pub variants: BTreeMap<InstructionVariant, u64>,
}

impl PredictionStats {
    /// Creates an empty set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accounts for one prediction.
    pub fn record(&mut self, prediction: &Prediction) {
        self.fetches += 1;
        if !prediction.input.valid {
            self.invalid += 1;
            return;
        }

        if prediction.taken() {
            self.taken += 1;
        } else {
            self.not_taken += 1;
        }

        if prediction.variant.is_conditional() {
            match prediction.immediate {
                Some(imm) if imm < 0 => self.backward_branches += 1,
                _ => self.forward_branches += 1,
            }
        }

        *self.variants.entry(prediction.variant).or_insert(0) += 1;
    }

    /// Count recorded for `variant`.
    pub fn count(&self, variant: InstructionVariant) -> u64 {
        self.variants.get(&variant).copied().unwrap_or(0)
    }

    /// Valid fetches that were recognised control transfers.
    pub fn control_transfers(&self) -> u64 {
        self.variants
            .iter()
            .filter(|(v, _)| **v != InstructionVariant::Illegal)
            .map(|(_, n)| n)
            .sum()
    }

    /// Fraction of valid fetches predicted taken, or 0 when none were valid.
    pub fn taken_rate(&self) -> f64 {
        let valid = self.fetches - self.invalid;
        if valid == 0 {
            0.0
        } else {
            self.taken as f64 / valid as f64
        }
    }

    /// Prints the report to standard output.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("STATIC BRANCH PREDICTION STATISTICS");
        println!("==========================================================");
        println!("fetches                  {}", self.fetches);
        println!("fetches_invalid          {}", self.invalid);
        println!("control_transfers        {}", self.control_transfers());
        println!("predicted_taken          {}", self.taken);
        println!("predicted_not_taken      {}", self.not_taken);
        println!("taken_rate               {:.2}%", self.taken_rate() * 100.0);
        println!("branches_backward        {}", self.backward_branches);
        println!("branches_forward         {}", self.forward_branches);
        println!("----------------------------------------------------------");
        for variant in InstructionVariant::ALL {
            println!("{:<25}{}", variant.to_string(), self.count(variant));
        }
    }
}
