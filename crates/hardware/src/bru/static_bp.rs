//! Static Branch Predictor.
//!
//! Classifies the fetched word, decodes its displacement, and combines a
//! backward-taken/forward-not-taken direction guess with a PC-relative target.
//! Unconditional jumps are always taken. The predictor has no tables and no
//! history, so a single instance can serve any number of fetch pipelines.

use tracing::debug;

use super::BranchPredictor;
use super::direction::predict_taken;
use super::signals::{FetchInput, Prediction, PredictionResult};
use super::target::compute_target;
use crate::config::{Config, IndirectTarget, PredictorConfig};
use crate::isa::decode::decode_immediate;
use crate::isa::variant::{InstructionVariant, classify};

/// Static Branch Predictor structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaticBranchPredictor {
    /// Recognise compressed control transfers.
    compressed: bool,
    /// Approximation used for register-indirect targets.
    indirect_target: IndirectTarget,
    /// Emit a debug event per evaluation.
    trace: bool,
}

impl StaticBranchPredictor {
    /// Creates a predictor from predictor settings, with tracing disabled.
    pub const fn new(config: &PredictorConfig) -> Self {
        Self {
            compressed: config.compressed,
            indirect_target: config.indirect_target,
            trace: false,
        }
    }

    /// Creates a predictor from the root configuration.
    pub const fn from_config(config: &Config) -> Self {
        let mut bp = Self::new(&config.predictor);
        bp.trace = config.general.trace_predictions;
        bp
    }

    /// Classifies `raw`, hiding compressed formats when the C extension is off.
    pub fn classify(&self, raw: u32) -> InstructionVariant {
        match classify(raw) {
            v if v.is_compressed() && !self.compressed => InstructionVariant::Illegal,
            v => v,
        }
    }
}

impl Default for StaticBranchPredictor {
    fn default() -> Self {
        Self::new(&PredictorConfig::default())
    }
}

impl BranchPredictor for StaticBranchPredictor {
    fn evaluate(&self, input: &FetchInput) -> Prediction {
        let variant = self.classify(input.raw);
        let immediate = decode_immediate(input.raw, variant);
        let taken = predict_taken(variant, immediate, input.valid);
        let target = compute_target(input.pc, variant, immediate, self.indirect_target);
        let result = compose(input, taken, target);

        if self.trace {
            debug!(
                pc = format_args!("{:#010x}", input.pc),
                raw = format_args!("{:#010x}", input.raw),
                valid = input.valid,
                %variant,
                ?immediate,
                taken = result.taken,
                target = format_args!("{:#010x}", result.target),
                "prediction"
            );
        }

        Prediction {
            input: *input,
            variant,
            immediate,
            result,
        }
    }
}

/// Output Composer.
///
/// An invalid fetch short-circuits to the fall-through default regardless of
/// the word's contents. Otherwise the target is passed through even when the
/// prediction is not-taken, so a consumer can inspect it independently.
pub const fn compose(input: &FetchInput, taken: bool, target: u32) -> PredictionResult {
    if input.valid {
        PredictionResult { taken, target }
    } else {
        PredictionResult::fall_through(input.pc)
    }
}
