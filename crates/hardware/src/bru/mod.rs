//! Branch prediction unit (BRU).
//!
//! This module contains the fetch-stage static predictor, split along its
//! data flow: classify and decode (in [`crate::isa`]), then
//! direction prediction and target calculation in parallel, then output
//! composition.

pub use self::branch_predictor::BranchPredictor;
pub use self::signals::{FetchInput, Prediction, PredictionResult};
pub use self::static_bp::StaticBranchPredictor;

/// Branch predictor trait.
pub mod branch_predictor;

/// Static taken/not-taken heuristic.
pub mod direction;

/// Predictor inputs, outputs, and evaluation records.
pub mod signals;

/// Static branch predictor (backward taken, forward not taken).
pub mod static_bp;

/// Speculative target address calculation.
pub mod target;
