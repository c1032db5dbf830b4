//! RISC-V fetch-stage static branch predictor.
//!
//! This crate models the branch/jump outcome and target predictor of an RV32IC
//! instruction-fetch stage as a pure function of the fetched word, its address,
//! and the fetch valid bit:
//! 1. **ISA:** Format classification and immediate decoding for 32-bit and compressed control transfers.
//! 2. **BRU:** Static direction heuristic, target calculation, and output composition.
//! 3. **Simulation:** Image loading, fetch-stream scanning, and test-vector checking.
//! 4. **Support:** Configuration, statistics, and error types.
//!
//! ```
//! use rvsbp_core::{BranchPredictor, FetchInput, StaticBranchPredictor};
//!
//! let bp = StaticBranchPredictor::default();
//! let out = bp.predict(&FetchInput::new(0x8C21_8363, 0x1000));
//! assert!(out.taken);
//! assert_eq!(out.target, 0xC6);
//! ```

/// Branch prediction unit (direction, target, composer, predictor).
pub mod bru;
/// Common types and constants (errors, literals, widths).
pub mod common;
/// Predictor configuration (defaults, JSON schema).
pub mod config;
/// Instruction set (fields, classification, immediates).
pub mod isa;
/// Loading, fetch-stream scanning, and test vectors.
pub mod sim;
/// Prediction statistics collection and reporting.
pub mod stats;

/// Fetch-stage predictor interface and its inputs/outputs.
pub use crate::bru::{BranchPredictor, FetchInput, Prediction, PredictionResult};
/// The stateless static predictor; construct with `StaticBranchPredictor::default()`.
pub use crate::bru::StaticBranchPredictor;
/// Crate-wide error type.
pub use crate::common::Error;
/// Root configuration type; use `Config::default()` or `Config::load`.
pub use crate::config::Config;
/// Format classification result.
pub use crate::isa::InstructionVariant;
