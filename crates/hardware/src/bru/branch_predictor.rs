//! Branch Predictor Interface.
//!
//! This module defines the `BranchPredictor` trait for fetch-stage predictors.
//! A predictor maps one fetch request to a prediction within a single
//! evaluation step; implementations in this crate hold no state between calls.

use super::signals::{FetchInput, Prediction, PredictionResult};

/// Trait for fetch-stage branch prediction.
pub trait BranchPredictor {
    /// Evaluates one fetch request, returning the full decode alongside the
    /// composed output.
    ///
    /// # Arguments
    ///
    /// * `input` - The fetched word, its address, register index, and valid bit.
    fn evaluate(&self, input: &FetchInput) -> Prediction;

    /// Predicts the `(taken, target)` pair for a fetch request.
    ///
    /// # Arguments
    ///
    /// * `input` - The fetched word, its address, register index, and valid bit.
    ///
    /// # Returns
    ///
    /// The output presented to the fetch stage.
    fn predict(&self, input: &FetchInput) -> PredictionResult {
        self.evaluate(input).result
    }
}
