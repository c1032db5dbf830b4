//! Predictor Test Vectors.
//!
//! A test vector pins the expected `(taken, target)` output for one fetch
//! request. Vectors are read from JSON, where numeric fields may be written as
//! numbers or as literal strings (`"0x8C218363"`), and flags as booleans or
//! `0`/`1`:
//!
//! ```json
//! [
//!   { "name": "backward beq", "instr": "0x8C218363", "pc": "0x1000",
//!     "register": 0, "valid": 1, "expected_taken": 1, "expected_pc": "0xC6" }
//! ]
//! ```

use std::path::Path;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::loader::load_binary;
use crate::bru::{BranchPredictor, FetchInput, PredictionResult};
use crate::common::constants::REGISTER_INDEX_MASK;
use crate::common::{Error, Result, parse_u32};

/// One expected-output case.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestVector {
    /// Human-readable case name.
    pub name: String,
    /// Fetched word.
    #[serde(deserialize_with = "de_literal")]
    pub instr: u32,
    /// Fetch address.
    #[serde(deserialize_with = "de_literal")]
    pub pc: u32,
    /// Base-register index (0..=31).
    #[serde(default, deserialize_with = "de_register")]
    pub register: u8,
    /// Fetch valid bit.
    #[serde(default = "default_valid", deserialize_with = "de_flag")]
    pub valid: bool,
    /// Expected direction.
    #[serde(deserialize_with = "de_flag")]
    pub expected_taken: bool,
    /// Expected target address.
    #[serde(deserialize_with = "de_literal")]
    pub expected_pc: u32,
}

impl TestVector {
    /// Creates a vector with register index 0.
    pub fn new(
        name: &str,
        instr: u32,
        pc: u32,
        valid: bool,
        expected_taken: bool,
        expected_pc: u32,
    ) -> Self {
        Self {
            name: name.to_string(),
            instr,
            pc,
            register: 0,
            valid,
            expected_taken,
            expected_pc,
        }
    }

    /// The fetch request this vector describes.
    pub const fn input(&self) -> FetchInput {
        FetchInput::new(self.instr, self.pc)
            .with_register(self.register)
            .with_valid(self.valid)
    }

    /// The output this vector expects.
    pub const fn expected(&self) -> PredictionResult {
        PredictionResult {
            taken: self.expected_taken,
            target: self.expected_pc,
        }
    }
}

const fn default_valid() -> bool {
    true
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Literal {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(u64),
}

fn de_literal<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    match Literal::deserialize(deserializer)? {
        Literal::Number(n) => u32::try_from(n)
            .map_err(|_| de::Error::custom(format!("{n} does not fit in 32 bits"))),
        Literal::Text(text) => parse_u32(&text).map_err(de::Error::custom),
    }
}

fn de_register<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u8, D::Error> {
    let index = de_literal(deserializer)?;
    u8::try_from(index)
        .ok()
        .filter(|&r| r <= REGISTER_INDEX_MASK)
        .ok_or_else(|| de::Error::custom(format!("register index {index} is not in 0..=31")))
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<bool, D::Error> {
    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Number(0) => Ok(false),
        Flag::Number(1) => Ok(true),
        Flag::Number(n) => Err(de::Error::custom(format!("flag must be 0 or 1, got {n}"))),
    }
}

/// Parses a JSON array of vectors.
///
/// # Errors
///
/// Returns [`Error::Json`] when the document is not a valid vector list.
pub fn parse_vectors(json: &str) -> Result<Vec<TestVector>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a JSON vector file.
///
/// # Errors
///
/// Returns [`Error::Io`] or [`Error::Json`].
pub fn load_vectors(path: impl AsRef<Path>) -> Result<Vec<TestVector>> {
    let bytes = load_binary(path)?;
    serde_json::from_slice(&bytes).map_err(Error::from)
}

/// The reference suite for the default predictor configuration.
pub fn builtin() -> Vec<TestVector> {
    vec![
        TestVector::new("beq, negative offset, taken", 0x8C218363, 0x1000, true, true, 0x000000C6),
        TestVector::new("beq, positive offset, not taken", 0x6C2183E3, 0x1000, true, false, 0x00001EC6),
        TestVector::new("jal, negative offset wraps", 0x926CF16F, 0x1000, true, true, 0xFFFD0126),
        TestVector::new("jal, positive offset", 0x126CF16F, 0x1000, true, true, 0x000D0126),
        TestVector::new("jalr, negative offset", 0xF63101E7, 0x1000, true, true, 0x00000F63),
        TestVector::new("jalr, positive offset", 0x763101E7, 0x1000, true, true, 0x00001763),
        TestVector::new("jal x0, short forward offset", 0x4840006F, 0x1000, true, true, 0x00001484),
        TestVector::new("jal ra, short forward offset", 0x484000EF, 0x1000, true, true, 0x00001484),
        TestVector::new("beq, short forward offset, not taken", 0x08040A63, 0x1000, true, false, 0x00001094),
        TestVector::new("invalid fetch bypass", 0x00000001, 0x2000, false, false, 0x00002000),
        TestVector::new("all-zero word", 0x00000000, 0x2000, true, false, 0x00002000),
        TestVector::new("beq, large negative offset, taken", 0xFE000E63, 0x1000, true, true, 0x000007FC),
    ]
}

/// Result of running one vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VectorOutcome {
    /// The vector that was run.
    pub vector: TestVector,
    /// What the predictor produced.
    pub actual: PredictionResult,
}

impl VectorOutcome {
    /// Returns `true` when both outputs match the expectation.
    pub fn passed(&self) -> bool {
        self.actual == self.vector.expected()
    }
}

/// Results of a vector run, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct VectorReport {
    /// One outcome per vector.
    pub outcomes: Vec<VectorOutcome>,
}

impl VectorReport {
    /// Number of vectors that matched.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Outcomes that did not match.
    pub fn failures(&self) -> impl Iterator<Item = &VectorOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// Returns `true` when every vector matched.
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(VectorOutcome::passed)
    }
}

/// Runs `vectors` against `predictor`, logging each case.
pub fn run<P: BranchPredictor>(predictor: &P, vectors: &[TestVector]) -> VectorReport {
    let outcomes = vectors
        .iter()
        .map(|vector| {
            let actual = predictor.predict(&vector.input());
            let outcome = VectorOutcome {
                vector: vector.clone(),
                actual,
            };

            info!(
                case = %vector.name,
                instr = format_args!("{:08X}", vector.instr),
                pc = format_args!("{:08X}", vector.pc),
                register = vector.register,
                valid = vector.valid,
                "running test case"
            );
            if outcome.passed() {
                info!(taken = actual.taken, target = format_args!("{:08X}", actual.target), "match");
            } else {
                warn!(
                    expected_taken = vector.expected_taken,
                    actual_taken = actual.taken,
                    expected_pc = format_args!("{:08X}", vector.expected_pc),
                    actual_pc = format_args!("{:08X}", actual.target),
                    "mismatch"
                );
            }
            outcome
        })
        .collect();

    VectorReport { outcomes }
}
