//! Configuration system for the static branch predictor.
//!
//! This module defines the configuration structures and enums used to
//! parameterize the predictor. It provides:
//! 1. **Defaults:** Baseline behaviour matching an RV32IC fetch stage.
//! 2. **Structures:** General (logging) settings and predictor settings.
//! 3. **Enums:** The policy used to approximate register-indirect targets.
//!
//! Configuration is supplied as JSON (`sbp --config file.json`) or built with
//! `Config::default()`. Every field may be omitted.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{Error, Result};

/// Default configuration constants for the predictor.
mod defaults {
    /// Compressed (C extension) decoding is enabled by default.
    pub const COMPRESSED: bool = true;

    /// Per-prediction tracing is off by default.
    pub const TRACE_PREDICTIONS: bool = false;
}

/// Target approximation for register-indirect jumps (JALR, C.JR, C.JALR).
///
/// The base register value is not visible at fetch time, so the predicted
/// target for these jumps is always an approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum IndirectTarget {
    /// Substitute the fetch address for the unknown base register.
    ///
    /// JALR predicts `pc + imm`; compressed indirect jumps, which carry no
    /// immediate, predict `pc`.
    #[default]
    #[serde(alias = "fetch_relative")]
    FetchRelative,
    /// Predict the next sequential instruction (`pc + 2` or `pc + 4`).
    #[serde(alias = "sequential")]
    Sequential,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use rvsbp_core::config::{Config, IndirectTarget};
///
/// let json = r#"{
///     "general": { "trace_predictions": true },
///     "predictor": { "compressed": false, "indirect_target": "Sequential" }
/// }"#;
///
/// let config = Config::from_json(json).unwrap();
/// assert!(config.general.trace_predictions);
/// assert!(!config.predictor.compressed);
/// assert_eq!(config.predictor.indirect_target, IndirectTarget::Sequential);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// General settings (logging)
    #[serde(default)]
    pub general: GeneralConfig,
    /// Predictor behaviour
    #[serde(default)]
    pub predictor: PredictorConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when the document does not match the schema.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read and
    /// [`Error::Json`] when its contents do not match the schema.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` debug event for every evaluated fetch
    #[serde(default)]
    pub trace_predictions: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_predictions: defaults::TRACE_PREDICTIONS,
        }
    }
}

/// Predictor behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PredictorConfig {
    /// Recognise compressed (RVC) control transfers. When disabled the
    /// predictor models a core without the C extension and reports every
    /// compressed encoding as illegal.
    #[serde(default = "PredictorConfig::default_compressed")]
    pub compressed: bool,

    /// Target approximation for register-indirect jumps
    #[serde(default)]
    pub indirect_target: IndirectTarget,
}

impl PredictorConfig {
    /// Returns the default compressed-decoding setting.
    const fn default_compressed() -> bool {
        defaults::COMPRESSED
    }
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            compressed: defaults::COMPRESSED,
            indirect_target: IndirectTarget::default(),
        }
    }
}
