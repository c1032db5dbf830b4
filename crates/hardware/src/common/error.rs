//! Error definitions.
//!
//! The predictor itself is total and never fails: every instruction word maps
//! to a defined prediction. Errors only arise in the layers around it:
//! 1. **Loading:** Reading raw images and ELF files from disk.
//! 2. **Configuration:** Parsing JSON configuration and test-vector files.
//! 3. **Input Parsing:** Numeric literals supplied on the command line or in vectors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the loading, configuration, and parsing layers.
#[derive(Debug, Error)]
pub enum Error {
    /// A file could not be read.
    #[error("could not read '{}': {source}", path.display())]
    Io {
        /// Path of the file that failed to load.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file carried an ELF header but could not be parsed.
    #[error("malformed ELF image: {0}")]
    Elf(#[from] object::Error),

    /// The ELF image contains no executable sections to scan.
    #[error("ELF image has no executable sections")]
    NoExecutableSections,

    /// A section address does not fit in the 32-bit fetch address space.
    #[error("address {0:#x} does not fit in a 32-bit fetch address")]
    AddressOutOfRange(u64),

    /// A configuration or test-vector document was not valid JSON for its schema.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric literal could not be parsed.
    #[error("invalid number '{0}' (expected decimal, 0x-hex or 0b-binary)")]
    InvalidNumber(String),
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
