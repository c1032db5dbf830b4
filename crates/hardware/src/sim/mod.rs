//! Simulation front end.
//!
//! Drives the predictor the way a fetch stage would. It provides:
//! 1. **Loading:** Raw images and the executable sections of ELF files.
//! 2. **Scanning:** A fetch stream over a loaded segment, evaluated instruction by instruction.
//! 3. **Vector Checking:** Expected-output test vectors run against a predictor.

/// Raw image and ELF loading.
pub mod loader;

/// Fetch-stream iteration over loaded segments.
pub mod scanner;

/// Test-vector definitions and runner.
pub mod vectors;
