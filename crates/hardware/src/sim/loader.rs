//! Binary Loader.
//!
//! This module turns files on disk into fetchable segments. It performs:
//! 1. **Binary loading:** Reads a file into a byte buffer.
//! 2. **ELF parsing:** Extracts every executable section with its link address.
//! 3. **Raw fallback:** Any non-ELF file is treated as a flat image at a caller-chosen base.

use std::fs;
use std::path::Path;

use object::{Object, ObjectSection, SectionKind};
use tracing::debug;

use crate::common::constants::ELF_MAGIC;
use crate::common::{Error, Result};

/// A contiguous run of instruction bytes and the address of its first byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Section name for ELF images, `"raw"` for flat images.
    pub name: String,
    /// Fetch address of `bytes[0]`.
    pub base: u32,
    /// Instruction bytes, little-endian.
    pub bytes: Vec<u8>,
}

impl Segment {
    /// Creates a flat segment at `base`.
    pub fn raw(base: u32, bytes: Vec<u8>) -> Self {
        Self {
            name: "raw".to_string(),
            base,
            bytes,
        }
    }

    /// Address one past the last byte, wrapping at 32 bits.
    pub fn end(&self) -> u32 {
        self.base.wrapping_add(self.bytes.len() as u32)
    }
}

/// Loads a binary file from disk into a byte vector.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be read.
pub fn load_binary(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads the fetchable segments of a file.
///
/// # Arguments
///
/// * `path` - ELF file or flat binary image.
/// * `base` - Load address for flat images; ignored for ELF files.
///
/// # Errors
///
/// Fails when the file cannot be read or when an ELF image is malformed,
/// has no executable sections, or links above 4 GiB.
pub fn load_segments(path: impl AsRef<Path>, base: u32) -> Result<Vec<Segment>> {
    let bytes = load_binary(&path)?;
    debug!(path = %path.as_ref().display(), len = bytes.len(), "loaded image");
    parse_image(bytes, base)
}

/// Splits an in-memory image into segments, detecting ELF by its magic.
///
/// # Errors
///
/// See [`load_segments`].
pub fn parse_image(bytes: Vec<u8>, base: u32) -> Result<Vec<Segment>> {
    if bytes.starts_with(&ELF_MAGIC) {
        parse_elf(&bytes)
    } else {
        Ok(vec![Segment::raw(base, bytes)])
    }
}

fn parse_elf(bytes: &[u8]) -> Result<Vec<Segment>> {
    let file = object::File::parse(bytes)?;
    let mut segments = Vec::new();

    for section in file.sections() {
        if section.kind() != SectionKind::Text {
            continue;
        }
        let address = section.address();
        let base = u32::try_from(address).map_err(|_| Error::AddressOutOfRange(address))?;
        let name = section.name().unwrap_or("<unnamed>").to_string();
        let data = section.data()?;
        debug!(section = %name, base = format_args!("{base:#010x}"), len = data.len(), "text section");

        segments.push(Segment {
            name,
            base,
            bytes: data.to_vec(),
        });
    }

    if segments.is_empty() {
        return Err(Error::NoExecutableSections);
    }
    Ok(segments)
}
