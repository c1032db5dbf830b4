//! Fetch-stream scanning.
//!
//! Walks a segment the way an in-order fetch stage would: every step presents
//! a 32-bit little-endian window at the current address, the instruction in it
//! is sized from its low two bits, and the stream advances by that length.
//! No redirect is followed; the stream is strictly sequential.

use super::loader::Segment;
use crate::bru::{BranchPredictor, FetchInput, Prediction};
use crate::common::constants::INSTRUCTION_SIZE_32;
use crate::isa::instruction::InstructionBits;

/// Iterator of fetch requests over a segment.
#[derive(Clone, Debug)]
pub struct FetchStream<'a> {
    segment: &'a Segment,
    offset: usize,
}

impl<'a> FetchStream<'a> {
    /// Starts a stream at the first byte of `segment`.
    pub const fn new(segment: &'a Segment) -> Self {
        Self { segment, offset: 0 }
    }
}

impl Iterator for FetchStream<'_> {
    type Item = FetchInput;

    fn next(&mut self) -> Option<FetchInput> {
        let bytes = &self.segment.bytes;
        let remaining = bytes.len().checked_sub(self.offset).filter(|&n| n > 0)?;

        // Zero-pad the window past the end of the segment.
        let available = remaining.min(INSTRUCTION_SIZE_32 as usize);
        let mut window = [0u8; INSTRUCTION_SIZE_32 as usize];
        window[..available].copy_from_slice(&bytes[self.offset..self.offset + available]);
        let raw = u32::from_le_bytes(window);

        let len = raw.len_bytes() as usize;
        let base_register = if raw.is_compressed() {
            raw.c_rs1()
        } else {
            raw.rs1()
        };
        let pc = self.segment.base.wrapping_add(self.offset as u32);
        // A trailing instruction cut off by the end of the segment is not a real fetch.
        let valid = available >= len;

        self.offset += len;
        Some(
            FetchInput::new(raw, pc)
                .with_register(base_register)
                .with_valid(valid),
        )
    }
}

/// Evaluates every fetch of `segment` with `predictor`.
pub fn scan<'a, P: BranchPredictor>(
    predictor: &'a P,
    segment: &'a Segment,
) -> impl Iterator<Item = Prediction> + 'a {
    FetchStream::new(segment).map(move |input| predictor.evaluate(&input))
}
