//! Sequential fetch streams.

use pretty_assertions::assert_eq;
use rvsbp_core::sim::loader::Segment;
use rvsbp_core::sim::scanner::{FetchStream, scan};
use rvsbp_core::{InstructionVariant, StaticBranchPredictor};

/// `beq x3, x2, -3898` ; `c.j -2` ; `c.jr ra`
const MIXED: [u8; 8] = [0x63, 0x83, 0x21, 0x8C, 0xFD, 0xBF, 0x82, 0x80];

#[test]
fn stream_advances_by_instruction_length() {
    let segment = Segment::raw(0x100, MIXED.to_vec());
    let pcs: Vec<u32> = FetchStream::new(&segment).map(|f| f.pc).collect();
    assert_eq!(pcs, vec![0x100, 0x104, 0x106]);
}

#[test]
fn window_is_little_endian_and_carries_base_register() {
    let segment = Segment::raw(0, MIXED.to_vec());
    let fetches: Vec<_> = FetchStream::new(&segment).collect();

    assert_eq!(fetches[0].raw, 0x8C21_8363);
    assert_eq!(fetches[0].register_addr, 3);
    assert_eq!(fetches[1].raw & 0xFFFF, 0xBFFD);
    assert_eq!(fetches[2].raw, 0x0000_8082);
    assert_eq!(fetches[2].register_addr, 1);
    assert!(fetches.iter().all(|f| f.valid));
}

#[test]
fn scan_predicts_each_fetch() {
    let bp = StaticBranchPredictor::default();
    let segment = Segment::raw(0x1000, MIXED.to_vec());
    let predictions: Vec<_> = scan(&bp, &segment).collect();

    let variants: Vec<_> = predictions.iter().map(|p| p.variant).collect();
    assert_eq!(
        variants,
        vec![
            InstructionVariant::BTypeBranch,
            InstructionVariant::CompressedJump,
            InstructionVariant::CompressedIndirectJump,
        ]
    );
    assert_eq!(predictions[0].target(), 0xC6);
    assert_eq!(predictions[1].target(), 0x1002);
    assert_eq!(predictions[2].target(), 0x1006);
    assert!(predictions.iter().all(|p| p.taken()));
}

#[test]
fn truncated_tail_is_invalid() {
    // A 32-bit encoding with only its lower half present.
    let segment = Segment::raw(0x200, vec![0x13, 0x00, 0x00, 0x00, 0x63, 0x83]);
    let fetches: Vec<_> = FetchStream::new(&segment).collect();

    assert_eq!(fetches.len(), 2);
    assert!(fetches[0].valid);
    assert_eq!(fetches[1].pc, 0x204);
    assert_eq!(fetches[1].raw, 0x0000_8363);
    assert!(!fetches[1].valid);

    let bp = StaticBranchPredictor::default();
    let last = scan(&bp, &segment).last().expect("two fetches");
    assert!(!last.taken());
    assert_eq!(last.target(), 0x204);
}

#[test]
fn compressed_tail_is_valid() {
    let segment = Segment::raw(0, vec![0x82, 0x80]);
    let fetches: Vec<_> = FetchStream::new(&segment).collect();
    assert_eq!(fetches.len(), 1);
    assert!(fetches[0].valid);
}

#[test]
fn empty_segment_yields_nothing() {
    let segment = Segment::raw(0, Vec::new());
    assert_eq!(FetchStream::new(&segment).count(), 0);
}

#[test]
fn addresses_wrap_at_top_of_memory() {
    let segment = Segment::raw(0xFFFF_FFFE, vec![0x01, 0x00, 0x01, 0x00]);
    let pcs: Vec<u32> = FetchStream::new(&segment).map(|f| f.pc).collect();
    assert_eq!(pcs, vec![0xFFFF_FFFE, 0x0000_0000]);
    assert_eq!(segment.end(), 0x0000_0002);
}
