//! RISC-V Compressed (C) Extension Constants.
//!
//! Defines the quadrants and the control-transfer encodings of 16-bit
//! compressed instructions. Compressed instructions are divided into three
//! quadrants (0, 1, 2) based on the lowest 2 bits of the instruction; the
//! fourth pattern (`0b11`) marks a 32-bit instruction.

/// Quadrant 0 (bits 1:0 = 00). Holds no control-transfer instructions.
pub const QUADRANT_0: u32 = 0b00;
/// Quadrant 1 (bits 1:0 = 01).
pub const QUADRANT_1: u32 = 0b01;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u32 = 0b10;

/// Control-transfer instructions in Quadrant 1, keyed by funct3.
pub mod q1 {
    /// Compressed Jump and Link (C.JAL), RV32 only.
    pub const C_JAL: u32 = 0b001;
    /// Compressed Jump (C.J).
    pub const C_J: u32 = 0b101;
    /// Compressed Branch Equal Zero (C.BEQZ).
    pub const C_BEQZ: u32 = 0b110;
    /// Compressed Branch Not Equal Zero (C.BNEZ).
    pub const C_BNEZ: u32 = 0b111;
}

/// Control-transfer instructions in Quadrant 2, keyed by funct4.
///
/// Both share their funct4 with register moves (C.MV / C.ADD) and, for
/// `C_JALR`, with C.EBREAK. The jump forms require rs2 = 0 and rs1 != 0.
pub mod q2 {
    /// Compressed Jump Register (C.JR).
    pub const C_JR: u32 = 0b1000;
    /// Compressed Jump and Link Register (C.JALR).
    pub const C_JALR: u32 = 0b1001;
}
