//! RV32 base instruction set definitions.
//!
//! Covers the opcode table, raw field extraction, and the decoded
//! instruction and program types consumed by the hazard analyzer.

/// Word-to-instruction decoder.
pub mod decoder;

/// Bitfield accessors and the decoded instruction record.
pub mod instruction;

/// Opcode constants.
pub mod opcodes;

/// Decoded instruction sequences.
pub mod program;

pub use crate::common::constants::NOP;
pub use decoder::decode;
pub use instruction::{DecodedFields, Format, Instruction, InstructionBits, Operands};
pub use program::Program;
