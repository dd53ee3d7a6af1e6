//! Instruction field extraction and the decoded instruction record.
//!
//! Raw bitfields are read through the [`InstructionBits`] trait on `u32`.
//! A decoded [`Instruction`] keeps its original encoding and an [`Operands`]
//! value whose variant carries only the fields its format licenses.

use std::fmt;

use serde::Serialize;

use super::opcodes;

/// Bitfield accessors for a raw 32-bit instruction word.
///
/// Every accessor is a plain shift-and-mask; no sign extension is applied
/// to immediates.
pub trait InstructionBits {
    /// Bits `[0:7)`.
    fn opcode(self) -> u32;
    /// Bits `[7:12)`.
    fn rd(self) -> usize;
    /// Bits `[12:15)`.
    fn funct3(self) -> u32;
    /// Bits `[15:20)`.
    fn rs1(self) -> usize;
    /// Bits `[20:25)`.
    fn rs2(self) -> usize;
    /// Bits `[25:32)`.
    fn funct7(self) -> u32;
    /// I-format immediate: bits `[20:32)` verbatim.
    fn imm_i(self) -> u32;
    /// S-format immediate: `{bits[25:32), bits[7:12)}`.
    fn imm_s(self) -> u32;
    /// B-format immediate, bit 0 implicitly zero.
    fn imm_b(self) -> u32;
    /// U-format immediate: bits `[12:32)` verbatim, unshifted.
    fn imm_u(self) -> u32;
    /// J-format immediate, bit 0 implicitly zero.
    fn imm_j(self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(self) -> u32 {
        self & 0x7f
    }

    #[inline(always)]
    fn rd(self) -> usize {
        ((self >> 7) & 0x1f) as usize
    }

    #[inline(always)]
    fn funct3(self) -> u32 {
        (self >> 12) & 0x7
    }

    #[inline(always)]
    fn rs1(self) -> usize {
        ((self >> 15) & 0x1f) as usize
    }

    #[inline(always)]
    fn rs2(self) -> usize {
        ((self >> 20) & 0x1f) as usize
    }

    #[inline(always)]
    fn funct7(self) -> u32 {
        (self >> 25) & 0x7f
    }

    #[inline(always)]
    fn imm_i(self) -> u32 {
        (self >> 20) & 0xfff
    }

    #[inline(always)]
    fn imm_s(self) -> u32 {
        (((self >> 25) & 0x7f) << 5) | ((self >> 7) & 0x1f)
    }

    #[inline(always)]
    fn imm_b(self) -> u32 {
        let b12 = (self >> 31) & 0x1;
        let b11 = (self >> 7) & 0x1;
        let b10_5 = (self >> 25) & 0x3f;
        let b4_1 = (self >> 8) & 0xf;
        (b12 << 12) | (b11 << 11) | (b10_5 << 5) | (b4_1 << 1)
    }

    #[inline(always)]
    fn imm_u(self) -> u32 {
        (self >> 12) & 0xf_ffff
    }

    #[inline(always)]
    fn imm_j(self) -> u32 {
        let b20 = (self >> 31) & 0x1;
        let b19_12 = (self >> 12) & 0xff;
        let b11 = (self >> 20) & 0x1;
        let b10_1 = (self >> 21) & 0x3ff;
        (b20 << 20) | (b19_12 << 12) | (b11 << 11) | (b10_1 << 1)
    }
}

/// Encoding format, selected by the 7-bit opcode alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate, loads and `jalr`.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper immediates.
    U,
    /// `jal`.
    J,
    /// Opcode absent from the lookup table.
    Unknown,
}

impl Format {
    /// Looks up the format for an opcode.
    pub fn from_opcode(opcode: u32) -> Self {
        match opcode {
            opcodes::OP_REG => Format::R,
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Format::I,
            opcodes::OP_STORE => Format::S,
            opcodes::OP_BRANCH => Format::B,
            opcodes::OP_LUI | opcodes::OP_AUIPC => Format::U,
            opcodes::OP_JAL => Format::J,
            _ => Format::Unknown,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Format::R => "R",
            Format::I => "I",
            Format::S => "S",
            Format::B => "B",
            Format::U => "U",
            Format::J => "J",
            Format::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

/// Operand fields of a decoded instruction, one variant per format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operands {
    R {
        rd: usize,
        rs1: usize,
        rs2: usize,
        funct3: u32,
        funct7: u32,
    },
    I {
        rd: usize,
        rs1: usize,
        funct3: u32,
        imm: u32,
    },
    S {
        rs1: usize,
        rs2: usize,
        funct3: u32,
        imm: u32,
    },
    B {
        rs1: usize,
        rs2: usize,
        funct3: u32,
        imm: u32,
    },
    U {
        rd: usize,
        imm: u32,
    },
    J {
        imm: u32,
    },
    Unknown,
}

/// A decoded instruction word.
///
/// Immutable once built by [`crate::isa::decode`]; the encoding is the
/// source of truth and every other field is derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    encoding: u32,
    opcode: u32,
    operands: Operands,
}

impl Instruction {
    pub(crate) fn new(encoding: u32, operands: Operands) -> Self {
        Self {
            encoding,
            opcode: encoding.opcode(),
            operands,
        }
    }

    pub fn encoding(&self) -> u32 {
        self.encoding
    }

    pub fn opcode(&self) -> u32 {
        self.opcode
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn format(&self) -> Format {
        match self.operands {
            Operands::R { .. } => Format::R,
            Operands::I { .. } => Format::I,
            Operands::S { .. } => Format::S,
            Operands::B { .. } => Format::B,
            Operands::U { .. } => Format::U,
            Operands::J { .. } => Format::J,
            Operands::Unknown => Format::Unknown,
        }
    }

    /// Destination register, present for R, I and U formats.
    pub fn rd(&self) -> Option<usize> {
        match self.operands {
            Operands::R { rd, .. } | Operands::I { rd, .. } | Operands::U { rd, .. } => Some(rd),
            _ => None,
        }
    }

    /// First source register, present for R, I, S and B formats.
    pub fn rs1(&self) -> Option<usize> {
        match self.operands {
            Operands::R { rs1, .. }
            | Operands::I { rs1, .. }
            | Operands::S { rs1, .. }
            | Operands::B { rs1, .. } => Some(rs1),
            _ => None,
        }
    }

    /// Second source register, present for R, S and B formats.
    pub fn rs2(&self) -> Option<usize> {
        match self.operands {
            Operands::R { rs2, .. } | Operands::S { rs2, .. } | Operands::B { rs2, .. } => {
                Some(rs2)
            }
            _ => None,
        }
    }

    pub fn funct3(&self) -> Option<u32> {
        match self.operands {
            Operands::R { funct3, .. }
            | Operands::I { funct3, .. }
            | Operands::S { funct3, .. }
            | Operands::B { funct3, .. } => Some(funct3),
            _ => None,
        }
    }

    pub fn funct7(&self) -> Option<u32> {
        match self.operands {
            Operands::R { funct7, .. } => Some(funct7),
            _ => None,
        }
    }

    /// Raw, unsigned immediate as assembled for the format.
    pub fn imm(&self) -> Option<u32> {
        match self.operands {
            Operands::I { imm, .. }
            | Operands::S { imm, .. }
            | Operands::B { imm, .. }
            | Operands::U { imm, .. }
            | Operands::J { imm } => Some(imm),
            _ => None,
        }
    }

    pub fn is_branch(&self) -> bool {
        matches!(self.operands, Operands::B { .. })
    }

    /// `jal`, or `jalr` among I-format words.
    pub fn is_jump(&self) -> bool {
        match self.operands {
            Operands::J { .. } => true,
            Operands::I { .. } => self.opcode == opcodes::OP_JALR,
            _ => false,
        }
    }

    /// Branch or jump; anything that redirects fetch.
    pub fn is_control(&self) -> bool {
        self.is_branch() || self.is_jump()
    }

    /// Source registers read by this instruction, in `rs1`, `rs2` order.
    pub fn sources(&self) -> impl Iterator<Item = usize> {
        self.rs1().into_iter().chain(self.rs2())
    }

    /// Symmetric register dependency test.
    ///
    /// True if either instruction writes a register the other one reads.
    pub fn depends_on(&self, other: &Instruction) -> bool {
        let reads = |reader: &Instruction, writer: &Instruction| match writer.rd() {
            Some(rd) => reader.sources().any(|rs| rs == rd),
            None => false,
        };
        reads(other, self) || reads(self, other)
    }

    /// Flat view of the licensed fields for presentation and JSON output.
    pub fn fields(&self) -> DecodedFields {
        DecodedFields {
            encoding: self.encoding,
            format: self.format(),
            opcode: self.opcode,
            rd: self.rd(),
            funct3: self.funct3(),
            rs1: self.rs1(),
            rs2: self.rs2(),
            imm: self.imm(),
            funct7: self.funct7(),
            is_branch: self.is_branch(),
            is_jump: self.is_jump(),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "format={}, opcode={:#04x}", self.format(), self.opcode)?;
        if let Some(rd) = self.rd() {
            write!(f, ", rd=x{}", rd)?;
        }
        if let Some(funct3) = self.funct3() {
            write!(f, ", funct3={:#x}", funct3)?;
        }
        if let Some(rs1) = self.rs1() {
            write!(f, ", rs1=x{}", rs1)?;
        }
        if let Some(rs2) = self.rs2() {
            write!(f, ", rs2=x{}", rs2)?;
        }
        if let Some(imm) = self.imm() {
            write!(f, ", imm={:#x}", imm)?;
        }
        if let Some(funct7) = self.funct7() {
            write!(f, ", funct7={:#04x}", funct7)?;
        }
        Ok(())
    }
}

/// Serializable record of a decoded instruction; absent fields are omitted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DecodedFields {
    pub encoding: u32,
    pub format: Format,
    pub opcode: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rd: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funct3: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs1: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rs2: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imm: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub funct7: Option<u32>,
    pub is_branch: bool,
    pub is_jump: bool,
}
