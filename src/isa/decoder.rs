//! Instruction decoder.
//!
//! Turns a raw 32-bit word into an [`Instruction`]. Decoding is total: any
//! opcode missing from the format table yields [`Format::Unknown`] with no
//! operand fields rather than an error.

use super::instruction::{Format, Instruction, InstructionBits, Operands};

/// Decodes a 32-bit instruction word.
///
/// Reserved bits are not validated and immediates are raw bit
/// reconstructions without sign extension.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The decoded instruction; the original word stays available through
/// [`Instruction::encoding`].
pub fn decode(inst: u32) -> Instruction {
    let operands = match Format::from_opcode(inst.opcode()) {
        Format::R => Operands::R {
            rd: inst.rd(),
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            funct7: inst.funct7(),
        },
        Format::I => Operands::I {
            rd: inst.rd(),
            rs1: inst.rs1(),
            funct3: inst.funct3(),
            imm: inst.imm_i(),
        },
        Format::S => Operands::S {
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            imm: inst.imm_s(),
        },
        Format::B => Operands::B {
            rs1: inst.rs1(),
            rs2: inst.rs2(),
            funct3: inst.funct3(),
            imm: inst.imm_b(),
        },
        Format::U => Operands::U {
            rd: inst.rd(),
            imm: inst.imm_u(),
        },
        Format::J => Operands::J { imm: inst.imm_j() },
        Format::Unknown => Operands::Unknown,
    };
    Instruction::new(inst, operands)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_opcode_carries_no_fields() {
        let d = decode(0xFFFF_FFFF);
        assert_eq!(d.format(), Format::Unknown);
        assert_eq!(d.opcode(), 0x7f);
        assert_eq!(d.fields().rd, None);
        assert_eq!(d.imm(), None);
        assert!(!d.is_control());
    }

    #[test]
    fn branch_immediate_reassembly() {
        // beq x0, x0, -2 (all offset bits set except bit 0)
        let d = decode(0xFE00_0FE3);
        assert_eq!(d.imm(), Some(0x1FFE));
    }

    #[test]
    fn jump_immediate_reassembly() {
        let d = decode(0xFFFF_F06F);
        assert_eq!(d.imm(), Some(0x1F_FFFE));
    }
}
