//! Integration tests for instruction field extraction and decoding.

use riscv_hazard_analyzer::isa::*;

fn add(rd: u32, rs1: u32, rs2: u32) -> u32 {
    (rs2 << 20) | (rs1 << 15) | (rd << 7) | 0x33
}

/// Tests raw field accessors on a word.
#[test]
fn test_instruction_bits_fields() {
    let inst = 0x003100B3u32; // add x1, x2, x3
    assert_eq!(inst.opcode(), 0x33);
    assert_eq!(inst.rd(), 1);
    assert_eq!(inst.funct3(), 0);
    assert_eq!(inst.rs1(), 2);
    assert_eq!(inst.rs2(), 3);
    assert_eq!(inst.funct7(), 0);
}

/// Tests funct7 extraction for SUB.
#[test]
fn test_instruction_bits_funct7_sub() {
    let inst = 0x403100B3u32; // sub x1, x2, x3
    assert_eq!(inst.funct7(), 0x20);
}

/// Tests R-format decoding exposes all registers and funct7 but no immediate.
#[test]
fn test_decode_r_format() {
    let d = decode(0x003100B3);

    assert_eq!(d.format(), Format::R);
    assert_eq!(d.opcode(), 0x33);
    assert_eq!(d.rd(), Some(1));
    assert_eq!(d.rs1(), Some(2));
    assert_eq!(d.rs2(), Some(3));
    assert_eq!(d.funct3(), Some(0));
    assert_eq!(d.funct7(), Some(0));
    assert_eq!(d.imm(), None);
    assert!(!d.is_branch());
    assert!(!d.is_jump());
}

/// Tests ADDI decoding.
#[test]
fn test_decode_addi() {
    let d = decode(0x00108093);

    assert_eq!(d.format(), Format::I);
    assert_eq!(d.rd(), Some(1));
    assert_eq!(d.rs1(), Some(1));
    assert_eq!(d.rs2(), None);
    assert_eq!(d.funct7(), None);
    assert_eq!(d.imm(), Some(1));
    assert!(!d.is_jump());
}

/// Tests I-format immediates are not sign extended.
#[test]
fn test_decode_addi_negative_immediate_is_raw() {
    let d = decode(0xFFF08093); // addi x1, x1, -1
    assert_eq!(d.imm(), Some(0xFFF));
}

/// Tests load decoding.
#[test]
fn test_decode_lw() {
    let d = decode(0x00812283); // lw x5, 8(x2)

    assert_eq!(d.format(), Format::I);
    assert_eq!(d.rd(), Some(5));
    assert_eq!(d.rs1(), Some(2));
    assert_eq!(d.funct3(), Some(2));
    assert_eq!(d.imm(), Some(8));
}

/// Tests store decoding has both sources and no destination.
#[test]
fn test_decode_sw() {
    let d = decode(0x00512623); // sw x5, 12(x2)

    assert_eq!(d.format(), Format::S);
    assert_eq!(d.rd(), None);
    assert_eq!(d.rs1(), Some(2));
    assert_eq!(d.rs2(), Some(5));
    assert_eq!(d.imm(), Some(12));
}

/// Tests the S immediate concatenates the funct7 and rd bit positions.
#[test]
fn test_decode_sw_split_immediate() {
    let d = decode(0xFE512E23); // sw x5, -4(x2)
    assert_eq!(d.imm(), Some(0xFFC));
}

/// Tests branch decoding.
#[test]
fn test_decode_beq() {
    let d = decode(0x00208463); // beq x1, x2, 8

    assert_eq!(d.format(), Format::B);
    assert_eq!(d.rd(), None);
    assert_eq!(d.rs1(), Some(1));
    assert_eq!(d.rs2(), Some(2));
    assert_eq!(d.imm(), Some(8));
    assert!(d.is_branch());
    assert!(!d.is_jump());
    assert!(d.is_control());
}

/// Tests LUI keeps the 20-bit immediate unshifted.
#[test]
fn test_decode_lui() {
    let d = decode(0x123452B7);

    assert_eq!(d.format(), Format::U);
    assert_eq!(d.rd(), Some(5));
    assert_eq!(d.rs1(), None);
    assert_eq!(d.imm(), Some(0x12345));
}

/// Tests AUIPC decoding.
#[test]
fn test_decode_auipc() {
    let d = decode(0x12345017);

    assert_eq!(d.format(), Format::U);
    assert_eq!(d.rd(), Some(0));
    assert_eq!(d.imm(), Some(0x12345));
}

/// Tests JAL decodes as a jump with no register fields.
#[test]
fn test_decode_jal() {
    let d = decode(0x000000EF); // jal x1, 0

    assert_eq!(d.format(), Format::J);
    assert_eq!(d.rd(), None);
    assert_eq!(d.rs1(), None);
    assert_eq!(d.rs2(), None);
    assert_eq!(d.imm(), Some(0));
    assert!(d.is_jump());
    assert!(!d.is_branch());
}

/// Tests JAL immediate reassembly.
#[test]
fn test_decode_jal_offset() {
    let d = decode(0x0080006F); // jal x0, 8
    assert_eq!(d.imm(), Some(8));
}

/// Tests JALR is an I-format jump.
#[test]
fn test_decode_jalr() {
    let d = decode(0x00008067); // jalr x0, 0(x1)

    assert_eq!(d.format(), Format::I);
    assert_eq!(d.rd(), Some(0));
    assert_eq!(d.rs1(), Some(1));
    assert!(d.is_jump());
    assert!(!d.is_branch());
}

/// Tests opcodes missing from the table decode as Unknown.
#[test]
fn test_decode_unknown() {
    for word in [0x0000_0073u32, 0x0000_0000, 0xFFFF_FFFF, 0x0000_000F] {
        let d = decode(word);
        assert_eq!(d.format(), Format::Unknown);
        assert_eq!(d.rd(), None);
        assert_eq!(d.rs1(), None);
        assert_eq!(d.rs2(), None);
        assert_eq!(d.imm(), None);
        assert_eq!(d.funct3(), None);
        assert_eq!(d.encoding(), word);
    }
}

/// Tests the canonical NOP decodes as addi x0, x0, 0.
#[test]
fn test_decode_nop() {
    let d = decode(NOP);

    assert_eq!(d.format(), Format::I);
    assert_eq!(d.rd(), Some(0));
    assert_eq!(d.rs1(), Some(0));
    assert_eq!(d.imm(), Some(0));
}

/// Tests field presence follows the format for every opcode.
#[test]
fn test_decode_field_licensing_all_opcodes() {
    for op in 0u32..128 {
        let d = decode(0xABCD_E000 | (0x1F << 7) | op);
        let f = d.format();

        assert_eq!(f, Format::from_opcode(op));
        assert_eq!(d.rd().is_some(), matches!(f, Format::R | Format::I | Format::U));
        assert_eq!(
            d.rs1().is_some(),
            matches!(f, Format::R | Format::I | Format::S | Format::B)
        );
        assert_eq!(d.rs2().is_some(), matches!(f, Format::R | Format::S | Format::B));
        assert_eq!(d.funct7().is_some(), f == Format::R);
        assert_eq!(d.imm().is_some(), !matches!(f, Format::R | Format::Unknown));
        assert_eq!(d.is_branch(), f == Format::B);
        assert_eq!(d.is_jump(), f == Format::J || op == 0x67);
    }
}

/// Tests decoding is deterministic.
#[test]
fn test_decode_deterministic() {
    for word in [0x003100B3u32, 0x00208463, 0xDEADBEEF, 0x0000006F] {
        assert_eq!(decode(word), decode(word));
    }
}

/// Tests the display listing only shows licensed fields.
#[test]
fn test_instruction_display() {
    let s = decode(0x003100B3).to_string();
    assert!(s.starts_with("format=R"));
    assert!(s.contains("rd=x1"));
    assert!(s.contains("rs2=x3"));
    assert!(!s.contains("imm"));

    let s = decode(0x000000EF).to_string();
    assert!(s.contains("imm=0x0"));
    assert!(!s.contains("rd="));
}

/// Tests serialized fields omit unlicensed entries.
#[test]
fn test_decoded_fields_json() {
    let value = serde_json::to_value(decode(0x00512623).fields()).unwrap();

    assert_eq!(value["format"], "S");
    assert_eq!(value["rs1"], 2);
    assert_eq!(value["rs2"], 5);
    assert_eq!(value["imm"], 12);
    assert!(value.get("rd").is_none());
    assert!(value.get("funct7").is_none());
}

/// Tests the symmetric dependency check.
#[test]
fn test_depends_on_symmetric() {
    let writer = decode(add(1, 2, 3));
    let reader = decode(add(4, 1, 5));
    let other = decode(add(6, 7, 8));

    assert!(writer.depends_on(&reader));
    assert!(reader.depends_on(&writer));
    assert!(!writer.depends_on(&other));
    assert!(!other.depends_on(&writer));
}

/// Tests program construction keeps words and instructions aligned.
#[test]
fn test_program_decode() {
    let words = [add(1, 2, 3), 0x00208463, 0x0000006F];
    let program = Program::decode(&words);

    assert_eq!(program.len(), 3);
    assert!(!program.is_empty());
    assert_eq!(program.words(), &words);
    for (i, inst) in program.iter().enumerate() {
        assert_eq!(inst.encoding(), words[i]);
        assert_eq!(program[i], decode(words[i]));
    }
    assert!(program.get(3).is_none());

    let collected: Program = words.iter().copied().collect();
    assert_eq!(collected, program);
}

/// Tests an empty program.
#[test]
fn test_program_empty() {
    let program = Program::decode(&[]);
    assert!(program.is_empty());
    assert_eq!(program.iter().count(), 0);
}
