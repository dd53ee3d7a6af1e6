//! Base integer opcodes recognized by the decoder.

/// Register-register arithmetic (`add`, `sub`, ...).
pub const OP_REG: u32 = 0x33;
/// Register-immediate arithmetic (`addi`, ...).
pub const OP_IMM: u32 = 0x13;
/// Loads.
pub const OP_LOAD: u32 = 0x03;
/// Stores.
pub const OP_STORE: u32 = 0x23;
/// Conditional branches.
pub const OP_BRANCH: u32 = 0x63;
/// Load upper immediate.
pub const OP_LUI: u32 = 0x37;
/// Add upper immediate to PC.
pub const OP_AUIPC: u32 = 0x17;
/// Jump and link.
pub const OP_JAL: u32 = 0x6F;
/// Jump and link register.
pub const OP_JALR: u32 = 0x67;
