/// Canonical no-op encoding, `addi x0, x0, 0`.
pub const NOP: u32 = 0x0000_0013;

/// Number of successors examined for data hazards after each instruction.
///
/// Models a four-stage pipeline: instruction `i` can conflict with `i+1`,
/// `i+2` and `i+3`.
pub const DATA_HAZARD_WINDOW: usize = 3;

/// Number of successors disturbed by a branch or jump.
pub const CONTROL_HAZARD_WINDOW: usize = 2;

/// NOP words inserted after a branch or jump for each control conflict.
pub const CONTROL_STALL_SLOTS: usize = 2;
