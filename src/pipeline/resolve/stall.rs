//! Stall insertion.

use std::iter;

use crate::common::constants::{CONTROL_STALL_SLOTS, NOP};
use crate::isa::Program;
use crate::pipeline::conflict::{Conflict, ConflictKind};

/// Resolves hazards by inserting NOP words after the producer.
///
/// Conflicts are applied in the order given. A running offset tracks how
/// many words have been inserted so far; each insertion lands right after
/// the producer's original index shifted by that offset. The conflict
/// indices themselves are never rewritten.
///
/// * RAW without forwarding: `distance - 1` NOPs.
/// * CONTROL: two NOPs.
/// * WAW, WAR, and RAW with forwarding are reported but not stalled.
///
/// Conflicts whose consumer lies past the end of `program` are skipped.
///
/// # Arguments
///
/// * `program` - The original program
/// * `conflicts` - Conflicts against `program`, in scan order
/// * `forwarding` - Whether RAW hazards are already covered by bypassing
///
/// # Returns
///
/// A new word sequence; `program` is left untouched.
pub fn insert_nops(program: &Program, conflicts: &[Conflict], forwarding: bool) -> Vec<u32> {
    let mut out = program.words().to_vec();
    let mut offset = 0;

    for conflict in conflicts {
        if conflict.consumer() >= program.len() {
            continue;
        }
        let count = stall_slots(conflict, forwarding);
        if count == 0 {
            continue;
        }
        let at = conflict.producer() + 1 + offset;
        out.splice(at..at, iter::repeat(NOP).take(count));
        offset += count;
    }

    out
}

fn stall_slots(conflict: &Conflict, forwarding: bool) -> usize {
    match conflict.kind() {
        ConflictKind::Raw if !forwarding => conflict.distance() - 1,
        ConflictKind::Control => CONTROL_STALL_SLOTS,
        _ => 0,
    }
}
