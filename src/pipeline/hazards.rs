//! Data and Control Hazard Detection.
//!
//! This module scans a decoded program for the hazards a simple in-order
//! pipeline would stall on. Data hazards (RAW, WAW, WAR) are checked between
//! each instruction and its next three successors; control hazards mark the
//! two successors of every branch or jump.

use crate::common::constants::{CONTROL_HAZARD_WINDOW, DATA_HAZARD_WINDOW};
use crate::isa::{Instruction, Program};
use crate::pipeline::conflict::{Conflict, ConflictKind};

/// Detects RAW, WAW and WAR hazards within the lookahead window.
///
/// Pairs are scanned with the producer ascending, then the consumer
/// ascending, and each matching register yields its own entry: a consumer
/// reading the producer's destination through both sources produces two RAW
/// conflicts for the same pair.
///
/// With forwarding, a RAW hazard between adjacent instructions is bypassed
/// and not reported. RAW hazards spanning more than one slot, and all WAW
/// and WAR hazards, are reported either way.
///
/// # Arguments
///
/// * `program` - The decoded program
/// * `forwarding` - Whether a single-stage bypass path is available
///
/// # Returns
///
/// The conflicts in scan order.
pub fn detect_data(program: &Program, forwarding: bool) -> Vec<Conflict> {
    let insts = program.instructions();
    let mut conflicts = Vec::new();

    for (i, producer) in insts.iter().enumerate() {
        let end = (i + 1 + DATA_HAZARD_WINDOW).min(insts.len());
        for (j, consumer) in insts.iter().enumerate().take(end).skip(i + 1) {
            push_pair(&mut conflicts, i, producer, j, consumer, forwarding);
        }
    }

    conflicts
}

fn push_pair(
    out: &mut Vec<Conflict>,
    i: usize,
    producer: &Instruction,
    j: usize,
    consumer: &Instruction,
    forwarding: bool,
) {
    if let Some(rd) = producer.rd() {
        if !forwarding || j - i > 1 {
            for rs in consumer.sources() {
                if rs == rd {
                    out.push(Conflict::new(i, j, ConflictKind::Raw));
                }
            }
        }

        if consumer.rd() == Some(rd) {
            out.push(Conflict::new(i, j, ConflictKind::Waw));
        }
    }

    if let Some(rd) = consumer.rd() {
        for rs in producer.sources() {
            if rs == rd {
                out.push(Conflict::new(i, j, ConflictKind::War));
            }
        }
    }
}

/// Detects control hazards after branches and jumps.
///
/// Every branch or jump is assumed to disturb the two instructions that
/// follow it, taken or not.
///
/// # Returns
///
/// `(producer, consumer)` pairs, producer ascending.
pub fn detect_control(program: &Program) -> Vec<(usize, usize)> {
    let len = program.len();
    let mut pairs = Vec::new();

    for (i, inst) in program.iter().enumerate() {
        if !inst.is_control() {
            continue;
        }
        let end = (i + 1 + CONTROL_HAZARD_WINDOW).min(len);
        pairs.extend((i + 1..end).map(|j| (i, j)));
    }

    pairs
}
