//! Delayed-branch slot filling.

use crate::common::constants::NOP;
use crate::isa::Program;

/// Fills the delay slot after every branch or jump.
///
/// Single forward pass over the original indices. After a branch or jump at
/// `i`, instruction `i+1` moves into the delay slot when it shares no
/// register with the branch, and is then not emitted again. Otherwise the
/// slot gets a NOP and `i+1` is emitted normally on the next step. A branch
/// or jump with no successor is followed by a NOP.
pub fn apply_delayed_branch(program: &Program) -> Vec<u32> {
    let words = program.words();
    let mut out = Vec::with_capacity(words.len() + 1);
    let mut i = 0;

    while i < words.len() {
        let inst = &program[i];
        out.push(words[i]);

        if inst.is_control() {
            match program.get(i + 1) {
                Some(next) if !next.depends_on(inst) => {
                    out.push(words[i + 1]);
                    i += 1;
                }
                _ => out.push(NOP),
            }
        }

        i += 1;
    }

    out
}
