//! Dependency-aware reordering.

use crate::isa::Program;
use crate::pipeline::conflict::{Conflict, ConflictKind};

/// Resolves RAW hazards by hoisting an independent instruction.
///
/// For each RAW conflict `(i, j)` the instructions strictly between `i` and
/// `j` are scanned in order; the first one with no register dependency on
/// instruction `i` swaps places with it. One swap per conflict at most, and
/// a conflict with no independent candidate is left as is. Dependencies are
/// judged on the original decoded program, not on the partially reordered
/// output.
///
/// With forwarding the program is returned unchanged. Conflicts whose
/// consumer lies past the end of `program` are skipped.
pub fn reorder(program: &Program, conflicts: &[Conflict], forwarding: bool) -> Vec<u32> {
    let mut out = program.words().to_vec();
    if forwarding {
        return out;
    }

    let raws = conflicts
        .iter()
        .filter(|c| c.kind() == ConflictKind::Raw && c.consumer() < program.len());

    for conflict in raws {
        let producer = &program[conflict.producer()];
        let candidate = (conflict.producer() + 1..conflict.consumer())
            .find(|&k| !program[k].depends_on(producer));

        if let Some(k) = candidate {
            out.swap(conflict.producer(), k);
        }
    }

    out
}
