/*
 * Basic-block discovery
 *
 * Partitions the instruction graph into maximal straight-line runs. Blocks
 * exist only for rendering; the IR itself stays instruction-granular.
 */

use crate::features::procedure::domain::{InstructionId, InstructionKind, Procedure};

/// True when `instruction` must start a block: the procedure entry, a join
/// point (zero or several predecessors), or the target of a branch.
pub fn begins_block(procedure: &Procedure, instruction: InstructionId) -> bool {
    if procedure.entry() == Some(instruction) {
        return true;
    }
    let prev = procedure.instruction(instruction).prev();
    if prev.len() != 1 {
        return true;
    }
    matches!(
        procedure.instruction(prev[0]).kind(),
        InstructionKind::Branch { .. }
    )
}

/// First instruction of the block containing `representative`.
fn block_begin(procedure: &Procedure, representative: InstructionId) -> InstructionId {
    let mut current = representative;
    while !begins_block(procedure, current) {
        current = procedure.instruction(current).prev()[0];
        if current == representative {
            // A closed loop no block boundary cuts; break it here.
            break;
        }
    }
    current
}

/// Successor of `current` inside the same block, if any.
fn next_in_block(
    procedure: &Procedure,
    current: InstructionId,
    begin: InstructionId,
) -> Option<InstructionId> {
    let next = procedure.instruction(current).linear_next()?;
    if next == begin || begins_block(procedure, next) {
        return None;
    }
    Some(next)
}

/// All instructions of the block containing `representative`, in execution
/// order.
pub fn block_containing(procedure: &Procedure, representative: InstructionId) -> Vec<InstructionId> {
    let begin = block_begin(procedure, representative);
    let mut instructions = vec![begin];
    let mut current = begin;
    while let Some(next) = next_in_block(procedure, current, begin) {
        instructions.push(next);
        current = next;
    }
    instructions
}
