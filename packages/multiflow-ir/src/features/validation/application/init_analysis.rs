/*
 * Initialization analysis
 *
 * Backward may-analysis over the procedure graph. For a query
 * (instruction, variable) it reports whether some control-flow path reaches
 * the instruction with the variable initialized, and whether some path
 * reaches it with the variable uninitialized. Both bits set means the paths
 * disagree; neither bit set means no path reaches the instruction at all.
 *
 * The search walks predecessor edges from the query point. A call writing
 * the variable through an output slot produces it and settles that branch of
 * the search; a destruct of the variable settles it the other way; every
 * other instruction is transparent. Reaching the entry folds in the state the
 * caller hands the variable on entry. The visited set bounds the walk, so
 * loops terminate.
 */

use rustc_hash::FxHashSet;

use crate::features::procedure::domain::{InstructionId, InstructionKind, Procedure, VariableId};
use crate::shared::models::InterfaceType;

/// May-initialized / may-uninitialized state of one variable at one point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitState {
    /// Some path reaches the point with the variable initialized.
    pub can_be_initialized: bool,
    /// Some path reaches the point with the variable uninitialized.
    pub can_be_uninitialized: bool,
}

impl InitState {
    /// At least one path reaches the queried point.
    pub fn is_reachable(self) -> bool {
        self.can_be_initialized || self.can_be_uninitialized
    }

    fn merge(&mut self, other: InitState) {
        self.can_be_initialized |= other.can_be_initialized;
        self.can_be_uninitialized |= other.can_be_uninitialized;
    }
}

/// State handed to `variable` by the caller when the procedure is entered:
/// initialized for input and mutable parameters, uninitialized for output
/// parameters and plain locals.
fn entry_state(procedure: &Procedure, variable: VariableId) -> InitState {
    let caller_initialized = procedure.params().iter().any(|&(interface_type, param)| {
        param == variable
            && matches!(interface_type, InterfaceType::Input | InterfaceType::Mutable)
    });
    InitState {
        can_be_initialized: caller_initialized,
        can_be_uninitialized: !caller_initialized,
    }
}

/// Does `instruction` initialize `variable` by writing it through an output
/// slot?
fn writes_variable(kind: &InstructionKind, variable: VariableId) -> bool {
    match kind {
        InstructionKind::Call {
            function, params, ..
        } => function.param_indices().any(|index| {
            params[index] == Some(variable)
                && function.param_type(index).interface_type() == InterfaceType::Output
        }),
        _ => false,
    }
}

/// Initialization state of `variable` immediately before `instruction` runs.
pub fn initialization_state_before(
    procedure: &Procedure,
    instruction: InstructionId,
    variable: VariableId,
) -> InitState {
    let mut state = InitState::default();

    if procedure.entry() == Some(instruction) {
        state.merge(entry_state(procedure, variable));
    }

    let mut visited: FxHashSet<InstructionId> = FxHashSet::default();
    let mut worklist: Vec<InstructionId> = procedure.instruction(instruction).prev().to_vec();

    while let Some(current) = worklist.pop() {
        if !visited.insert(current) {
            continue;
        }
        let kind = procedure.instruction(current).kind();
        let settled = if writes_variable(kind, variable) {
            state.can_be_initialized = true;
            true
        } else if matches!(kind, InstructionKind::Destruct { variable: target, .. } if *target == Some(variable))
        {
            state.can_be_uninitialized = true;
            true
        } else {
            false
        };
        if !settled {
            if procedure.entry() == Some(current) {
                state.merge(entry_state(procedure, variable));
            }
            worklist.extend_from_slice(procedure.instruction(current).prev());
        }
    }

    state
}
