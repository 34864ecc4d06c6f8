/*
 * Procedure validator
 *
 * Staged pipeline over a frozen procedure graph:
 *   1. entry set
 *   2. every non-return successor wired
 *   3. every operand wired
 *   4. no mutable/output aliasing inside one call
 *   5. procedure parameters are distinct variables
 *   6. initialization requirements (init_analysis)
 *
 * The first stage that reports violations ends the run; later stages rely on
 * the structure established by the earlier ones (the initialization stage
 * dereferences operands stage 3 proved present).
 */

use rustc_hash::FxHashSet;
use tracing::debug;

use super::init_analysis::initialization_state_before;
use crate::features::procedure::domain::{
    InstructionId, InstructionKind, Procedure, VariableId,
};
use crate::features::validation::domain::Violation;
use crate::shared::models::InterfaceType;

/// Run every validation stage in order; the violations of the first failing
/// stage are returned.
pub fn check(procedure: &Procedure) -> Result<(), Vec<Violation>> {
    let stages: [(&str, fn(&Procedure) -> Vec<Violation>); 6] = [
        ("entry", check_entry_set),
        ("successors", check_successors_set),
        ("operands", check_operands_set),
        ("call_aliasing", check_call_aliasing),
        ("distinct_parameters", check_distinct_parameters),
        ("initialization", check_initialization),
    ];
    for (name, stage) in stages {
        let violations = stage(procedure);
        if !violations.is_empty() {
            debug!(
                "validation stage '{}' failed with {} violation(s)",
                name,
                violations.len()
            );
            return Err(violations);
        }
    }
    debug!("procedure passed validation");
    Ok(())
}

impl Procedure {
    /// True when every well-formedness and initialization rule holds.
    pub fn validate(&self) -> bool {
        check(self).is_ok()
    }

    /// Panics with the collected violations when the procedure is invalid.
    pub fn assert_valid(&self) {
        if let Err(violations) = check(self) {
            let list = violations
                .iter()
                .map(|violation| format!("- {violation}"))
                .collect::<Vec<_>>()
                .join("\n");
            panic!("invalid procedure:\n{list}");
        }
    }
}

fn check_entry_set(procedure: &Procedure) -> Vec<Violation> {
    if procedure.entry().is_none() {
        vec![Violation::EntryNotSet]
    } else {
        Vec::new()
    }
}

fn check_successors_set(procedure: &Procedure) -> Vec<Violation> {
    let mut violations = Vec::new();
    for instruction in procedure.instructions() {
        let dangling = match instruction.kind() {
            InstructionKind::Call { next, .. }
            | InstructionKind::Destruct { next, .. }
            | InstructionKind::Dummy { next } => next.is_none(),
            InstructionKind::Branch {
                branch_true,
                branch_false,
                ..
            } => branch_true.is_none() || branch_false.is_none(),
            InstructionKind::Return => false,
        };
        if dangling {
            violations.push(Violation::DanglingSuccessor {
                instruction: instruction.id(),
            });
        }
    }
    violations
}

fn check_operands_set(procedure: &Procedure) -> Vec<Violation> {
    let mut violations = Vec::new();
    for instruction in procedure.instructions() {
        let missing = match instruction.kind() {
            InstructionKind::Call { params, .. } => params.iter().any(|param| param.is_none()),
            InstructionKind::Branch { condition, .. } => condition.is_none(),
            InstructionKind::Destruct { variable, .. } => variable.is_none(),
            InstructionKind::Dummy { .. } | InstructionKind::Return => false,
        };
        if missing {
            violations.push(Violation::MissingOperand {
                instruction: instruction.id(),
            });
        }
    }
    violations
}

/// A variable bound to a mutable or output slot must not be bound to the same
/// call again; repeating a variable across input slots is fine.
fn check_call_aliasing(procedure: &Procedure) -> Vec<Violation> {
    let mut violations = Vec::new();
    for instruction in procedure.instructions() {
        let (function, params) = match instruction.kind() {
            InstructionKind::Call {
                function, params, ..
            } => (function, params),
            _ => continue,
        };
        let mut reported: FxHashSet<VariableId> = FxHashSet::default();
        for index in function.param_indices() {
            let variable = match params[index] {
                Some(variable) => variable,
                None => continue,
            };
            for other_index in index + 1..function.param_amount() {
                if params[other_index] != Some(variable) {
                    continue;
                }
                let both_inputs = function.param_type(index).interface_type()
                    == InterfaceType::Input
                    && function.param_type(other_index).interface_type() == InterfaceType::Input;
                if !both_inputs && reported.insert(variable) {
                    violations.push(Violation::AliasedCallParams {
                        instruction: instruction.id(),
                        variable,
                    });
                }
            }
        }
    }
    violations
}

fn check_distinct_parameters(procedure: &Procedure) -> Vec<Violation> {
    let mut seen: FxHashSet<VariableId> = FxHashSet::default();
    let mut violations = Vec::new();
    for &(_, variable) in procedure.params() {
        if !seen.insert(variable) {
            violations.push(Violation::DuplicateParameter { variable });
        }
    }
    violations
}

/// Mutable and output parameters leave the procedure initialized; everything
/// else must be destroyed before a return.
fn returns_initialized(procedure: &Procedure, variable: VariableId) -> bool {
    procedure.params().iter().any(|&(interface_type, param)| {
        param == variable
            && matches!(interface_type, InterfaceType::Mutable | InterfaceType::Output)
    })
}

fn require_initialized(
    procedure: &Procedure,
    instruction: InstructionId,
    variable: VariableId,
    violations: &mut Vec<Violation>,
) {
    let state = initialization_state_before(procedure, instruction, variable);
    // Unreachable points carry no requirement.
    if state.is_reachable() && !state.can_be_initialized {
        violations.push(Violation::UseOfMaybeUninitialized {
            instruction,
            variable,
        });
    }
}

fn check_initialization(procedure: &Procedure) -> Vec<Violation> {
    let mut violations = Vec::new();
    for instruction in procedure.instructions() {
        match instruction.kind() {
            InstructionKind::Destruct {
                variable: Some(variable),
                ..
            } => {
                require_initialized(procedure, instruction.id(), *variable, &mut violations);
            }
            InstructionKind::Branch {
                condition: Some(condition),
                ..
            } => {
                require_initialized(procedure, instruction.id(), *condition, &mut violations);
            }
            InstructionKind::Call {
                function, params, ..
            } => {
                for index in function.param_indices() {
                    let variable = match params[index] {
                        Some(variable) => variable,
                        None => continue,
                    };
                    let state =
                        initialization_state_before(procedure, instruction.id(), variable);
                    if !state.is_reachable() {
                        continue;
                    }
                    match function.param_type(index).interface_type() {
                        InterfaceType::Input | InterfaceType::Mutable => {
                            if !state.can_be_initialized {
                                violations.push(Violation::UseOfMaybeUninitialized {
                                    instruction: instruction.id(),
                                    variable,
                                });
                            }
                        }
                        InterfaceType::Output => {
                            if !state.can_be_uninitialized {
                                violations.push(Violation::OutputMaybeInitialized {
                                    instruction: instruction.id(),
                                    variable,
                                });
                            }
                        }
                    }
                }
            }
            InstructionKind::Return => {
                for variable in procedure.variables() {
                    let state = initialization_state_before(
                        procedure,
                        instruction.id(),
                        variable.id(),
                    );
                    if !state.is_reachable() {
                        continue;
                    }
                    if returns_initialized(procedure, variable.id()) {
                        if !state.can_be_initialized {
                            violations.push(Violation::ReturnMissingOutput {
                                instruction: instruction.id(),
                                variable: variable.id(),
                            });
                        }
                    } else if !state.can_be_uninitialized {
                        violations.push(Violation::ReturnWithLiveVariable {
                            instruction: instruction.id(),
                            variable: variable.id(),
                        });
                    }
                }
            }
            _ => {}
        }
    }
    violations
}
