/*
 * multiflow-ir - Multi-function procedure IR
 *
 * Statically validated intermediate representation for composing
 * side-effect-rich multi-functions into a control-flow graph; the backbone
 * of batch node-graph evaluation.
 *
 * Feature-First Architecture:
 * - shared/     : vocabulary models (DataType, ParamType, MultiFunction)
 * - features/   : vertical slices (procedure -> validation -> flow_graph)
 *
 * Construction through the `Procedure` builder is unchecked;
 * `Procedure::validate` proves well-formedness (structural soundness plus
 * the initialization analysis) before a procedure is handed to an execution
 * engine. Rendering (`to_dot`) works on any procedure, valid or not.
 */

pub mod features;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_utils;

pub use features::flow_graph::{begins_block, block_containing, instruction_label, variable_label};
pub use features::procedure::{
    BranchInstructionId, CallInstructionId, DestructInstructionId, DummyInstructionId, Instruction,
    InstructionId, InstructionKind, Procedure, ReturnInstructionId, Variable, VariableId,
};
pub use features::validation::{check, initialization_state_before, InitState, Violation};
pub use shared::models::{DataType, InterfaceType, MultiFunction, ParamType};
