/*
 * Procedure graph
 *
 * The mutable control-flow graph of multi-function calls: variables,
 * instructions, and the procedure arena that owns both. Every edge mutation
 * flows through `Procedure` so the back-references (`prev`, `users`) stay
 * consistent with the forward edges.
 */

pub mod domain;

pub use domain::{
    BranchInstructionId, CallInstructionId, DestructInstructionId, DummyInstructionId, Instruction,
    InstructionId, InstructionKind, Procedure, ReturnInstructionId, Variable, VariableId,
};
