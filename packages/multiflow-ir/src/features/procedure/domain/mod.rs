mod instruction;
mod procedure;
mod variable;

pub use instruction::{
    BranchInstructionId, CallInstructionId, DestructInstructionId, DummyInstructionId, Instruction,
    InstructionId, InstructionKind, ReturnInstructionId,
};
pub use procedure::Procedure;
pub use variable::{Variable, VariableId};
