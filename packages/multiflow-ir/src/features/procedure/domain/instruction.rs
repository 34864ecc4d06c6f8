//! Instruction nodes of the procedure graph.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::variable::VariableId;
use crate::shared::models::MultiFunction;

/// Dense id of an instruction within its procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstructionId(pub(crate) u32);

impl InstructionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for InstructionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle to a call instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallInstructionId(pub(crate) InstructionId);

impl From<CallInstructionId> for InstructionId {
    fn from(id: CallInstructionId) -> Self {
        id.0
    }
}

/// Handle to a branch instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchInstructionId(pub(crate) InstructionId);

impl From<BranchInstructionId> for InstructionId {
    fn from(id: BranchInstructionId) -> Self {
        id.0
    }
}

/// Handle to a destruct instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DestructInstructionId(pub(crate) InstructionId);

impl From<DestructInstructionId> for InstructionId {
    fn from(id: DestructInstructionId) -> Self {
        id.0
    }
}

/// Handle to a dummy instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DummyInstructionId(pub(crate) InstructionId);

impl From<DummyInstructionId> for InstructionId {
    fn from(id: DummyInstructionId) -> Self {
        id.0
    }
}

/// Handle to a return instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReturnInstructionId(pub(crate) InstructionId);

impl From<ReturnInstructionId> for InstructionId {
    fn from(id: ReturnInstructionId) -> Self {
        id.0
    }
}

/// Kind-specific payload of an instruction.
///
/// Operands and successors are `Option` so that a procedure can be wired up
/// incrementally; the validator rejects anything left dangling.
#[derive(Debug)]
pub enum InstructionKind {
    /// Invocation of an external multi-function.
    Call {
        function: Arc<dyn MultiFunction>,
        /// One slot per function parameter.
        params: Vec<Option<VariableId>>,
        next: Option<InstructionId>,
    },
    /// Two-way split on a boolean condition variable.
    Branch {
        condition: Option<VariableId>,
        branch_true: Option<InstructionId>,
        branch_false: Option<InstructionId>,
    },
    /// Explicit end of a value's lifetime.
    Destruct {
        variable: Option<VariableId>,
        next: Option<InstructionId>,
    },
    /// Labelled no-op, useful as a join point.
    Dummy { next: Option<InstructionId> },
    /// Terminal instruction; control leaves the procedure.
    Return,
}

/// A node of the control-flow graph.
#[derive(Debug)]
pub struct Instruction {
    pub(crate) id: InstructionId,
    /// Instructions whose successor edges target this one, one entry per edge.
    pub(crate) prev: Vec<InstructionId>,
    pub(crate) kind: InstructionKind,
}

impl Instruction {
    pub fn id(&self) -> InstructionId {
        self.id
    }

    pub fn prev(&self) -> &[InstructionId] {
        &self.prev
    }

    pub fn kind(&self) -> &InstructionKind {
        &self.kind
    }

    /// The single `next` successor of call/destruct/dummy instructions.
    ///
    /// Branches fork and returns terminate, so neither has a straight-line
    /// successor.
    pub fn linear_next(&self) -> Option<InstructionId> {
        match &self.kind {
            InstructionKind::Call { next, .. }
            | InstructionKind::Destruct { next, .. }
            | InstructionKind::Dummy { next } => *next,
            InstructionKind::Branch { .. } | InstructionKind::Return => None,
        }
    }
}
