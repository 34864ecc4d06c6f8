/*
 * Well-formedness violations
 *
 * Diagnostic vocabulary produced by the validator. `Procedure::validate`
 * reduces these to a boolean; `check` hands the full list to the caller.
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::procedure::domain::{InstructionId, VariableId};

/// One way in which a procedure fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum Violation {
    #[error("entry instruction is not set")]
    EntryNotSet,

    #[error("instruction {instruction} has an unset successor")]
    DanglingSuccessor { instruction: InstructionId },

    #[error("instruction {instruction} is missing an operand")]
    MissingOperand { instruction: InstructionId },

    #[error("variable ${variable} fills a mutable or output slot of call {instruction} and is bound to the call again")]
    AliasedCallParams {
        instruction: InstructionId,
        variable: VariableId,
    },

    #[error("variable ${variable} is listed as a procedure parameter more than once")]
    DuplicateParameter { variable: VariableId },

    #[error("variable ${variable} can be uninitialized when instruction {instruction} consumes it")]
    UseOfMaybeUninitialized {
        instruction: InstructionId,
        variable: VariableId,
    },

    #[error("variable ${variable} can still be initialized when call {instruction} writes it")]
    OutputMaybeInitialized {
        instruction: InstructionId,
        variable: VariableId,
    },

    #[error("parameter variable ${variable} can be uninitialized when instruction {instruction} returns")]
    ReturnMissingOutput {
        instruction: InstructionId,
        variable: VariableId,
    },

    #[error("variable ${variable} can still be initialized when instruction {instruction} returns")]
    ReturnWithLiveVariable {
        instruction: InstructionId,
        variable: VariableId,
    },
}
