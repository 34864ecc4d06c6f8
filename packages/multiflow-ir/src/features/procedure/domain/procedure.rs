/*
 * Multi-function procedure graph
 *
 * Owns every variable and instruction and keeps the graph's back-references
 * (instruction `prev` lists, variable `users` lists) consistent through the
 * mutation API below. Entities are created through the `new_*` factories and
 * live exactly as long as the procedure.
 *
 * Construction is unchecked: edges may dangle and operands may be missing
 * while a procedure is being wired up. Well-formedness is a post-construction
 * property established by `validate`.
 */

use std::sync::Arc;

use super::instruction::{
    BranchInstructionId, CallInstructionId, DestructInstructionId, DummyInstructionId, Instruction,
    InstructionId, InstructionKind, ReturnInstructionId,
};
use super::variable::{Variable, VariableId};
use crate::shared::models::{DataType, InterfaceType, MultiFunction};

/// Successor slot addressed by an edge mutation.
#[derive(Clone, Copy)]
enum SuccessorSlot {
    Next,
    BranchTrue,
    BranchFalse,
}

/// Variable slot addressed by an operand mutation.
#[derive(Clone, Copy)]
enum VariableSlot {
    Condition,
    DestructTarget,
    CallParam(usize),
}

/// A control-flow graph of multi-function calls over typed variables.
#[derive(Debug, Default)]
pub struct Procedure {
    variables: Vec<Variable>,
    instructions: Vec<Instruction>,
    call_instructions: Vec<CallInstructionId>,
    branch_instructions: Vec<BranchInstructionId>,
    destruct_instructions: Vec<DestructInstructionId>,
    dummy_instructions: Vec<DummyInstructionId>,
    return_instructions: Vec<ReturnInstructionId>,
    params: Vec<(InterfaceType, VariableId)>,
    entry: Option<InstructionId>,
}

impl Procedure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a variable; ids are dense and follow creation order.
    pub fn new_variable(&mut self, data_type: DataType, name: Option<String>) -> VariableId {
        let id = VariableId(self.variables.len() as u32);
        self.variables.push(Variable {
            id,
            data_type,
            name,
            users: Vec::new(),
        });
        id
    }

    pub fn set_variable_name(&mut self, variable: VariableId, name: Option<String>) {
        self.variables[variable.index()].name = name;
    }

    fn push_instruction(&mut self, kind: InstructionKind) -> InstructionId {
        let id = InstructionId(self.instructions.len() as u32);
        self.instructions.push(Instruction {
            id,
            prev: Vec::new(),
            kind,
        });
        id
    }

    /// Allocate a call instruction with one unset slot per function parameter.
    pub fn new_call_instruction(&mut self, function: Arc<dyn MultiFunction>) -> CallInstructionId {
        let params = vec![None; function.param_amount()];
        let id = CallInstructionId(self.push_instruction(InstructionKind::Call {
            function,
            params,
            next: None,
        }));
        self.call_instructions.push(id);
        id
    }

    pub fn new_branch_instruction(&mut self) -> BranchInstructionId {
        let id = BranchInstructionId(self.push_instruction(InstructionKind::Branch {
            condition: None,
            branch_true: None,
            branch_false: None,
        }));
        self.branch_instructions.push(id);
        id
    }

    pub fn new_destruct_instruction(&mut self) -> DestructInstructionId {
        let id = DestructInstructionId(self.push_instruction(InstructionKind::Destruct {
            variable: None,
            next: None,
        }));
        self.destruct_instructions.push(id);
        id
    }

    pub fn new_dummy_instruction(&mut self) -> DummyInstructionId {
        let id = DummyInstructionId(self.push_instruction(InstructionKind::Dummy { next: None }));
        self.dummy_instructions.push(id);
        id
    }

    pub fn new_return_instruction(&mut self) -> ReturnInstructionId {
        let id = ReturnInstructionId(self.push_instruction(InstructionKind::Return));
        self.return_instructions.push(id);
        id
    }

    /// Append a variable to the procedure's own signature.
    pub fn add_parameter(&mut self, interface_type: InterfaceType, variable: VariableId) {
        self.params.push((interface_type, variable));
    }

    pub fn set_entry(&mut self, instruction: InstructionId) {
        self.entry = Some(instruction);
    }

    // ── edge mutation ──────────────────────────────────────────────────

    pub fn set_call_next(&mut self, call: CallInstructionId, next: Option<InstructionId>) {
        self.rewire_successor(call.into(), SuccessorSlot::Next, next);
    }

    /// Bind `variable` to parameter slot `index` of `call`.
    ///
    /// Panics when the variable's data type differs from the type the
    /// function declares for that slot; the mismatch is a programming error,
    /// not a validation failure.
    pub fn set_call_param(
        &mut self,
        call: CallInstructionId,
        index: usize,
        variable: Option<VariableId>,
    ) {
        if let Some(variable) = variable {
            let declared = match &self.instructions[InstructionId::from(call).index()].kind {
                InstructionKind::Call { function, .. } => function.param_type(index).data_type(),
                _ => unreachable!("call handle resolves to a call instruction"),
            };
            assert_eq!(
                declared,
                self.variables[variable.index()].data_type,
                "variable ${variable} does not have the data type call parameter {index} declares",
            );
        }
        self.rewire_variable(call.into(), VariableSlot::CallParam(index), variable);
    }

    /// Bind every parameter slot of `call` at once.
    pub fn set_call_params(&mut self, call: CallInstructionId, variables: &[VariableId]) {
        let amount = match &self.instructions[InstructionId::from(call).index()].kind {
            InstructionKind::Call { params, .. } => params.len(),
            _ => unreachable!("call handle resolves to a call instruction"),
        };
        assert_eq!(variables.len(), amount, "one variable per call parameter");
        for (index, &variable) in variables.iter().enumerate() {
            self.set_call_param(call, index, Some(variable));
        }
    }

    pub fn set_branch_condition(
        &mut self,
        branch: BranchInstructionId,
        condition: Option<VariableId>,
    ) {
        self.rewire_variable(branch.into(), VariableSlot::Condition, condition);
    }

    pub fn set_branch_true(&mut self, branch: BranchInstructionId, target: Option<InstructionId>) {
        self.rewire_successor(branch.into(), SuccessorSlot::BranchTrue, target);
    }

    pub fn set_branch_false(&mut self, branch: BranchInstructionId, target: Option<InstructionId>) {
        self.rewire_successor(branch.into(), SuccessorSlot::BranchFalse, target);
    }

    pub fn set_destruct_variable(
        &mut self,
        destruct: DestructInstructionId,
        variable: Option<VariableId>,
    ) {
        self.rewire_variable(destruct.into(), VariableSlot::DestructTarget, variable);
    }

    pub fn set_destruct_next(
        &mut self,
        destruct: DestructInstructionId,
        next: Option<InstructionId>,
    ) {
        self.rewire_successor(destruct.into(), SuccessorSlot::Next, next);
    }

    pub fn set_dummy_next(&mut self, dummy: DummyInstructionId, next: Option<InstructionId>) {
        self.rewire_successor(dummy.into(), SuccessorSlot::Next, next);
    }

    /// Detach the slot's current target, attach the new one, store it.
    ///
    /// The single place where successor edges and `prev` lists change
    /// together.
    fn rewire_successor(
        &mut self,
        from: InstructionId,
        slot: SuccessorSlot,
        target: Option<InstructionId>,
    ) {
        let old = *self.successor_slot_mut(from, slot);
        if let Some(old) = old {
            let prev = &mut self.instructions[old.index()].prev;
            let position = prev
                .iter()
                .position(|&p| p == from)
                .expect("successor edge is mirrored in the target's prev list");
            prev.swap_remove(position);
        }
        if let Some(new) = target {
            self.instructions[new.index()].prev.push(from);
        }
        *self.successor_slot_mut(from, slot) = target;
    }

    /// Counterpart of `rewire_successor` for variable operands and `users`.
    fn rewire_variable(
        &mut self,
        instruction: InstructionId,
        slot: VariableSlot,
        variable: Option<VariableId>,
    ) {
        let old = *self.variable_slot_mut(instruction, slot);
        if let Some(old) = old {
            let users = &mut self.variables[old.index()].users;
            let position = users
                .iter()
                .position(|&u| u == instruction)
                .expect("variable reference is mirrored in the users list");
            users.swap_remove(position);
        }
        if let Some(new) = variable {
            self.variables[new.index()].users.push(instruction);
        }
        *self.variable_slot_mut(instruction, slot) = variable;
    }

    fn successor_slot_mut(
        &mut self,
        instruction: InstructionId,
        slot: SuccessorSlot,
    ) -> &mut Option<InstructionId> {
        match (&mut self.instructions[instruction.index()].kind, slot) {
            (InstructionKind::Call { next, .. }, SuccessorSlot::Next)
            | (InstructionKind::Destruct { next, .. }, SuccessorSlot::Next)
            | (InstructionKind::Dummy { next }, SuccessorSlot::Next) => next,
            (InstructionKind::Branch { branch_true, .. }, SuccessorSlot::BranchTrue) => branch_true,
            (InstructionKind::Branch { branch_false, .. }, SuccessorSlot::BranchFalse) => {
                branch_false
            }
            _ => unreachable!("typed handle addresses a slot its instruction kind has"),
        }
    }

    fn variable_slot_mut(
        &mut self,
        instruction: InstructionId,
        slot: VariableSlot,
    ) -> &mut Option<VariableId> {
        match (&mut self.instructions[instruction.index()].kind, slot) {
            (InstructionKind::Branch { condition, .. }, VariableSlot::Condition) => condition,
            (InstructionKind::Destruct { variable, .. }, VariableSlot::DestructTarget) => variable,
            (InstructionKind::Call { params, .. }, VariableSlot::CallParam(index)) => {
                &mut params[index]
            }
            _ => unreachable!("typed handle addresses a slot its instruction kind has"),
        }
    }

    // ── read access ────────────────────────────────────────────────────

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.index()]
    }

    /// All instructions in creation order, every kind mixed together.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn instruction(&self, id: InstructionId) -> &Instruction {
        &self.instructions[id.index()]
    }

    pub fn call_instructions(&self) -> &[CallInstructionId] {
        &self.call_instructions
    }

    pub fn branch_instructions(&self) -> &[BranchInstructionId] {
        &self.branch_instructions
    }

    pub fn destruct_instructions(&self) -> &[DestructInstructionId] {
        &self.destruct_instructions
    }

    pub fn dummy_instructions(&self) -> &[DummyInstructionId] {
        &self.dummy_instructions
    }

    pub fn return_instructions(&self) -> &[ReturnInstructionId] {
        &self.return_instructions
    }

    /// The procedure's own signature: role plus backing variable, in order.
    pub fn params(&self) -> &[(InterfaceType, VariableId)] {
        &self.params
    }

    pub fn entry(&self) -> Option<InstructionId> {
        self.entry
    }
}
