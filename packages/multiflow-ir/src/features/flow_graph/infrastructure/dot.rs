/*
 * DOT export
 *
 * Renders the procedure as a directed graph of basic blocks for debugging.
 * Output is deterministic: blocks are discovered by walking the per-kind
 * instruction lists in creation order, and edges follow the block emission
 * order, so equal procedures render to equal strings.
 */

use rustc_hash::{FxHashMap, FxHashSet};

use crate::features::flow_graph::domain::block_containing;
use crate::features::procedure::domain::{
    InstructionId, InstructionKind, Procedure, VariableId,
};

/// `$id`, `$id(name)`, or `<none>` for an unset slot.
pub fn variable_label(procedure: &Procedure, variable: Option<VariableId>) -> String {
    match variable {
        None => "<none>".to_string(),
        Some(id) => {
            let variable = procedure.variable(id);
            match variable.name() {
                Some(name) => format!("${}({})", variable.id(), name),
                None => format!("${}", variable.id()),
            }
        }
    }
}

/// One-line textual form of an instruction.
pub fn instruction_label(procedure: &Procedure, instruction: InstructionId) -> String {
    match procedure.instruction(instruction).kind() {
        InstructionKind::Call {
            function, params, ..
        } => {
            let mut label = format!("{} - ", function.name());
            for index in function.param_indices() {
                if index > 0 {
                    label.push_str(", ");
                }
                let role = function.param_type(index).interface_type();
                label.push_str(role.as_str());
                label.push(' ');
                label.push_str(&variable_label(procedure, params[index]));
            }
            label
        }
        InstructionKind::Branch { condition, .. } => {
            format!("Branch on {}", variable_label(procedure, *condition))
        }
        InstructionKind::Destruct { variable, .. } => {
            format!("Destruct {}", variable_label(procedure, *variable))
        }
        InstructionKind::Dummy { .. } => "Dummy".to_string(),
        InstructionKind::Return => "Return".to_string(),
    }
}

/// Escape one label line for use inside a double-quoted DOT string.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for ch in label.chars() {
        match ch {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(ch);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

struct DotWriter {
    out: String,
    node_count: usize,
}

impl DotWriter {
    fn new() -> Self {
        Self {
            out: String::from("digraph {\n"),
            node_count: 0,
        }
    }

    /// Emit a node whose label is already escaped.
    fn node(&mut self, shape: &str, label: &str) -> usize {
        let node = self.node_count;
        self.node_count += 1;
        self.out
            .push_str(&format!("  node_{node} [shape={shape} label=\"{label}\"]\n"));
        node
    }

    fn edge(&mut self, from: usize, to: usize, color: Option<&str>) {
        match color {
            Some(color) => self
                .out
                .push_str(&format!("  node_{from} -> node_{to} [color=\"{color}\"]\n")),
            None => self.out.push_str(&format!("  node_{from} -> node_{to}\n")),
        }
    }

    fn finish(mut self) -> String {
        self.out.push_str("}\n");
        self.out
    }
}

impl Procedure {
    /// DOT rendering of the control flow, one rectangle node per basic block.
    pub fn to_dot(&self) -> String {
        to_dot(self)
    }
}

fn to_dot(procedure: &Procedure) -> String {
    // Creation order per kind, matching the per-kind instruction lists.
    let mut all_instructions: Vec<InstructionId> = Vec::new();
    all_instructions.extend(
        procedure
            .call_instructions()
            .iter()
            .map(|&id| InstructionId::from(id)),
    );
    all_instructions.extend(
        procedure
            .branch_instructions()
            .iter()
            .map(|&id| InstructionId::from(id)),
    );
    all_instructions.extend(
        procedure
            .destruct_instructions()
            .iter()
            .map(|&id| InstructionId::from(id)),
    );
    all_instructions.extend(
        procedure
            .dummy_instructions()
            .iter()
            .map(|&id| InstructionId::from(id)),
    );
    all_instructions.extend(
        procedure
            .return_instructions()
            .iter()
            .map(|&id| InstructionId::from(id)),
    );

    let mut writer = DotWriter::new();
    let mut handled: FxHashSet<InstructionId> = FxHashSet::default();
    let mut node_by_begin: FxHashMap<InstructionId, usize> = FxHashMap::default();
    // Block terminators in emission order, each with its node.
    let mut block_ends: Vec<(InstructionId, usize)> = Vec::new();

    for &representative in &all_instructions {
        if handled.contains(&representative) {
            continue;
        }
        let block = block_containing(procedure, representative);
        let mut label = String::new();
        for &instruction in &block {
            handled.insert(instruction);
            label.push_str(&escape_label(&instruction_label(procedure, instruction)));
            label.push_str("\\l");
        }
        let node = writer.node("rectangle", &label);
        node_by_begin.insert(block[0], node);
        block_ends.push((block[block.len() - 1], node));
    }

    let block_node = |writer: &mut DotWriter, target: Option<InstructionId>| match target {
        Some(target) => *node_by_begin
            .get(&target)
            .expect("every block terminator targets a block begin"),
        None => writer.node("diamond", "missing"),
    };

    for &(terminator, from_node) in &block_ends {
        match procedure.instruction(terminator).kind() {
            InstructionKind::Call { next, .. }
            | InstructionKind::Destruct { next, .. }
            | InstructionKind::Dummy { next } => {
                let to_node = block_node(&mut writer, *next);
                writer.edge(from_node, to_node, None);
            }
            InstructionKind::Branch {
                branch_true,
                branch_false,
                ..
            } => {
                let true_node = block_node(&mut writer, *branch_true);
                writer.edge(from_node, true_node, Some("#118811"));
                let false_node = block_node(&mut writer, *branch_false);
                writer.edge(from_node, false_node, Some("#881111"));
            }
            InstructionKind::Return => {}
        }
    }

    let entry_node = writer.node("circle", "Entry");
    let entry_target = block_node(&mut writer, procedure.entry());
    writer.edge(entry_node, entry_target, None);

    writer.finish()
}
