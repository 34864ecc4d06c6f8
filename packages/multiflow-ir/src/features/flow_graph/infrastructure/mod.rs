mod dot;

pub use dot::{instruction_label, variable_label};
