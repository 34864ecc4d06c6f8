/*
 * Flow-graph views
 *
 * Domain: basic-block discovery over the instruction graph. Infrastructure:
 * textual instruction labels and the DOT export built on the blocks. Pure
 * reads; nothing here mutates the procedure.
 */

pub mod domain;
pub mod infrastructure;

pub use domain::{begins_block, block_containing};
pub use infrastructure::{instruction_label, variable_label};
