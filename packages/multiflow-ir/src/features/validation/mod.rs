/*
 * Procedure validation
 *
 * Domain: the violation vocabulary. Application: the staged well-formedness
 * validator and the flow-sensitive initialization analyzer it builds on.
 *
 * Validation never refuses construction; it is a pure query over a finished
 * graph. `Procedure::validate` answers with a boolean, `check` with the full
 * violation list.
 */

pub mod application;
pub mod domain;

pub use application::{check, initialization_state_before, InitState};
pub use domain::Violation;
