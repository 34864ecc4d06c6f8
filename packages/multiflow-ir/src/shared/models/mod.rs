//! Vocabulary models shared by every feature.

mod multi_function;
mod param;

pub use multi_function::MultiFunction;
pub use param::{DataType, InterfaceType, ParamType};
