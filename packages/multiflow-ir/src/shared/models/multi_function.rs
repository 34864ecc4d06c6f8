//! External multi-function contract.

use std::fmt;
use std::ops::Range;

use super::param::ParamType;

/// A named operation with a fixed, typed parameter list.
///
/// Implementations live outside this crate; the function library and the
/// execution engine agree on the runtime calling convention, while the IR
/// only reads the metadata below.
pub trait MultiFunction: fmt::Debug {
    /// Display name used by diagnostics and graph exports.
    fn name(&self) -> &str;

    /// Number of parameters, fixed for the lifetime of the function.
    fn param_amount(&self) -> usize;

    /// Type and role of the parameter at `index`.
    ///
    /// May panic when `index >= param_amount()`.
    fn param_type(&self, index: usize) -> ParamType;

    /// Iterator over all parameter indices.
    fn param_indices(&self) -> Range<usize> {
        0..self.param_amount()
    }
}
