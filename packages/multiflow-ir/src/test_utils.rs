//! Shared fixtures for in-crate unit tests.

use std::sync::Arc;

use crate::shared::models::{DataType, InterfaceType, MultiFunction, ParamType};

pub(crate) const FLOAT: DataType = DataType::new(0);
pub(crate) const BOOL: DataType = DataType::new(1);

/// Stub multi-function described by a name and its parameter list.
#[derive(Debug)]
pub(crate) struct StubFunction {
    name: &'static str,
    params: Vec<ParamType>,
}

impl StubFunction {
    pub(crate) fn new(name: &'static str, params: Vec<ParamType>) -> Arc<Self> {
        Arc::new(Self { name, params })
    }
}

impl MultiFunction for StubFunction {
    fn name(&self) -> &str {
        self.name
    }

    fn param_amount(&self) -> usize {
        self.params.len()
    }

    fn param_type(&self, index: usize) -> ParamType {
        self.params[index]
    }
}

/// `copy(in float) -> out float`
pub(crate) fn copy_fn() -> Arc<StubFunction> {
    StubFunction::new(
        "copy",
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, FLOAT),
        ],
    )
}

/// `select(in float, in float) -> out float`
pub(crate) fn select_fn() -> Arc<StubFunction> {
    StubFunction::new(
        "select",
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, FLOAT),
        ],
    )
}

/// `is_positive(in float) -> out bool`
pub(crate) fn predicate_fn() -> Arc<StubFunction> {
    StubFunction::new(
        "is_positive",
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, BOOL),
        ],
    )
}

/// `negate(mut bool)`
pub(crate) fn negate_fn() -> Arc<StubFunction> {
    StubFunction::new("negate", vec![ParamType::new(InterfaceType::Mutable, BOOL)])
}
