//! Shared fixtures for integration tests.

use std::sync::Arc;

use multiflow_ir::{DataType, InterfaceType, MultiFunction, ParamType};

pub const FLOAT: DataType = DataType::new(0);
pub const BOOL: DataType = DataType::new(1);

/// Multi-function stub described by a name and its parameter list.
#[derive(Debug)]
pub struct Function {
    name: &'static str,
    params: Vec<ParamType>,
}

impl Function {
    pub fn new(name: &'static str, params: Vec<ParamType>) -> Arc<Self> {
        Arc::new(Self { name, params })
    }
}

impl MultiFunction for Function {
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

/// `f(in float) -> out float`
pub fn unary_float(name: &'static str) -> Arc<Function> {
    Function::new(
        name,
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, FLOAT),
        ],
    )
}

/// `g(in float, in float) -> out float`
pub fn binary_float(name: &'static str) -> Arc<Function> {
    Function::new(
        name,
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, FLOAT),
        ],
    )
}

/// `b(in float) -> out bool`
pub fn float_predicate(name: &'static str) -> Arc<Function> {
    Function::new(
        name,
        vec![
            ParamType::new(InterfaceType::Input, FLOAT),
            ParamType::new(InterfaceType::Output, BOOL),
        ],
    )
}

/// `h() -> (out float, out float)`
pub fn double_producer(name: &'static str) -> Arc<Function> {
    Function::new(
        name,
        vec![
            ParamType::new(InterfaceType::Output, FLOAT),
            ParamType::new(InterfaceType::Output, FLOAT),
        ],
    )
}
