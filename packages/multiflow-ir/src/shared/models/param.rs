//! Parameter vocabulary shared between multi-functions and procedures.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle identifying the storage class of a value.
///
/// The concrete type registry lives in the caller; the IR only relies on
/// decidable equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataType(u32);

impl DataType {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Read/write mode of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterfaceType {
    /// Read by the callee; must be initialized beforehand.
    Input,
    /// Read and overwritten in place.
    Mutable,
    /// Written by the callee into a previously uninitialized slot.
    Output,
}

impl InterfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceType::Input => "in",
            InterfaceType::Mutable => "mut",
            InterfaceType::Output => "out",
        }
    }
}

impl fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data type plus interface role of a single multi-function parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamType {
    interface_type: InterfaceType,
    data_type: DataType,
}

impl ParamType {
    pub const fn new(interface_type: InterfaceType, data_type: DataType) -> Self {
        Self {
            interface_type,
            data_type,
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn interface_type(&self) -> InterfaceType {
        self.interface_type
    }
}
