use serde::Serialize;

use crate::{
    error::Result,
    object_id::{Address, ObjectId},
    type_tag::{Identifier, TypeTag},
};

/// A reference to a value available to a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Argument {
    GasCoin,
    /// The input at the given index
    Input(u16),
    /// The result of the command at the given index
    Result(u16),
    /// One of the results of a command returning a tuple
    NestedResult(u16, u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Pure {
    Bool(bool),
    U64(u64),
    Address(Address),
}

impl From<bool> for Pure {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for Pure {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}

impl From<Address> for Pure {
    fn from(value: Address) -> Self {
        Self::Address(value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Input {
    Object(ObjectId),
    Pure(Pure),
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveCall {
    package: ObjectId,
    module: Identifier,
    function: Identifier,
    type_arguments: Vec<TypeTag>,
    arguments: Vec<Argument>,
}

impl MoveCall {
    pub fn new(
        package: ObjectId,
        module: &str,
        function: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> Result<Self> {
        Identifier::new(module).and_then(|module| {
            Identifier::new(function).map(|function| Self {
                package,
                module,
                function,
                type_arguments,
                arguments,
            })
        })
    }

    pub const fn package(&self) -> &ObjectId {
        &self.package
    }

    pub const fn module(&self) -> &Identifier {
        &self.module
    }

    pub const fn function(&self) -> &Identifier {
        &self.function
    }

    pub fn type_arguments(&self) -> &[TypeTag] {
        &self.type_arguments
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    MoveCall(MoveCall),
    TransferObjects {
        objects: Vec<Argument>,
        address: Argument,
    },
}

impl Command {
    pub(super) fn arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        match self {
            Self::MoveCall(call) => call.arguments.iter().chain(None),
            Self::TransferObjects { objects, address } => {
                objects.iter().chain(Some(address))
            }
        }
    }

    /// `module::function` of a Move call, `transfer_objects` otherwise
    pub fn name(&self) -> String {
        match self {
            Self::MoveCall(call) => format!("{}::{}", call.module, call.function),
            Self::TransferObjects { .. } => "transfer_objects".into(),
        }
    }
}
