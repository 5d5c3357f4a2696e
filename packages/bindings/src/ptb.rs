// Programmable transaction commands
//
// A minimal description of a Sui programmable transaction: inputs, commands
// and the arguments that connect them. It is enough to lay out the calls the
// scripts make. Object inputs are bare ids here; `transaction` resolves
// them into something a node accepts.

use std::collections::HashMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use msend_types::{is_valid_identifier, ObjectId, TypeError, TypeTag};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::trace;

use crate::error::{BindingError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Argument {
    GasCoin,
    Input(u16),
    Result(u16),
    NestedResult(u16, u16),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CallArg {
    Pure(#[serde(with = "pure_bytes")] Vec<u8>),
    Object(ObjectId),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgrammableMoveCall {
    pub package: ObjectId,
    pub module: String,
    pub function: String,
    pub type_arguments: Vec<TypeTag>,
    pub arguments: Vec<Argument>,
}

impl ProgrammableMoveCall {
    /// `package::module::function`, compressed address.
    pub fn target(&self) -> String {
        format!("{}::{}::{}", self.package.short_str(), self.module, self.function)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveCall(Box<ProgrammableMoveCall>),
    TransferObjects(Vec<Argument>, Argument),
    SplitCoins(Argument, Vec<Argument>),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProgrammableTransaction {
    pub inputs: Vec<CallArg>,
    pub commands: Vec<Command>,
}

impl ProgrammableTransaction {
    pub fn move_calls(&self) -> impl Iterator<Item = &ProgrammableMoveCall> {
        self.commands.iter().filter_map(|command| match command {
            Command::MoveCall(call) => Some(call.as_ref()),
            _ => None,
        })
    }
}

/// An object argument: either an id still to be added as an input, or an
/// argument already in the transaction (an earlier result, the gas coin).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectInput {
    Id(ObjectId),
    Arg(Argument),
}

impl From<ObjectId> for ObjectInput {
    fn from(id: ObjectId) -> Self {
        ObjectInput::Id(id)
    }
}

impl From<Argument> for ObjectInput {
    fn from(arg: Argument) -> Self {
        ObjectInput::Arg(arg)
    }
}

#[derive(Debug, Default)]
pub struct ProgrammableTransactionBuilder {
    inputs: Vec<CallArg>,
    objects: HashMap<ObjectId, u16>,
    commands: Vec<Command>,
}

impl ProgrammableTransactionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push_input(&mut self, arg: CallArg) -> Result<u16> {
        let index = u16::try_from(self.inputs.len()).map_err(|_| BindingError::TooMany("inputs"))?;
        self.inputs.push(arg);
        Ok(index)
    }

    /// BCS-encode `value` as a pure input.
    pub fn pure<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<Argument> {
        let bytes = bcs::to_bytes(value)?;
        self.push_input(CallArg::Pure(bytes)).map(Argument::Input)
    }

    /// Add an object input. The same object is only added once.
    pub fn object(&mut self, id: ObjectId) -> Result<Argument> {
        if let Some(index) = self.objects.get(&id) {
            return Ok(Argument::Input(*index));
        }
        let index = self.push_input(CallArg::Object(id))?;
        self.objects.insert(id, index);
        Ok(Argument::Input(index))
    }

    pub fn obj(&mut self, input: impl Into<ObjectInput>) -> Result<Argument> {
        match input.into() {
            ObjectInput::Id(id) => self.object(id),
            ObjectInput::Arg(arg) => Ok(arg),
        }
    }

    pub fn command(&mut self, command: Command) -> Result<Argument> {
        let index =
            u16::try_from(self.commands.len()).map_err(|_| BindingError::TooMany("commands"))?;
        self.commands.push(command);
        Ok(Argument::Result(index))
    }

    pub fn move_call(
        &mut self,
        package: ObjectId,
        module: &str,
        function: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> Result<Argument> {
        for ident in [module, function] {
            if !is_valid_identifier(ident) {
                return Err(TypeError::InvalidIdentifier(ident.to_string()).into());
            }
        }
        trace!(package = %package.short_str(), module, function, "move call");
        self.command(Command::MoveCall(Box::new(ProgrammableMoveCall {
            package,
            module: module.to_string(),
            function: function.to_string(),
            type_arguments,
            arguments,
        })))
    }

    /// A move call returning a tuple, destructured into its `N` results.
    pub fn move_call_results<const N: usize>(
        &mut self,
        package: ObjectId,
        module: &str,
        function: &str,
        type_arguments: Vec<TypeTag>,
        arguments: Vec<Argument>,
    ) -> Result<[Argument; N]> {
        let call = self.move_call(package, module, function, type_arguments, arguments)?;
        nested_results(call)
    }

    pub fn split_coins(&mut self, coin: Argument, amounts: Vec<Argument>) -> Result<Argument> {
        self.command(Command::SplitCoins(coin, amounts))
    }

    /// Split one coin per amount, destructured.
    pub fn split_coins_into<const N: usize>(
        &mut self,
        coin: Argument,
        amounts: [Argument; N],
    ) -> Result<[Argument; N]> {
        let split = self.split_coins(coin, amounts.to_vec())?;
        nested_results(split)
    }

    pub fn transfer_objects(&mut self, objects: Vec<Argument>, recipient: Argument) -> Result<Argument> {
        self.command(Command::TransferObjects(objects, recipient))
    }

    pub fn finish(self) -> ProgrammableTransaction {
        ProgrammableTransaction {
            inputs: self.inputs,
            commands: self.commands,
        }
    }
}

fn nested_results<const N: usize>(result: Argument) -> Result<[Argument; N]> {
    let index = match result {
        Argument::Result(index) => index,
        _ => return Err(BindingError::field("result", "not a command result")),
    };
    let mut out = [Argument::GasCoin; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let i = u16::try_from(i).map_err(|_| BindingError::TooMany("results"))?;
        *slot = Argument::NestedResult(index, i);
    }
    Ok(out)
}

// Base64 in JSON, raw bytes in BCS
pub(crate) mod pure_bytes {
    use super::*;

    pub fn serialize<S: Serializer>(bytes: &Vec<u8>, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(&STANDARD.encode(bytes))
        } else {
            bytes.serialize(serializer)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            STANDARD.decode(s).map_err(serde::de::Error::custom)
        } else {
            Vec::<u8>::deserialize(deserializer)
        }
    }
}
